//! Components carried by crafted tools and their crafting inputs.

use {
    bevy::prelude::*,
    std::collections::{BTreeMap, HashMap},
};

pub struct ToolComponentsPlugin;

impl Plugin for ToolComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Durability>();
        app.register_type::<MaterialItem>();
        app.register_type::<MaterialComposition>();
        app.register_type::<TintOverlayIcon>();
    }
}

/// The weighted blend of substances an item is made of.
///
/// Keys are substance ids (e.g. "iron"), values are non-negative quantities.
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(Component, Default)]
pub struct MaterialComposition {
    pub contents: HashMap<String, f32>,
}

impl MaterialComposition {
    pub fn new(contents: impl IntoIterator<Item = (String, f32)>) -> Self {
        Self {
            contents: contents.into_iter().collect(),
        }
    }

    /// The substance with the largest quantity.
    ///
    /// Ties break to the lexicographically smallest id so the result does not
    /// depend on map iteration order. Returns None for an empty composition.
    pub fn primary_substance(&self) -> Option<&str> {
        self.contents
            .iter()
            .max_by(|(a_id, a_quantity), (b_id, b_quantity)| {
                a_quantity.total_cmp(b_quantity).then_with(|| b_id.cmp(a_id))
            })
            .map(|(id, _)| id.as_str())
    }
}

/// Icon identifier of a crafting input, matched against overlay texture keys.
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(Component, Default)]
pub struct MaterialItem {
    pub icon: String,
}

impl From<&str> for MaterialItem {
    fn from(icon: &str) -> Self {
        Self { icon: icon.to_string() }
    }
}

/// Remaining uses before an item breaks.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq)]
#[reflect(Component, Default)]
pub struct Durability {
    pub current: f32,
    pub max: f32,
}

impl Durability {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Tintable texture layers rendered on top of an item's base icon.
///
/// Uses a BTreeMap so entry evaluation order is reproducible.
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(Component, Default)]
pub struct TintOverlayIcon {
    pub texture: BTreeMap<String, TintParameter>,
}

/// Tint applied to one overlay layer.
///
/// A layer with `hue: None` is a plain base texture and is never re-tinted.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
#[reflect(Default)]
pub struct TintParameter {
    pub hue: Option<f32>,
    pub brightness_scale: f32,
    pub saturation_scale: f32,
    /// Pixel offset of the layer on the base icon. Tint resolution never
    /// touches this.
    pub offset: Option<IVec2>,
}

impl Default for TintParameter {
    fn default() -> Self {
        Self {
            hue: None,
            brightness_scale: 1.0,
            saturation_scale: 1.0,
            offset: None,
        }
    }
}

impl TintParameter {
    pub fn tintable(hue: f32) -> Self {
        Self {
            hue: Some(hue),
            ..Default::default()
        }
    }
}
