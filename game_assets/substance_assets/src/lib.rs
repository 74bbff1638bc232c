//! Substance definitions loaded from `.substance.ron` asset files.
//!
//! A substance is a craftable material (iron, oak wood, bone, ...) whose
//! definition may carry tint data for overlay icons and durability modifier
//! rules for crafted tools. Each rule block is optional; a substance may
//! define any subset of them, or none.

use {
    bevy::{asset::LoadedFolder, platform::collections::HashMap, prelude::*},
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
};

pub struct SubstanceAssetsPlugin;

impl Plugin for SubstanceAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<SubstanceDefinition>::new(&[
            "substance.ron",
        ]))
        .init_resource::<SubstanceMap>()
        .add_systems(Startup, load_substance_library)
        .add_systems(Update, index_substance_definitions);
    }
}

/// Substance definition loaded from `.substance.ron` asset files.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct SubstanceDefinition {
    /// Unique identifier for the substance (e.g., "iron")
    pub id: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Tint applied to overlay icons made of this substance
    #[serde(default)]
    pub tint: Option<SubstanceTint>,
    /// Flat durability bonus per unit of this substance in a tool
    #[serde(default)]
    pub durability_increase: Option<DurabilityIncrease>,
    /// Durability multiplier per unit of this substance in a tool
    #[serde(default)]
    pub durability_multiply: Option<DurabilityMultiply>,
}

/// Tint data for overlay icons made of a substance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubstanceTint {
    pub hue: f32,
    #[serde(default = "default_scale")]
    pub brightness_scale: f32,
    #[serde(default = "default_scale")]
    pub saturation_scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

/// Additive durability rule: `max += per_unit * quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurabilityIncrease {
    pub per_unit: f32,
}

/// Multiplicative durability rule: `max *= factor_per_unit ^ quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurabilityMultiply {
    pub factor_per_unit: f32,
}

/// Resource mapping substance ids to their asset handles.
/// Populated by [`index_substance_definitions`] as assets finish loading.
#[derive(Resource, Default)]
pub struct SubstanceMap {
    pub handles: HashMap<String, Handle<SubstanceDefinition>>,
}

#[derive(Resource)]
pub struct SubstanceFolderHandle(pub Handle<LoadedFolder>);

/// Read access to substance modifier rules, keyed by substance id.
///
/// Absent ids are an expected condition (not every substance defines rules),
/// so lookups return Option rather than erroring.
pub trait SubstanceRuleSource {
    fn rule(&self, substance: &str) -> Option<&SubstanceDefinition>;
}

/// Rule source backed by the live asset store.
pub struct SubstanceRegistry<'a> {
    map: &'a SubstanceMap,
    assets: &'a Assets<SubstanceDefinition>,
}

impl<'a> SubstanceRegistry<'a> {
    pub fn new(map: &'a SubstanceMap, assets: &'a Assets<SubstanceDefinition>) -> Self {
        Self { map, assets }
    }
}

impl SubstanceRuleSource for SubstanceRegistry<'_> {
    fn rule(&self, substance: &str) -> Option<&SubstanceDefinition> {
        self.map
            .handles
            .get(substance)
            .and_then(|handle| self.assets.get(handle))
    }
}

/// Plain-map rule source, used by tests that run without an asset server.
impl SubstanceRuleSource for HashMap<String, SubstanceDefinition> {
    fn rule(&self, substance: &str) -> Option<&SubstanceDefinition> {
        self.get(substance)
    }
}

fn load_substance_library(mut cmd: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load_folder("substances");
    cmd.insert_resource(SubstanceFolderHandle(handle));
}

/// Indexes loaded substance definitions into the SubstanceMap.
/// Definitions that are already indexed are skipped, so the system is safe
/// to run every frame.
pub fn index_substance_definitions(
    mut map: ResMut<SubstanceMap>,
    mut assets: ResMut<Assets<SubstanceDefinition>>,
) {
    let ids: Vec<_> = assets.ids().collect();

    for id in ids {
        let def_id = {
            let Some(def) = assets.get(id) else {
                continue;
            };

            if map.handles.contains_key(&def.id) {
                continue;
            }

            def.id.clone()
        };

        let Some(handle) = assets.get_strong_handle(id) else {
            continue;
        };

        debug!("Indexed substance definition '{}'", def_id);
        map.handles.insert(def_id, handle);
    }
}
