//! The two substance-driven rule evaluators.
//!
//! Both are pure functions over data snapshotted by the observers in
//! [`crate::systems`], so they can be tested without an asset server or a
//! running app.

use {
    crate::icons::{CanonicalIconId, IconCatalog},
    bevy::prelude::*,
    substance_assets::SubstanceRuleSource,
    thiserror::Error,
    tool_components::{Durability, MaterialComposition, MaterialItem, TintOverlayIcon, TintParameter},
};

/// Contract violations in the input items of a tool-creation event.
///
/// The event producer guarantees that a material input carries both an icon
/// and a composition; one without the other aborts evaluation for this tool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolModifierError {
    #[error("input item {entity} has a material composition but no item icon")]
    MissingItemIcon { entity: Entity },
    #[error("input item {entity} has an item icon but no material composition")]
    MissingComposition { entity: Entity },
    #[error("input item {entity} has an empty material composition")]
    EmptyComposition { entity: Entity },
}

/// Snapshot of one crafting input, taken before tint evaluation.
#[derive(Debug, PartialEq)]
pub struct InputItemView {
    pub icon: CanonicalIconId,
    pub primary_substance: String,
}

impl InputItemView {
    /// Builds the view for one input entity.
    ///
    /// Entities with neither an icon nor a composition are not material
    /// inputs and yield `Ok(None)`.
    pub fn from_parts(
        entity: Entity,
        item: Option<&MaterialItem>,
        composition: Option<&MaterialComposition>,
        catalog: &IconCatalog,
    ) -> Result<Option<Self>, ToolModifierError> {
        match (item, composition) {
            (Some(item), Some(composition)) => {
                let Some(primary) = composition.primary_substance() else {
                    return Err(ToolModifierError::EmptyComposition { entity });
                };

                Ok(Some(Self {
                    icon: catalog.resolve(&item.icon),
                    primary_substance: primary.to_string(),
                }))
            }
            (Some(_), None) => Err(ToolModifierError::MissingComposition { entity }),
            (None, Some(_)) => Err(ToolModifierError::MissingItemIcon { entity }),
            (None, None) => Ok(None),
        }
    }
}

/// Re-tints a tool's overlay layers from the substances of its inputs.
///
/// Each overlay entry takes the tint of the last input (in input order) whose
/// icon matches the entry's texture key. Entries no input matched fall back
/// to the tool's own primary substance, but only if they were already
/// configured as tintable (`hue` set); untinted base layers are never
/// touched. Substances without registered tint data are skipped.
pub fn resolve_overlay_tints(
    overlay: &mut TintOverlayIcon,
    inputs: &[InputItemView],
    tool_primary_substance: Option<&str>,
    catalog: &IconCatalog,
    rules: &impl SubstanceRuleSource,
) {
    for (texture_key, tint) in overlay.texture.iter_mut() {
        let overlay_icon = catalog.resolve(texture_key);
        let mut matched_icon = false;

        for input in inputs {
            if input.icon == overlay_icon {
                apply_substance_tint(&input.primary_substance, tint, rules);
                matched_icon = true;
            }
        }

        // No input matched this layer; if it was previously set up as
        // tintable, tint it from the tool's overall substance instead.
        if !matched_icon && tint.hue.is_some() {
            if let Some(substance) = tool_primary_substance {
                apply_substance_tint(substance, tint, rules);
            }
        }
    }
}

fn apply_substance_tint(
    substance: &str,
    tint: &mut TintParameter,
    rules: &impl SubstanceRuleSource,
) {
    let Some(definition) = rules.rule(substance) else {
        return;
    };
    let Some(substance_tint) = definition.tint.as_ref() else {
        return;
    };

    // The layer offset stays as authored.
    tint.hue = Some(substance_tint.hue);
    tint.brightness_scale = substance_tint.brightness_scale;
    tint.saturation_scale = substance_tint.saturation_scale;
}

/// Adjusts a tool's maximum durability from its material composition.
///
/// Additive rules are applied first, multiplicative rules second, and the
/// current durability is reset to the new maximum. Both passes are
/// order-independent up to floating-point summation order; exact bit
/// reproducibility across composition orderings is not guaranteed, only
/// value-equivalence within floating-point tolerance.
pub fn apply_durability(
    composition: &MaterialComposition,
    durability: &mut Durability,
    rules: &impl SubstanceRuleSource,
) {
    for (substance, quantity) in composition.contents.iter() {
        if let Some(increase) = rules
            .rule(substance)
            .and_then(|definition| definition.durability_increase.as_ref())
        {
            durability.max += increase.per_unit * quantity;
        }
    }

    for (substance, quantity) in composition.contents.iter() {
        if let Some(multiply) = rules
            .rule(substance)
            .and_then(|definition| definition.durability_multiply.as_ref())
        {
            durability.max *= multiply.factor_per_unit.powf(*quantity);
        }
    }

    durability.current = durability.max;
}
