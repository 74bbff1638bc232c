//! Substance-driven tool modification rules.
//!
//! When the crafting system announces a freshly created tool via
//! [`tool_events::ToolCreated`], two independent observers react:
//! one re-tints the tool's overlay icon layers from the substances of the
//! input items, the other adjusts the tool's durability from its material
//! composition. Substance rules are `.substance.ron` assets provided by
//! [`substance_assets`].

use bevy::prelude::*;

pub mod icons;
pub mod modifiers;
pub mod systems;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use {
    icons::{CanonicalIconId, IconCatalog},
    modifiers::{InputItemView, ToolModifierError, apply_durability, resolve_overlay_tints},
};

pub struct ToolModifiersPlugin;

impl Plugin for ToolModifiersPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            tool_components::ToolComponentsPlugin,
            substance_assets::SubstanceAssetsPlugin,
        ))
        .init_resource::<IconCatalog>()
        .add_observer(systems::on_tool_created_tint_overlays)
        .add_observer(systems::on_tool_created_modify_durability);
    }
}
