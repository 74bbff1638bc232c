use {
    crate::{
        icons::IconCatalog,
        modifiers::{self, InputItemView},
    },
    bevy::prelude::*,
    substance_assets::{SubstanceDefinition, SubstanceMap, SubstanceRegistry},
    tool_components::{Durability, MaterialComposition, MaterialItem, TintOverlayIcon},
    tool_events::ToolCreated,
};

/// Observer that mimics the tool's tint overlay layers with the input items
/// used to craft it.
///
/// A malformed input item aborts tint resolution for this tool only; the
/// event producer broke its contract and the overlay is left as authored.
pub fn on_tool_created_tint_overlays(
    trigger: On<ToolCreated>,
    mut tools: Query<(&mut TintOverlayIcon, Option<&MaterialComposition>)>,
    input_items: Query<(Option<&MaterialItem>, Option<&MaterialComposition>)>,
    catalog: Res<IconCatalog>,
    substance_map: Res<SubstanceMap>,
    substances: Res<Assets<SubstanceDefinition>>,
) {
    let event = trigger.event();

    // Tools without a tint overlay have nothing to re-tint.
    let Ok((mut overlay, tool_composition)) = tools.get_mut(event.tool) else {
        return;
    };

    let mut inputs = Vec::with_capacity(event.input_items.len());
    for &input in &event.input_items {
        let Ok((item, composition)) = input_items.get(input) else {
            debug!("Input item {} despawned before tint resolution", input);
            continue;
        };

        match InputItemView::from_parts(input, item, composition, &catalog) {
            Ok(Some(view)) => inputs.push(view),
            Ok(None) => {}
            Err(err) => {
                error!("Aborting tint resolution for tool {}: {}", event.tool, err);
                return;
            }
        }
    }

    let registry = SubstanceRegistry::new(&substance_map, &substances);
    let tool_primary = tool_composition.and_then(MaterialComposition::primary_substance);

    modifiers::resolve_overlay_tints(&mut overlay, &inputs, tool_primary, &catalog, &registry);
}

/// Observer that modifies the tool's durability based on the substances used
/// in its creation.
pub fn on_tool_created_modify_durability(
    trigger: On<ToolCreated>,
    mut tools: Query<(&mut Durability, Option<&MaterialComposition>)>,
    substance_map: Res<SubstanceMap>,
    substances: Res<Assets<SubstanceDefinition>>,
) {
    let event = trigger.event();

    let Ok((mut durability, composition)) = tools.get_mut(event.tool) else {
        return;
    };

    // Durability without a composition was set by some other mechanism.
    let Some(composition) = composition else {
        return;
    };

    let registry = SubstanceRegistry::new(&substance_map, &substances);
    modifiers::apply_durability(composition, &mut durability, &registry);

    debug!(
        "Tool {} durability set to {} from {} substances",
        event.tool,
        durability.max,
        composition.contents.len()
    );
}
