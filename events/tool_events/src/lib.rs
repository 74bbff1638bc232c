use bevy::prelude::*;

/// Fired by the crafting system once a tool entity has been assembled from
/// its input items. Used with observers via commands.trigger().
#[derive(Event, Debug)]
pub struct ToolCreated {
    /// The freshly crafted tool.
    pub tool: Entity,
    /// The items consumed to craft it, in crafting-grid order.
    pub input_items: Vec<Entity>,
}
