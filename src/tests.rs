use {
    crate::{IconCatalog, systems},
    bevy::prelude::*,
    substance_assets::{
        DurabilityIncrease, DurabilityMultiply, SubstanceDefinition, SubstanceMap, SubstanceTint,
    },
    tool_components::{
        Durability, MaterialComposition, MaterialItem, TintOverlayIcon, TintParameter,
    },
    tool_events::ToolCreated,
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<SubstanceDefinition>();
    app.init_resource::<SubstanceMap>();
    app.init_resource::<IconCatalog>();
    app.add_observer(systems::on_tool_created_tint_overlays);
    app.add_observer(systems::on_tool_created_modify_durability);
    app
}

fn register_substance(app: &mut App, def: SubstanceDefinition) {
    let id = def.id.clone();
    let handle = app
        .world_mut()
        .resource_mut::<Assets<SubstanceDefinition>>()
        .add(def);
    app.world_mut()
        .resource_mut::<SubstanceMap>()
        .handles
        .insert(id, handle);
}

fn iron() -> SubstanceDefinition {
    SubstanceDefinition {
        id: "iron".to_string(),
        display_name: "Iron".to_string(),
        tint: Some(SubstanceTint {
            hue: 210.0,
            brightness_scale: 0.9,
            saturation_scale: 0.4,
        }),
        durability_increase: Some(DurabilityIncrease { per_unit: 15.0 }),
        durability_multiply: None,
    }
}

fn oak_wood() -> SubstanceDefinition {
    SubstanceDefinition {
        id: "oak_wood".to_string(),
        display_name: "Oak Wood".to_string(),
        tint: Some(SubstanceTint {
            hue: 25.0,
            brightness_scale: 0.8,
            saturation_scale: 0.6,
        }),
        durability_increase: None,
        durability_multiply: Some(DurabilityMultiply {
            factor_per_unit: 1.1,
        }),
    }
}

fn hammer_overlay() -> TintOverlayIcon {
    let mut overlay = TintOverlayIcon::default();
    overlay
        .texture
        .insert("hammerHead".to_string(), TintParameter::tintable(0.0));
    overlay
        .texture
        .insert("toolHandle".to_string(), TintParameter::tintable(0.0));
    overlay
        .texture
        .insert("baseTexture".to_string(), TintParameter::default());
    overlay
}

#[test]
fn crafted_tool_takes_input_tints_and_falls_back_for_the_rest() {
    let mut app = test_app();
    register_substance(&mut app, iron());
    register_substance(&mut app, oak_wood());

    // Iron head ingot; the handle has no matching input.
    let head_input = app
        .world_mut()
        .spawn((
            MaterialItem::from("hammerHead"),
            MaterialComposition::new([("iron".to_string(), 2.0)]),
        ))
        .id();

    let tool = app
        .world_mut()
        .spawn((
            hammer_overlay(),
            MaterialComposition::new([
                ("oak_wood".to_string(), 3.0),
                ("iron".to_string(), 2.0),
            ]),
        ))
        .id();

    app.world_mut().trigger(ToolCreated {
        tool,
        input_items: vec![head_input],
    });
    app.update();

    let overlay = app.world().entity(tool).get::<TintOverlayIcon>().unwrap();

    // Head matched the iron input.
    assert_eq!(overlay.texture["hammerHead"].hue, Some(210.0));
    assert_eq!(overlay.texture["hammerHead"].brightness_scale, 0.9);

    // Handle fell back to the tool's primary substance (oak wood).
    assert_eq!(overlay.texture["toolHandle"].hue, Some(25.0));
    assert_eq!(overlay.texture["toolHandle"].saturation_scale, 0.6);

    // The untinted base layer stays as authored.
    assert_eq!(overlay.texture["baseTexture"], TintParameter::default());
}

#[test]
fn crafted_tool_durability_is_modified_by_its_substances() {
    let mut app = test_app();
    register_substance(&mut app, iron());
    register_substance(&mut app, oak_wood());

    let tool = app
        .world_mut()
        .spawn((
            Durability::new(10.0),
            MaterialComposition::new([
                ("iron".to_string(), 2.0),
                ("oak_wood".to_string(), 1.0),
            ]),
        ))
        .id();

    app.world_mut().trigger(ToolCreated {
        tool,
        input_items: vec![],
    });
    app.update();

    let durability = app.world().entity(tool).get::<Durability>().unwrap();

    // (10 + 15 * 2.0) * 1.1^1.0
    assert!((durability.max - 44.0).abs() < 1e-4);
    assert_eq!(durability.current, durability.max);
}

#[test]
fn tool_without_composition_keeps_its_durability() {
    let mut app = test_app();
    register_substance(&mut app, iron());

    let tool = app.world_mut().spawn(Durability::new(50.0)).id();

    app.world_mut().trigger(ToolCreated {
        tool,
        input_items: vec![],
    });
    app.update();

    let durability = app.world().entity(tool).get::<Durability>().unwrap();
    assert_eq!(*durability, Durability::new(50.0));
}

#[test]
fn malformed_input_aborts_tint_resolution_but_not_durability() {
    let mut app = test_app();
    register_substance(&mut app, iron());

    // Icon without a composition violates the event producer's contract.
    let bad_input = app.world_mut().spawn(MaterialItem::from("hammerHead")).id();

    let tool = app
        .world_mut()
        .spawn((
            hammer_overlay(),
            Durability::new(10.0),
            MaterialComposition::new([("iron".to_string(), 1.0)]),
        ))
        .id();

    app.world_mut().trigger(ToolCreated {
        tool,
        input_items: vec![bad_input],
    });
    app.update();

    // Overlay untouched, including the tintable layers.
    let overlay = app.world().entity(tool).get::<TintOverlayIcon>().unwrap();
    assert_eq!(overlay.texture["hammerHead"].hue, Some(0.0));
    assert_eq!(overlay.texture["toolHandle"].hue, Some(0.0));

    // The durability observer is independent and still ran.
    let durability = app.world().entity(tool).get::<Durability>().unwrap();
    assert!((durability.max - 25.0).abs() < 1e-4);
}

#[test]
fn event_for_a_plain_entity_is_a_no_op() {
    let mut app = test_app();

    let tool = app.world_mut().spawn_empty().id();

    app.world_mut().trigger(ToolCreated {
        tool,
        input_items: vec![],
    });
    app.update();

    assert!(app.world().get_entity(tool).is_ok());
}
