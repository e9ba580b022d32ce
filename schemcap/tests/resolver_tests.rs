//! Behavior tests for connectivity resolution built directly from scene
//! values: naming priority, proximity shorts, and ordering guarantees.

use schemcap::prelude::*;
use schemcap::{ComponentInstance, ComponentKind, Point, Terminal, WireSegment};

fn resistor(name: &str, x: f64, y: f64) -> ComponentInstance {
    ComponentInstance::new(
        name,
        ComponentKind::Passive {
            value: "1k".to_string(),
        },
        Point::new(x, y),
        vec![Terminal::new("n1", -30.0, 0.0), Terminal::new("n2", 30.0, 0.0)],
    )
}

fn reference_pin(name: &str, x: f64, y: f64) -> ComponentInstance {
    ComponentInstance::new(
        name,
        ComponentKind::Pin,
        Point::new(x, y),
        vec![Terminal::new("pin", 0.0, 0.0)],
    )
}

#[test]
fn test_lone_resistor_serializes_with_placeholders() {
    // Terminals at (0,0) and (60,0): too far apart to short, nothing else
    // in the scene.
    let scene = Scene {
        components: vec![resistor("R1", 30.0, 0.0)],
        wires: vec![],
    };
    let export = SchemCapCore::export_netlist(&scene);
    assert!(export.netlist.contains("R1 NC_R1_n1 NC_R1_n2 1k"));
}

#[test]
fn test_wire_touching_one_terminal_makes_one_net() {
    let scene = Scene {
        components: vec![resistor("R1", 30.0, 0.0)],
        wires: vec![WireSegment::new((0.0, 0.0), (200.0, 0.0))],
    };
    let export = SchemCapCore::export_netlist(&scene);
    assert!(export.netlist.contains("R1 N_1 NC_R1_n2 1k"));
    assert_eq!(export.nets.name_at(Point::new(0.0, 0.0)), Some("N_1"));
}

#[test]
fn test_pin_overrides_synthesized_name() {
    let scene = Scene {
        components: vec![reference_pin("Vin", 0.0, 0.0), resistor("R1", 30.0, 0.0)],
        wires: vec![],
    };
    let export = SchemCapCore::export_netlist(&scene);
    assert!(export.netlist.contains("R1 Vin NC_R1_n2 1k"));
}

#[test]
fn test_close_terminals_short_without_a_wire() {
    // R1 n2 at (60, 0) and R2 n1 at (70, 0): 10 units apart under the
    // 15-unit tolerance, so they merge with no wire drawn.
    let scene = Scene {
        components: vec![resistor("R1", 30.0, 0.0), resistor("R2", 100.0, 0.0)],
        wires: vec![],
    };
    let nets = SchemCapCore::resolve_nets(&scene);
    let a = nets.name_at(Point::new(60.0, 0.0));
    let b = nets.name_at(Point::new(70.0, 0.0));
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_merge_is_symmetric_in_component_order() {
    let forward = Scene {
        components: vec![resistor("R1", 30.0, 0.0), resistor("R2", 100.0, 0.0)],
        wires: vec![],
    };
    let reversed = Scene {
        components: vec![resistor("R2", 100.0, 0.0), resistor("R1", 30.0, 0.0)],
        wires: vec![],
    };

    for scene in [&forward, &reversed] {
        let nets = SchemCapCore::resolve_nets(scene);
        assert_eq!(
            nets.name_at(Point::new(60.0, 0.0)),
            nets.name_at(Point::new(70.0, 0.0)),
            "terminals within tolerance must share a net regardless of visit order"
        );
    }
}

#[test]
fn test_every_terminal_is_named_or_flagged() {
    let mut r2 = resistor("R2", 100.0, 0.0);
    r2.set_net("n2", "tap");
    let scene = Scene {
        components: vec![
            reference_pin("Vin", 0.0, 0.0),
            resistor("R1", 30.0, 0.0),
            r2,
            resistor("R3", 400.0, 400.0),
        ],
        wires: vec![WireSegment::new((130.0, 0.0), (130.0, 100.0))],
    };
    let export = SchemCapCore::export_netlist(&scene);

    for (component, terminal, position) in scene.terminals() {
        let named = export.nets.name_at(position).is_some();
        let flagged = export
            .netlist
            .contains(&format!("NC_{}_{}", component.name, terminal.name));
        assert!(
            named || flagged || component.kind.is_pin(),
            "terminal {}.{} must be named or flagged",
            component.name,
            terminal.name
        );
    }
}

#[test]
fn test_zero_length_wire_joins_a_terminal() {
    // Degenerate wire sitting exactly on R1 n1.
    let scene = Scene {
        components: vec![resistor("R1", 30.0, 0.0)],
        wires: vec![WireSegment::new((0.0, 0.0), (0.0, 0.0))],
    };
    let nets = SchemCapCore::resolve_nets(&scene);
    assert_eq!(nets.name_at(Point::new(0.0, 0.0)), Some("N_1"));
}

#[test]
fn test_duplicate_component_names_pass_through() {
    // Two components sharing a name is the caller's problem; both lines
    // are still emitted.
    let scene = Scene {
        components: vec![resistor("R1", 30.0, 0.0), resistor("R1", 400.0, 400.0)],
        wires: vec![],
    };
    let export = SchemCapCore::export_netlist(&scene);
    let count = export
        .netlist
        .lines()
        .filter(|line| line.starts_with("R1 "))
        .count();
    assert_eq!(count, 2);
}

#[test]
fn test_mirrored_rotated_transistor_terminals() {
    // Mirror is applied before rotation: with both set, the drain of a
    // transistor at the origin lands at (25, -20), not (-25, 20).
    let mosfet = ComponentInstance::new(
        "M_N1",
        ComponentKind::Mosfet {
            model: "nch".to_string(),
            width: "1u".to_string(),
            length: "0.18u".to_string(),
        },
        Point::new(0.0, 0.0),
        vec![
            Terminal::new("D", 20.0, -25.0),
            Terminal::new("G", -30.0, 0.0),
            Terminal::new("S", 20.0, 25.0),
            Terminal::new("B", 20.0, 0.0),
        ],
    )
    .with_rotation(schemcap::Rotation::R90)
    .with_mirror();

    let drain = mosfet.terminal_position(&mosfet.terminals[0]);
    assert_eq!((drain.x, drain.y), (25.0, -20.0));

    // A wire landing exactly there picks the drain up.
    let scene = Scene {
        components: vec![mosfet],
        wires: vec![WireSegment::new((25.0, -20.0), (200.0, -20.0))],
    };
    let nets = SchemCapCore::resolve_nets(&scene);
    assert_eq!(nets.name_at(Point::new(25.0, -20.0)), Some("N_1"));
}

#[test]
fn test_scene_builder_produces_resolvable_scene() {
    let mut builder = SceneBuilder::new();
    builder.place(Device::Pin, 100.0, 100.0).set_name("IN");
    builder.place(Device::Resistor, 160.0, 100.0).set_value("4.7k");
    builder.wire((100.0, 100.0), (130.0, 100.0));
    let scene = builder.finish();

    let export = SchemCapCore::export_netlist(&scene);
    assert!(export.netlist.contains("R1 IN NC_R1_n2 4.7k"));
}
