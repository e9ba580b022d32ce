//! Device catalog: the standard terminal layouts and default attributes a
//! capture front end places, plus sequential reference naming.

use std::collections::HashMap;

use crate::geometry::{self, Point};

use super::schema::{ComponentInstance, ComponentKind, Scene, Terminal, WireSegment};

/// The devices a capture front end can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Resistor,
    Inductor,
    Capacitor,
    Nmos,
    Pmos,
    Pin,
}

impl Device {
    pub const ALL: [Device; 6] = [
        Device::Resistor,
        Device::Inductor,
        Device::Capacitor,
        Device::Nmos,
        Device::Pmos,
        Device::Pin,
    ];

    /// Reference-name prefix (the "R" in "R1").
    pub fn prefix(self) -> &'static str {
        match self {
            Device::Resistor => "R",
            Device::Inductor => "L",
            Device::Capacitor => "C",
            Device::Nmos => "M_N",
            Device::Pmos => "M_P",
            Device::Pin => "PIN",
        }
    }

    /// Default kind payload for a freshly placed device.
    pub fn kind(self) -> ComponentKind {
        match self {
            Device::Resistor | Device::Inductor | Device::Capacitor => ComponentKind::Passive {
                value: "1k".to_string(),
            },
            Device::Nmos => ComponentKind::Mosfet {
                model: "nch".to_string(),
                width: "1u".to_string(),
                length: "0.18u".to_string(),
            },
            Device::Pmos => ComponentKind::Mosfet {
                model: "pch".to_string(),
                width: "1u".to_string(),
                length: "0.18u".to_string(),
            },
            Device::Pin => ComponentKind::Pin,
        }
    }

    /// Standard terminal layout in component-local coordinates.
    pub fn terminals(self) -> Vec<Terminal> {
        match self {
            Device::Resistor | Device::Inductor | Device::Capacitor => vec![
                Terminal::new("n1", -30.0, 0.0),
                Terminal::new("n2", 30.0, 0.0),
            ],
            Device::Nmos | Device::Pmos => vec![
                Terminal::new("D", 20.0, -25.0),
                Terminal::new("G", -30.0, 0.0),
                Terminal::new("S", 20.0, 25.0),
                Terminal::new("B", 20.0, 0.0),
            ],
            Device::Pin => vec![Terminal::new("pin", 0.0, 0.0)],
        }
    }
}

/// Builds scenes programmatically with the editor's placement behavior:
/// positions snap to the grid and references are numbered per prefix in
/// placement order (R1, R2, ..., M_N1, ...).
#[derive(Debug, Default)]
pub struct SceneBuilder {
    components: Vec<ComponentInstance>,
    wires: Vec<WireSegment>,
    counts: HashMap<&'static str, u32>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a device at (x, y), snapped to the grid. Returns the new
    /// instance so callers can chain attribute edits.
    pub fn place(&mut self, device: Device, x: f64, y: f64) -> &mut ComponentInstance {
        let count = self.counts.entry(device.prefix()).or_insert(0);
        *count += 1;
        let name = format!("{}{}", device.prefix(), count);
        let position = Point::new(geometry::snap(x), geometry::snap(y));
        let instance = ComponentInstance::new(name, device.kind(), position, device.terminals());
        self.components.push(instance);
        self.components.last_mut().expect("just pushed")
    }

    /// Draw a wire between two absolute endpoints.
    pub fn wire(&mut self, start: impl Into<Point>, end: impl Into<Point>) -> &mut Self {
        self.wires.push(WireSegment::new(start, end));
        self
    }

    pub fn finish(self) -> Scene {
        Scene {
            components: self.components,
            wires: self.wires,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_references_count_per_prefix() {
        let mut builder = SceneBuilder::new();
        builder.place(Device::Resistor, 100.0, 100.0);
        builder.place(Device::Capacitor, 200.0, 100.0);
        builder.place(Device::Resistor, 300.0, 100.0);
        builder.place(Device::Pin, 400.0, 100.0);
        let scene = builder.finish();

        let names: Vec<&str> = scene.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["R1", "C1", "R2", "PIN1"]);
    }

    #[test]
    fn test_placement_snaps_to_grid() {
        let mut builder = SceneBuilder::new();
        builder.place(Device::Inductor, 309.0, 292.0);
        let scene = builder.finish();
        let position = scene.components[0].position;
        assert_eq!((position.x, position.y), (300.0, 300.0));
    }

    #[test]
    fn test_mosfet_layout_matches_symbol() {
        let terminals = Device::Nmos.terminals();
        let names: Vec<&str> = terminals.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["D", "G", "S", "B"]);
        assert_eq!((terminals[0].offset.x, terminals[0].offset.y), (20.0, -25.0));
    }

    #[test]
    fn test_defaults_per_device() {
        assert_eq!(
            Device::Capacitor.kind(),
            ComponentKind::Passive {
                value: "1k".to_string()
            }
        );
        match Device::Pmos.kind() {
            ComponentKind::Mosfet { model, width, length } => {
                assert_eq!(model, "pch");
                assert_eq!(width, "1u");
                assert_eq!(length, "0.18u");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }
}
