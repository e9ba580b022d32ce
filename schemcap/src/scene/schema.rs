//! Scene snapshot handed to the connectivity core.
//!
//! The interactive layer owns the mutable canvas; what crosses into this
//! crate is an ordered, internally consistent snapshot of component
//! instances and wire segments. Resolution never mutates it, and every pass
//! is a full rebuild from whatever snapshot it is handed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::SchemCapError;
use crate::geometry::{self, Point, Rotation};

/// Kind-specific payload of a component instance.
///
/// Attribute strings are opaque here: "1k" or "0.18u" pass straight through
/// to the netlist, and nothing in this crate validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentKind {
    /// Two-terminal passive (resistor, inductor, capacitor).
    Passive { value: String },
    /// Four-terminal MOS transistor.
    Mosfet {
        model: String,
        width: String,
        length: String,
    },
    /// Single-terminal external-reference point. Its component name names
    /// the net it touches, and it never appears in the netlist body.
    Pin,
}

impl ComponentKind {
    pub fn is_pin(&self) -> bool {
        matches!(self, ComponentKind::Pin)
    }
}

/// A named connection point in component-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminal {
    pub name: String,
    pub offset: Point,
    /// User-assigned net name; blank means unset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub net: String,
}

impl Terminal {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            offset: Point::new(x, y),
            net: String::new(),
        }
    }

    /// The override, if one was actually entered.
    pub fn net_override(&self) -> Option<&str> {
        let trimmed = self.net.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// One placed component: kind payload, placement, and its ordered terminal
/// list. The list itself is fixed after construction; only terminal
/// attributes (the net override) are editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    pub name: String,
    pub kind: ComponentKind,
    pub position: Point,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub mirror: bool,
    pub terminals: Vec<Terminal>,
}

impl ComponentInstance {
    pub fn new(
        name: impl Into<String>,
        kind: ComponentKind,
        position: Point,
        terminals: Vec<Terminal>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            rotation: Rotation::R0,
            mirror: false,
            terminals,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mirror(mut self) -> Self {
        self.mirror = true;
        self
    }

    pub fn with_net(mut self, terminal: &str, net: &str) -> Self {
        self.set_net(terminal, net);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Replace the value of a passive; ignored for other kinds.
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        if let ComponentKind::Passive { value: v } = &mut self.kind {
            *v = value.into();
        }
        self
    }

    /// Replace the model of a transistor; ignored for other kinds.
    pub fn set_model(&mut self, model: impl Into<String>) -> &mut Self {
        if let ComponentKind::Mosfet { model: m, .. } = &mut self.kind {
            *m = model.into();
        }
        self
    }

    pub fn set_width(&mut self, width: impl Into<String>) -> &mut Self {
        if let ComponentKind::Mosfet { width: w, .. } = &mut self.kind {
            *w = width.into();
        }
        self
    }

    pub fn set_length(&mut self, length: impl Into<String>) -> &mut Self {
        if let ComponentKind::Mosfet { length: l, .. } = &mut self.kind {
            *l = length.into();
        }
        self
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> &mut Self {
        self.rotation = rotation;
        self
    }

    pub fn set_mirror(&mut self, mirror: bool) -> &mut Self {
        self.mirror = mirror;
        self
    }

    /// Assign a net-name override to the named terminal. Unknown terminal
    /// names are ignored.
    pub fn set_net(&mut self, terminal: &str, net: &str) -> &mut Self {
        if let Some(t) = self.terminals.iter_mut().find(|t| t.name == terminal) {
            t.net = net.to_string();
        }
        self
    }

    /// Absolute position of one of this component's terminals: mirror the
    /// local x, rotate, translate.
    pub fn terminal_position(&self, terminal: &Terminal) -> Point {
        geometry::transform_point(terminal.offset, self.position, self.rotation, self.mirror)
    }
}

/// An undirected wire between two absolute endpoints. Zero-length segments
/// are legal and still anchor connectivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSegment {
    pub start: Point,
    pub end: Point,
}

impl WireSegment {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// The full snapshot: ordered components and wires.
///
/// Positions are expected to be grid-quantized already (the front end snaps
/// on placement); this crate does not re-snap loaded scenes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub components: Vec<ComponentInstance>,
    #[serde(default)]
    pub wires: Vec<WireSegment>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a scene snapshot from JSON.
    pub fn from_json_str(text: &str) -> Result<Self, SchemCapError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a scene snapshot from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SchemCapError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize the snapshot back to pretty JSON.
    pub fn to_json_string(&self) -> Result<String, SchemCapError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every terminal with its owner and absolute position, in the one
    /// enumeration order net naming depends on: components in scene order,
    /// then each component's own terminal order. The resolver, the writer,
    /// and the stats all consume this order.
    pub fn terminals(&self) -> impl Iterator<Item = (&ComponentInstance, &Terminal, Point)> {
        self.components.iter().flat_map(|component| {
            component
                .terminals
                .iter()
                .map(move |terminal| (component, terminal, component.terminal_position(terminal)))
        })
    }

    pub fn terminal_count(&self) -> usize {
        self.components.iter().map(|c| c.terminals.len()).sum()
    }

    /// Nearest absolute terminal position within `threshold` of a probe
    /// point, if any. Wire-drawing front ends use this to land endpoints
    /// exactly on terminal coordinates.
    pub fn closest_terminal(&self, probe: Point, threshold: f64) -> Option<Point> {
        let mut best: Option<(f64, Point)> = None;
        for (_, _, position) in self.terminals() {
            let d = geometry::distance(probe, position);
            if d < threshold && best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, position));
            }
        }
        best.map(|(_, p)| p)
    }
}
