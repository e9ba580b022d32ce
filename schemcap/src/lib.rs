//! SchemCap - schematic capture connectivity engine
//!
//! Derives an electrical net list from geometrically placed component
//! terminals and drawn wire segments. "Connected" is spatial: points join a
//! net through shared wire endpoints, pins resting on wires, and terminal
//! proximity under a fixed tolerance, never through explicit references.
//!
//! # Quick Start
//!
//! ```
//! use schemcap::{Device, SceneBuilder, SchemCapCore};
//!
//! let mut builder = SceneBuilder::new();
//! builder.place(Device::Resistor, 300.0, 300.0);
//! builder.wire((270.0, 300.0), (270.0, 100.0));
//! let scene = builder.finish();
//!
//! let export = SchemCapCore::export_netlist(&scene);
//! println!("{}", export.netlist);
//! ```
//!
//! # What lives here
//!
//! - **Geometry kernel**: rigid transforms, grid snapping, segment tests
//! - **Scene model**: immutable-per-query component and wire snapshot
//! - **Connection graph**: wire, pin-on-wire, and proximity edges
//! - **Net resolver**: traversal plus deterministic naming arbitration
//! - **Netlist writer**: one record per component, placeholder-safe
//!
//! The interactive canvas, event handling, and visual-scene persistence
//! belong to front ends that produce the snapshot and consume the netlist.

pub mod core;
pub mod geometry;
pub mod netlist;
pub mod scene;

// Re-export main types
pub use crate::core::{NetlistExport, NetlistStats, SchemCapCore, SchemCapError};
pub use crate::geometry::{Point, Rotation};
pub use crate::netlist::graph::{ConnectionGraph, ConnectionGraphBuilder, ConnectionKind};
pub use crate::netlist::resolver::{NetAssignment, NetResolver};
pub use crate::netlist::writer::NetlistWriter;
pub use crate::scene::{
    ComponentInstance, ComponentKind, Device, Scene, SceneBuilder, Terminal, WireSegment,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Device, NetAssignment, NetlistExport, Scene, SceneBuilder, SchemCapCore, SchemCapError,
    };
}
