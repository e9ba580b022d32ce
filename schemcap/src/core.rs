//! Top-level resolution API shared by the CLI and library consumers.
//! No canvas or front-end state dependencies.

use std::path::Path;

use crate::netlist::graph::ConnectionGraphBuilder;
use crate::netlist::resolver::{NetAssignment, NetResolver};
use crate::netlist::writer::NetlistWriter;
use crate::scene::Scene;

#[derive(Debug, thiserror::Error)]
pub enum SchemCapError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for SchemCapError {
    fn from(e: serde_json::Error) -> Self {
        SchemCapError::Parse(e.to_string())
    }
}

/// Outcome of one full resolution pass over a scene snapshot.
#[derive(Debug, Clone)]
pub struct NetlistExport {
    /// The serialized netlist document.
    pub netlist: String,
    /// Point-identity to net-name map, for display overlays.
    pub nets: NetAssignment,
    pub stats: NetlistStats,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct NetlistStats {
    pub component_count: usize,
    pub wire_count: usize,
    pub terminal_count: usize,
    pub net_count: usize,
    pub synthesized_net_count: usize,
    pub unconnected_terminal_count: usize,
}

/// Stateless facade over build, resolve, and serialize. Every call is a
/// full rebuild from the snapshot it is handed; nothing is cached between
/// calls, and nothing here mutates the scene.
pub struct SchemCapCore;

impl SchemCapCore {
    /// Resolve net names for every connected terminal point.
    pub fn resolve_nets(scene: &Scene) -> NetAssignment {
        let graph = ConnectionGraphBuilder::build(scene);
        NetResolver::resolve(scene, &graph)
    }

    /// Resolve and serialize in one pass.
    pub fn export_netlist(scene: &Scene) -> NetlistExport {
        let nets = Self::resolve_nets(scene);
        let netlist = NetlistWriter::write(scene, &nets);
        let unconnected = scene
            .terminals()
            .filter(|(_, _, position)| nets.name_at(*position).is_none())
            .count();
        let stats = NetlistStats {
            component_count: scene.components.len(),
            wire_count: scene.wires.len(),
            terminal_count: scene.terminal_count(),
            net_count: nets.net_count(),
            synthesized_net_count: nets.synthesized_count(),
            unconnected_terminal_count: unconnected,
        };
        NetlistExport {
            netlist,
            nets,
            stats,
        }
    }

    /// Load a scene snapshot from a JSON file and export its netlist.
    pub fn export_netlist_file(path: &Path) -> Result<NetlistExport, SchemCapError> {
        let scene = Scene::from_file(path)?;
        Ok(Self::export_netlist(&scene))
    }
}
