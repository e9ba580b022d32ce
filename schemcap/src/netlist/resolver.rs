//! Net resolution: partition the connection graph into nets and name them.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::geometry::Point;
use crate::scene::Scene;

use super::graph::ConnectionGraph;

/// Resolved mapping from point identity to net name.
///
/// Only points that occur in the connection graph are present; a terminal
/// with no entry here is unconnected and gets a placeholder name at
/// serialization time. Keys are kept sorted so display output is
/// reproducible run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetAssignment {
    names: BTreeMap<String, String>,
    synthesized: usize,
}

impl NetAssignment {
    /// Net name at a point, if the point belongs to any net.
    pub fn name_at(&self, p: Point) -> Option<&str> {
        self.names.get(&p.key()).map(String::as_str)
    }

    /// Net name for a raw point key.
    pub fn name_for_key(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Point-key / net-name pairs, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of distinct nets.
    pub fn net_count(&self) -> usize {
        self.names.values().collect::<HashSet<_>>().len()
    }

    /// How many nets received a synthesized `N_<n>` name.
    pub fn synthesized_count(&self) -> usize {
        self.synthesized
    }
}

/// Walks the connection graph and names each connected component.
pub struct NetResolver;

impl NetResolver {
    /// Assign a net name to every graph-connected terminal point.
    ///
    /// Terminals are visited in scene enumeration order; each unvisited
    /// point the graph knows seeds a traversal of its full connected
    /// component. Naming priority inside a component: the first
    /// external-reference pin in enumeration order, else the first
    /// non-blank user override in enumeration order, else `N_<counter>`
    /// with the counter starting at 1 and advancing only when consumed.
    /// Identical snapshots therefore resolve to identical assignments.
    pub fn resolve(scene: &Scene, graph: &ConnectionGraph) -> NetAssignment {
        let terminals: Vec<_> = scene.terminals().collect();

        let mut visited: HashSet<String> = HashSet::new();
        let mut names: BTreeMap<String, String> = BTreeMap::new();
        let mut synthesized = 0usize;

        for (_, _, position) in &terminals {
            let key = position.key();
            if visited.contains(&key) {
                continue;
            }
            let group = graph.component_of(*position);
            if group.is_empty() {
                // Not a graph vertex: the terminal is unconnected and the
                // writer will synthesize its placeholder.
                continue;
            }
            visited.extend(group.iter().cloned());

            let members: HashSet<&str> = group.iter().map(String::as_str).collect();
            let mut pin_name: Option<&str> = None;
            let mut override_name: Option<&str> = None;
            for (component, terminal, terminal_position) in &terminals {
                if !members.contains(terminal_position.key().as_str()) {
                    continue;
                }
                if component.kind.is_pin() {
                    if pin_name.is_none() {
                        pin_name = Some(component.name.as_str());
                    }
                } else if override_name.is_none() {
                    if let Some(net) = terminal.net_override() {
                        override_name = Some(net);
                    }
                }
            }

            let name = match (pin_name, override_name) {
                (Some(pin), _) => pin.to_string(),
                (None, Some(user)) => user.to_string(),
                (None, None) => {
                    synthesized += 1;
                    format!("N_{}", synthesized)
                }
            };

            for member in group {
                names.insert(member, name.clone());
            }
        }

        tracing::debug!(
            points = names.len(),
            synthesized,
            "nets resolved"
        );
        NetAssignment { names, synthesized }
    }
}
