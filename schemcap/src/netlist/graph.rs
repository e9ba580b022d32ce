//! Connection-graph construction.
//!
//! Vertices are distinct point identities (string keys over exact
//! coordinates); edges record why two points are electrically joined. The
//! graph is rebuilt from scratch on every resolution pass and edges are
//! never removed within a pass.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

use crate::geometry::{self, Point};
use crate::scene::Scene;

/// Pin-to-wire hit tolerance, in drawing units.
pub const PIN_TO_WIRE_TOLERANCE: f64 = 5.0;
/// Terminal-to-terminal proximity tolerance. Matches the editor's snap
/// radius, so anything snapped together resolves as shorted.
pub const CONNECTION_TOLERANCE: f64 = 15.0;

/// Why an edge exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// The two endpoints of a drawn wire.
    Wire,
    /// An external-reference pin resting on a wire segment, collapsed onto
    /// the wire's start endpoint rather than its true projection.
    PinToWire,
    /// Two terminals within the connection tolerance of each other.
    Proximity,
}

/// Undirected graph over point identities.
#[derive(Debug)]
pub struct ConnectionGraph {
    graph: UnGraph<String, ConnectionKind>,
    indices: HashMap<String, NodeIndex>,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            indices: HashMap::new(),
        }
    }

    fn intern(&mut self, p: Point) -> NodeIndex {
        let key = p.key();
        if let Some(&idx) = self.indices.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(key.clone());
        self.indices.insert(key, idx);
        idx
    }

    fn link(&mut self, p: Point, q: Point, kind: ConnectionKind) {
        let a = self.intern(p);
        let b = self.intern(q);
        self.graph.add_edge(a, b, kind);
    }

    /// Whether a point identity occurs anywhere in the graph.
    pub fn contains(&self, p: Point) -> bool {
        self.indices.contains_key(&p.key())
    }

    /// All point keys reachable from `p`, including `p` itself. Empty when
    /// the point is not a vertex.
    pub fn component_of(&self, p: Point) -> Vec<String> {
        let Some(&start) = self.indices.get(&p.key()) else {
            return Vec::new();
        };
        let mut keys = Vec::new();
        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(idx) = bfs.next(&self.graph) {
            keys.push(self.graph[idx].clone());
        }
        keys
    }

    pub fn point_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for ConnectionGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the connection graph from a scene snapshot.
pub struct ConnectionGraphBuilder;

impl ConnectionGraphBuilder {
    /// Assemble edges from the three connection sources, in order: wire
    /// endpoints, external-reference pins resting on wires, and pairwise
    /// terminal proximity. Malformed or overlapping geometry never fails
    /// here; the worst case is an unintended merge.
    pub fn build(scene: &Scene) -> ConnectionGraph {
        let mut graph = ConnectionGraph::new();

        // 1. Wire edges, on the unquantized absolute endpoints.
        for wire in &scene.wires {
            graph.link(wire.start, wire.end, ConnectionKind::Wire);
        }

        // 2. Pins bite onto any wire they rest on. The edge lands on the
        // wire's start endpoint, not the projection onto the segment.
        for (component, _, position) in scene.terminals() {
            if !component.kind.is_pin() {
                continue;
            }
            for wire in &scene.wires {
                if geometry::point_near_segment(position, wire.start, wire.end, PIN_TO_WIRE_TOLERANCE)
                {
                    graph.link(position, wire.start, ConnectionKind::PinToWire);
                }
            }
        }

        // 3. All-pairs terminal proximity. Quadratic in terminal count,
        // which holds up for hand-drawn schematics (tens to low hundreds of
        // terminals) and not beyond.
        let positions: Vec<Point> = scene.terminals().map(|(_, _, p)| p).collect();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if geometry::distance(positions[i], positions[j]) < CONNECTION_TOLERANCE {
                    graph.link(positions[i], positions[j], ConnectionKind::Proximity);
                }
            }
        }

        tracing::debug!(
            points = graph.point_count(),
            edges = graph.edge_count(),
            "connection graph built"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{ComponentInstance, ComponentKind, Terminal, WireSegment};

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

    fn pin(name: &str, x: f64, y: f64) -> ComponentInstance {
        ComponentInstance::new(
            name,
            ComponentKind::Pin,
            Point::new(x, y),
            vec![Terminal::new("pin", 0.0, 0.0)],
        )
    }

    #[test]
    fn test_wire_endpoints_share_a_component() {
        let scene = Scene {
            components: vec![],
            wires: vec![WireSegment::new((0.0, 0.0), (200.0, 0.0))],
        };
        let graph = ConnectionGraphBuilder::build(&scene);

        assert_eq!(graph.point_count(), 2);
        let group = graph.component_of(Point::new(0.0, 0.0));
        assert!(group.contains(&"200,0".to_string()));
    }

    #[test]
    fn test_pin_collapses_onto_wire_start() {
        // Pin resting mid-segment, 3 units off the line: the hit test, not
        // key equality, makes the edge.
        let scene = Scene {
            components: vec![pin("VIN", 100.0, 3.0)],
            wires: vec![WireSegment::new((0.0, 0.0), (200.0, 0.0))],
        };
        let graph = ConnectionGraphBuilder::build(&scene);

        let group = graph.component_of(Point::new(100.0, 3.0));
        assert!(group.contains(&"0,0".to_string()));
        assert!(group.contains(&"200,0".to_string()));
    }

    #[test]
    fn test_non_pin_terminals_do_not_bite_wires() {
        // R1 n1 lands at (90, 0), squarely on the segment, but only pins
        // get the on-wire test.
        let scene = Scene {
            components: vec![resistor("R1", 120.0, 0.0)],
            wires: vec![WireSegment::new((0.0, 0.0), (200.0, 0.0))],
        };
        let graph = ConnectionGraphBuilder::build(&scene);

        assert!(!graph.contains(Point::new(90.0, 0.0)));
        assert!(!graph.contains(Point::new(150.0, 0.0)));
    }

    #[test]
    fn test_proximity_links_close_terminals() {
        // R1 n2 at (60, 0); R2 n1 at (70, 0): 10 apart, under tolerance.
        let scene = Scene {
            components: vec![resistor("R1", 30.0, 0.0), resistor("R2", 100.0, 0.0)],
            wires: vec![],
        };
        let graph = ConnectionGraphBuilder::build(&scene);

        let group = graph.component_of(Point::new(60.0, 0.0));
        assert!(group.contains(&"70,0".to_string()));
    }

    #[test]
    fn test_distant_terminals_stay_isolated() {
        let scene = Scene {
            components: vec![resistor("R1", 100.0, 100.0)],
            wires: vec![],
        };
        let graph = ConnectionGraphBuilder::build(&scene);

        // The two resistor terminals are 60 apart: no edges at all.
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.component_of(Point::new(70.0, 100.0)).is_empty());
    }

    #[test]
    fn test_degenerate_wire_still_anchors_a_point() {
        let scene = Scene {
            components: vec![],
            wires: vec![WireSegment::new((40.0, 40.0), (40.0, 40.0))],
        };
        let graph = ConnectionGraphBuilder::build(&scene);

        assert_eq!(graph.point_count(), 1);
        assert_eq!(
            graph.component_of(Point::new(40.0, 40.0)),
            vec!["40,40".to_string()]
        );
    }
}
