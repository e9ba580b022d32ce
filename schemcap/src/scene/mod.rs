pub mod catalog;
pub mod schema;

// Re-export for convenience
pub use catalog::{Device, SceneBuilder};
pub use schema::{ComponentInstance, ComponentKind, Scene, Terminal, WireSegment};
