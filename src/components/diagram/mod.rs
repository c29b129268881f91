mod component;
mod lifecycle;
mod render;
mod state;
mod types;

pub use component::DiagramCanvas;
pub use types::{GraphData, GraphEdge, GraphError, GraphNode, Position};
