use std::collections::HashSet;

use thiserror::Error;

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A point in diagram (world) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub label: Option<String>,
	/// Animated edges are drawn with a flowing dashed stroke.
	pub animated: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

/// Structural defects in a diagram literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
	#[error("node id `{0}` is declared more than once")]
	DuplicateNode(String),
	#[error("edge id `{0}` is declared more than once")]
	DuplicateEdge(String),
	#[error("edge `{edge}` references unknown node `{endpoint}`")]
	DanglingEdge { edge: String, endpoint: String },
}

impl GraphData {
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn contains_node(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	/// Checks that node and edge ids are unique and that every edge endpoint
	/// names a declared node.
	pub fn validate(&self) -> Result<(), GraphError> {
		let mut node_ids = HashSet::with_capacity(self.nodes.len());
		for node in &self.nodes {
			if !node_ids.insert(node.id.as_str()) {
				return Err(GraphError::DuplicateNode(node.id.clone()));
			}
		}

		let mut edge_ids = HashSet::with_capacity(self.edges.len());
		for edge in &self.edges {
			if !edge_ids.insert(edge.id.as_str()) {
				return Err(GraphError::DuplicateEdge(edge.id.clone()));
			}
			for endpoint in [&edge.source, &edge.target] {
				if !node_ids.contains(endpoint.as_str()) {
					return Err(GraphError::DanglingEdge {
						edge: edge.id.clone(),
						endpoint: endpoint.clone(),
					});
				}
			}
		}
		Ok(())
	}
}
