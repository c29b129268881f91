use super::*;

fn node(id: &str) -> GraphNode {
	GraphNode {
		id: id.to_owned(),
		label: format!("Node {id}"),
		position: Position::default(),
	}
}

fn edge(id: &str, source: &str, target: &str) -> GraphEdge {
	GraphEdge {
		id: id.to_owned(),
		source: source.to_owned(),
		target: target.to_owned(),
		label: None,
		animated: false,
	}
}

#[test]
fn validate_accepts_well_formed_graph() {
	let data = GraphData {
		nodes: vec![node("1"), node("2"), node("3")],
		edges: vec![edge("e1-2", "1", "2"), edge("e2-3", "2", "3")],
	};
	assert_eq!(data.validate(), Ok(()));
}

#[test]
fn validate_accepts_empty_graph() {
	assert_eq!(GraphData::default().validate(), Ok(()));
}

#[test]
fn validate_rejects_dangling_target() {
	let data = GraphData {
		nodes: vec![node("1"), node("2")],
		edges: vec![edge("e1-9", "1", "9")],
	};
	assert_eq!(
		data.validate(),
		Err(GraphError::DanglingEdge {
			edge: "e1-9".into(),
			endpoint: "9".into(),
		})
	);
}

#[test]
fn validate_rejects_dangling_source() {
	let data = GraphData {
		nodes: vec![node("1")],
		edges: vec![edge("e0-1", "0", "1")],
	};
	assert!(matches!(
		data.validate(),
		Err(GraphError::DanglingEdge { endpoint, .. }) if endpoint == "0"
	));
}

#[test]
fn validate_rejects_duplicate_node_ids() {
	let data = GraphData {
		nodes: vec![node("1"), node("1")],
		edges: vec![],
	};
	assert_eq!(data.validate(), Err(GraphError::DuplicateNode("1".into())));
}

#[test]
fn validate_rejects_duplicate_edge_ids() {
	let data = GraphData {
		nodes: vec![node("1"), node("2")],
		edges: vec![edge("e", "1", "2"), edge("e", "2", "1")],
	};
	assert_eq!(data.validate(), Err(GraphError::DuplicateEdge("e".into())));
}

#[test]
fn node_lookup_by_id() {
	let data = GraphData {
		nodes: vec![node("a"), node("b")],
		edges: vec![],
	};
	assert_eq!(data.node("b").map(|n| n.label.as_str()), Some("Node b"));
	assert!(data.contains_node("a"));
	assert!(!data.contains_node("c"));
}
