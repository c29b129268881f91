use super::*;

fn sample() -> GraphData {
	let node = |id: &str, x: f64, y: f64| GraphNode {
		id: id.to_owned(),
		label: id.to_uppercase(),
		position: Position { x, y },
	};
	GraphData {
		nodes: vec![node("a", 0.0, 0.0), node("b", 0.0, 100.0), node("c", 200.0, 100.0)],
		edges: vec![GraphEdge {
			id: "ea-b".into(),
			source: "a".into(),
			target: "b".into(),
			label: None,
			animated: true,
		}],
	}
}

/// A state with an identity transform, so screen and graph coordinates match.
fn identity_state() -> DiagramState {
	let mut state = DiagramState::new(&sample(), 800.0, 600.0);
	state.transform = ViewTransform::default();
	state
}

// =============================================================
// Construction and accessors
// =============================================================

#[test]
fn new_copies_caller_positions() {
	let state = DiagramState::new(&sample(), 800.0, 600.0);
	let positions = state.node_positions();
	assert_eq!(positions[1], ("b".to_owned(), Position { x: 0.0, y: 100.0 }));
	assert_eq!(state.edges().len(), 1);
}

#[test]
fn new_drops_edges_to_undeclared_nodes() {
	let mut data = sample();
	data.edges.push(GraphEdge {
		id: "ea-q".into(),
		source: "a".into(),
		target: "q".into(),
		label: None,
		animated: false,
	});
	let state = DiagramState::new(&data, 800.0, 600.0);
	let ids: Vec<&str> = state.edges().iter().map(|e| e.id.as_str()).collect();
	assert_eq!(ids, vec!["ea-b"]);
}

#[test]
fn set_edges_drops_dangling_edges() {
	let mut state = identity_state();
	state.set_edges(vec![
		GraphEdge {
			id: "ok".into(),
			source: "b".into(),
			target: "c".into(),
			label: None,
			animated: false,
		},
		GraphEdge {
			id: "bad".into(),
			source: "b".into(),
			target: "q".into(),
			label: None,
			animated: false,
		},
	]);
	let ids: Vec<&str> = state.edges().iter().map(|e| e.id.as_str()).collect();
	assert_eq!(ids, vec!["ok"]);
}

// =============================================================
// Hit testing
// =============================================================

#[test]
fn node_at_position_uses_node_box() {
	let state = identity_state();
	assert_eq!(state.node_at_position(10.0, 10.0), Some(0));
	assert_eq!(state.node_at_position(NODE_WIDTH - 1.0, 100.0 + NODE_HEIGHT - 1.0), Some(1));
	assert_eq!(state.node_at_position(10.0, 60.0), None);
}

#[test]
fn node_at_position_respects_transform() {
	let mut state = identity_state();
	state.transform = ViewTransform {
		x: 100.0,
		y: 50.0,
		k: 2.0,
	};
	// graph (10, 10) lands on screen (120, 70)
	assert_eq!(state.node_at_position(120.0, 70.0), Some(0));
	assert_eq!(state.node_at_position(10.0, 10.0), None);
}

// =============================================================
// Drag and pan
// =============================================================

#[test]
fn dragging_a_node_moves_only_that_node() {
	let mut state = identity_state();
	state.pointer_down(10.0, 10.0, false);
	state.pointer_move(40.0, 25.0);
	assert_eq!(state.nodes[0].position, Position { x: 30.0, y: 15.0 });
	assert_eq!(state.nodes[1].position, Position { x: 0.0, y: 100.0 });
	assert_eq!(state.pointer_up(40.0, 25.0), None);
	assert!(!state.is_dragging());
}

#[test]
fn drag_distance_scales_with_zoom() {
	let mut state = identity_state();
	state.transform.k = 2.0;
	state.pointer_down(10.0, 10.0, false);
	state.pointer_move(30.0, 10.0);
	assert_eq!(state.nodes[0].position.x, 10.0);
}

#[test]
fn dragging_background_pans() {
	let mut state = identity_state();
	state.pointer_down(500.0, 500.0, false);
	assert!(state.is_dragging());
	state.pointer_move(520.0, 490.0);
	assert_eq!((state.transform.x, state.transform.y), (20.0, -10.0));
	state.pointer_leave();
	assert!(!state.is_dragging());
}

// =============================================================
// Connecting
// =============================================================

#[test]
fn connect_appends_new_edge() {
	let mut state = identity_state();
	let edge = state.connect("b", "c").cloned().unwrap();
	assert_eq!(edge.id, "eb-c");
	assert!(!edge.animated);
	assert_eq!(state.edges().len(), 2);
}

#[test]
fn connect_ignores_self_loops_duplicates_and_unknown_nodes() {
	let mut state = identity_state();
	assert!(state.connect("a", "a").is_none());
	assert!(state.connect("a", "b").is_none());
	assert!(state.connect("a", "nope").is_none());
	assert_eq!(state.edges().len(), 1);
}

#[test]
fn connect_allows_reverse_direction() {
	let mut state = identity_state();
	assert!(state.connect("b", "a").is_some());
	assert_eq!(state.edges().len(), 2);
}

#[test]
fn shift_drag_between_nodes_connects_them() {
	let mut state = identity_state();
	state.pointer_down(10.0, 110.0, true);
	state.pointer_move(210.0, 110.0);
	assert_eq!(state.connect.cursor, Position { x: 210.0, y: 110.0 });
	assert_eq!(state.nodes[1].position, Position { x: 0.0, y: 100.0 });
	let added = state.pointer_up(210.0, 110.0).unwrap();
	assert_eq!((added.source.as_str(), added.target.as_str()), ("b", "c"));
	assert!(state.connect.source_idx.is_none());
}

#[test]
fn connection_released_on_background_is_discarded() {
	let mut state = identity_state();
	state.pointer_down(10.0, 110.0, true);
	assert_eq!(state.pointer_up(700.0, 500.0), None);
	assert_eq!(state.edges().len(), 1);
}

#[test]
fn connections_never_touch_source_data() {
	let data = sample();
	let mut state = DiagramState::new(&data, 800.0, 600.0);
	state.transform = ViewTransform::default();
	state.connect("b", "c");
	state.pointer_down(10.0, 10.0, false);
	state.pointer_move(99.0, 99.0);
	state.pointer_up(99.0, 99.0);
	assert_ne!(state.node_positions()[0].1, Position { x: 0.0, y: 0.0 });
	assert_eq!(data, sample());
}

// =============================================================
// Zoom and fit
// =============================================================

#[test]
fn zoom_keeps_cursor_point_fixed() {
	let mut state = identity_state();
	let before = state.screen_to_graph(300.0, 200.0);
	state.zoom_at(300.0, 200.0, 2.0);
	let after = state.screen_to_graph(300.0, 200.0);
	assert!((before.0 - after.0).abs() < 1e-9);
	assert!((before.1 - after.1).abs() < 1e-9);
	assert_eq!(state.transform.k, 2.0);
}

#[test]
fn zoom_is_clamped() {
	let mut state = identity_state();
	for _ in 0..50 {
		state.zoom_in();
	}
	assert_eq!(state.transform.k, MAX_ZOOM);
	for _ in 0..100 {
		state.zoom_out();
	}
	assert_eq!(state.transform.k, MIN_ZOOM);
}

#[test]
fn fit_view_centers_nodes_without_upscaling() {
	let state = DiagramState::new(&sample(), 800.0, 600.0);
	assert_eq!(state.transform.k, 1.0);
	// bounds are (0, 0) .. (350, 140); center (175, 70) maps to viewport center
	assert_eq!(state.transform.x, 400.0 - 175.0);
	assert_eq!(state.transform.y, 300.0 - 70.0);
}

#[test]
fn fit_view_scales_down_small_viewports() {
	let state = DiagramState::new(&sample(), 200.0, 600.0);
	assert!(state.transform.k < 1.0);
	let (left, _) = state.screen_to_graph(0.0, 0.0);
	assert!(left < 0.0);
}

#[test]
fn fit_view_on_empty_diagram_centers_origin() {
	let state = DiagramState::new(&GraphData::default(), 400.0, 300.0);
	assert_eq!(
		state.transform,
		ViewTransform {
			x: 200.0,
			y: 150.0,
			k: 1.0,
		}
	);
}

#[test]
fn edge_endpoints_anchor_bottom_to_top() {
	let state = identity_state();
	let (from, to) = state.edge_endpoints(&state.edges()[0]).unwrap();
	assert_eq!(from, Position { x: NODE_WIDTH / 2.0, y: NODE_HEIGHT });
	assert_eq!(to, Position { x: NODE_WIDTH / 2.0, y: 100.0 });
}
