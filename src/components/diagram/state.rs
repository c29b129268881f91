use log::debug;

use super::types::{GraphData, GraphEdge, GraphNode, Position};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub const NODE_WIDTH: f64 = 150.0;
pub const NODE_HEIGHT: f64 = 40.0;
pub const MIN_ZOOM: f64 = 0.25;
pub const MAX_ZOOM: f64 = 4.0;
const FIT_PADDING: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start: Position,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// An in-progress manual connection, from a node to the pointer.
#[derive(Clone, Debug, Default)]
pub struct ConnectState {
	pub source_idx: Option<usize>,
	/// Pointer position in graph coordinates.
	pub cursor: Position,
}

/// Interactive copy of a diagram. Positions and edges start from the
/// caller's literals and are never written back.
pub struct DiagramState {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub connect: ConnectState,
	pub hover: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl DiagramState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut state = Self {
			nodes: data.nodes.clone(),
			edges: Vec::new(),
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			connect: ConnectState::default(),
			hover: None,
			width,
			height,
			flow_time: 0.0,
		};
		state.set_edges(data.edges.clone());
		state.fit_view();
		state
	}

	pub fn node_positions(&self) -> Vec<(String, Position)> {
		self.nodes
			.iter()
			.map(|n| (n.id.clone(), n.position))
			.collect()
	}

	pub fn edges(&self) -> &[GraphEdge] {
		&self.edges
	}

	/// Replaces the edge set, dropping edges whose endpoints are not nodes
	/// of this diagram.
	pub fn set_edges(&mut self, edges: Vec<GraphEdge>) {
		self.edges = edges
			.into_iter()
			.filter(|e| self.index_of(&e.source).is_some() && self.index_of(&e.target).is_some())
			.collect();
	}

	fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point. Later nodes are drawn on top.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes.iter().rposition(|n| {
			gx >= n.position.x
				&& gx <= n.position.x + NODE_WIDTH
				&& gy >= n.position.y
				&& gy <= n.position.y + NODE_HEIGHT
		})
	}

	/// Appends an edge from `source` to `target`. Self-loops, unknown ids and
	/// pairs that are already connected are ignored.
	pub fn connect(&mut self, source: &str, target: &str) -> Option<&GraphEdge> {
		if source == target || self.index_of(source).is_none() || self.index_of(target).is_none() {
			return None;
		}
		let id = format!("e{source}-{target}");
		if self
			.edges
			.iter()
			.any(|e| (e.source == source && e.target == target) || e.id == id)
		{
			return None;
		}
		debug!("Diagram edge connected: {id}");
		self.edges.push(GraphEdge {
			id,
			source: source.to_owned(),
			target: target.to_owned(),
			label: None,
			animated: false,
		});
		self.edges.last()
	}

	/// Pointer pressed at a screen point. On a node this starts a drag, or a
	/// connection when `connecting` is set; elsewhere it starts a pan.
	pub fn pointer_down(&mut self, sx: f64, sy: f64, connecting: bool) {
		match self.node_at_position(sx, sy) {
			Some(idx) if connecting => {
				let (gx, gy) = self.screen_to_graph(sx, sy);
				self.connect.source_idx = Some(idx);
				self.connect.cursor = Position { x: gx, y: gy };
			}
			Some(idx) => {
				self.drag.node_idx = Some(idx);
				self.drag.start_x = sx;
				self.drag.start_y = sy;
				self.drag.node_start = self.nodes[idx].position;
			}
			None => {
				self.pan.active = true;
				self.pan.start_x = sx;
				self.pan.start_y = sy;
				self.pan.transform_start_x = self.transform.x;
				self.pan.transform_start_y = self.transform.y;
			}
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if self.drag.node_idx.is_none() && self.connect.source_idx.is_none() {
			self.hover = self.node_at_position(sx, sy);
		}

		if let Some(idx) = self.drag.node_idx {
			let (dx, dy) = (
				(sx - self.drag.start_x) / self.transform.k,
				(sy - self.drag.start_y) / self.transform.k,
			);
			self.nodes[idx].position = Position {
				x: self.drag.node_start.x + dx,
				y: self.drag.node_start.y + dy,
			};
		} else if self.connect.source_idx.is_some() {
			let (gx, gy) = self.screen_to_graph(sx, sy);
			self.connect.cursor = Position { x: gx, y: gy };
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	/// Pointer released. Finishes a pending connection when released over a
	/// different node and returns the edge that was added.
	pub fn pointer_up(&mut self, sx: f64, sy: f64) -> Option<GraphEdge> {
		let added = match (self.connect.source_idx, self.node_at_position(sx, sy)) {
			(Some(src), Some(tgt)) => {
				let (source, target) = (self.nodes[src].id.clone(), self.nodes[tgt].id.clone());
				self.connect(&source, &target).cloned()
			}
			_ => None,
		};
		self.cancel_pointer();
		added
	}

	pub fn cancel_pointer(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.connect.source_idx = None;
	}

	pub fn pointer_leave(&mut self) {
		self.cancel_pointer();
		self.hover = None;
	}

	/// Zooms by `factor` keeping the screen point under the cursor fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn zoom_in(&mut self) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, 1.2);
	}

	pub fn zoom_out(&mut self) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, 1.0 / 1.2);
	}

	/// Centers every node in the viewport, scaling down (never up past 1:1)
	/// when they do not fit.
	pub fn fit_view(&mut self) {
		let Some((min_x, min_y, max_x, max_y)) = self.bounds() else {
			self.transform = ViewTransform {
				x: self.width / 2.0,
				y: self.height / 2.0,
				k: 1.0,
			};
			return;
		};
		let (bw, bh) = (max_x - min_x, max_y - min_y);
		let pad = 1.0 + 2.0 * FIT_PADDING;
		let k = (self.width / (bw * pad))
			.min(self.height / (bh * pad))
			.clamp(MIN_ZOOM, 1.0);
		self.transform = ViewTransform {
			x: self.width / 2.0 - (min_x + bw / 2.0) * k,
			y: self.height / 2.0 - (min_y + bh / 2.0) * k,
			k,
		};
	}

	fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
		self.nodes.iter().fold(None, |acc, n| {
			let (x0, y0) = (n.position.x, n.position.y);
			let (x1, y1) = (x0 + NODE_WIDTH, y0 + NODE_HEIGHT);
			Some(match acc {
				None => (x0, y0, x1, y1),
				Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
			})
		})
	}

	/// Anchor points of an edge: bottom center of the source, top center of
	/// the target.
	pub fn edge_endpoints(&self, edge: &GraphEdge) -> Option<(Position, Position)> {
		let src = &self.nodes[self.index_of(&edge.source)?];
		let tgt = &self.nodes[self.index_of(&edge.target)?];
		Some((
			Position {
				x: src.position.x + NODE_WIDTH / 2.0,
				y: src.position.y + NODE_HEIGHT,
			},
			Position {
				x: tgt.position.x + NODE_WIDTH / 2.0,
				y: tgt.position.y,
			},
		))
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.node_idx.is_some() || self.pan.active
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
