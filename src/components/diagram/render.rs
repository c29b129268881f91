use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{DiagramState, NODE_HEIGHT, NODE_WIDTH};
use super::types::Position;

const DOT_GAP: f64 = 12.0;
const CORNER_RADIUS: f64 = 6.0;

struct Palette {
	background: &'static str,
	dots: &'static str,
	node_fill: &'static str,
	node_stroke: &'static str,
	node_hover: &'static str,
	text: &'static str,
	edge: &'static str,
	label_bg: &'static str,
}

const LIGHT: Palette = Palette {
	background: "#f9fafb",
	dots: "#d1d5db",
	node_fill: "#ffffff",
	node_stroke: "#1a192b",
	node_hover: "#2563eb",
	text: "#111827",
	edge: "#9ca3af",
	label_bg: "#ffffff",
};

const DARK: Palette = Palette {
	background: "#1a1a2e",
	dots: "#3b3b5c",
	node_fill: "#24243e",
	node_stroke: "#8b8bb5",
	node_hover: "#64b4ff",
	text: "#f3f4f6",
	edge: "rgba(100, 180, 255, 0.7)",
	label_bg: "#1a1a2e",
};

pub fn render(state: &DiagramState, ctx: &CanvasRenderingContext2d, dark: bool) {
	let palette = if dark { &DARK } else { &LIGHT };
	ctx.set_fill_style_str(palette.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_dots(state, ctx, palette);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx, palette);
	draw_pending_connection(state, ctx, palette);
	draw_nodes(state, ctx, palette);
	ctx.restore();
}

/// Screen-space dot grid that follows pan and zoom.
fn draw_dots(state: &DiagramState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let gap = DOT_GAP * state.transform.k;
	if gap < 4.0 {
		return;
	}
	let (ox, oy) = (
		state.transform.x.rem_euclid(gap),
		state.transform.y.rem_euclid(gap),
	);
	ctx.set_fill_style_str(palette.dots);
	let mut x = ox;
	while x < state.width {
		let mut y = oy;
		while y < state.height {
			ctx.fill_rect(x, y, 1.0, 1.0);
			y += gap;
		}
		x += gap;
	}
}

fn draw_edges(state: &DiagramState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k.max(0.5), 5.0, 5.0, 8.0);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);

	for edge in state.edges() {
		let Some((from, to)) = state.edge_endpoints(edge) else {
			continue;
		};
		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.set_stroke_style_str(palette.edge);
		ctx.set_line_width(line_width);
		if edge.animated {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x - ux * arrow_size, to.y - uy * arrow_size);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		ctx.set_fill_style_str(palette.edge);
		let (back_x, back_y) = (to.x - ux * arrow_size, to.y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(to.x, to.y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if let Some(label) = &edge.label {
			draw_edge_label(
				ctx,
				palette,
				label,
				Position {
					x: (from.x + to.x) / 2.0,
					y: (from.y + to.y) / 2.0,
				},
			);
		}
	}
}

fn draw_edge_label(ctx: &CanvasRenderingContext2d, palette: &Palette, label: &str, at: Position) {
	ctx.set_font("10px sans-serif");
	let width = ctx
		.measure_text(label)
		.map(|m| m.width())
		.unwrap_or(label.len() as f64 * 6.0);
	ctx.set_fill_style_str(palette.label_bg);
	ctx.fill_rect(at.x - width / 2.0 - 3.0, at.y - 8.0, width + 6.0, 14.0);
	ctx.set_fill_style_str(palette.text);
	ctx.set_text_align("center");
	let _ = ctx.fill_text(label, at.x, at.y + 3.0);
	ctx.set_text_align("start");
}

fn draw_pending_connection(state: &DiagramState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let Some(idx) = state.connect.source_idx else {
		return;
	};
	let source = &state.nodes[idx];
	let (x, y) = (
		source.position.x + NODE_WIDTH / 2.0,
		source.position.y + NODE_HEIGHT,
	);
	ctx.set_stroke_style_str(palette.node_hover);
	ctx.set_line_width(1.5 / state.transform.k.max(0.5));
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(4.0),
	));
	ctx.begin_path();
	ctx.move_to(x, y);
	ctx.line_to(state.connect.cursor.x, state.connect.cursor.y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &DiagramState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	for (idx, node) in state.nodes.iter().enumerate() {
		let (x, y) = (node.position.x, node.position.y);
		let highlighted = state.hover == Some(idx) || state.connect.source_idx == Some(idx);

		rounded_rect(ctx, x, y, NODE_WIDTH, NODE_HEIGHT, CORNER_RADIUS);
		ctx.set_fill_style_str(palette.node_fill);
		ctx.fill();
		ctx.set_stroke_style_str(if highlighted {
			palette.node_hover
		} else {
			palette.node_stroke
		});
		ctx.set_line_width(if highlighted { 2.0 } else { 1.0 });
		ctx.stroke();

		ctx.set_fill_style_str(palette.text);
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text_with_max_width(
			&node.label,
			x + NODE_WIDTH / 2.0,
			y + NODE_HEIGHT / 2.0,
			NODE_WIDTH - 8.0,
		);
		ctx.set_text_align("start");
		ctx.set_text_baseline("alphabetic");

		if highlighted {
			// source handle
			ctx.begin_path();
			let _ = ctx.arc(x + NODE_WIDTH / 2.0, y + NODE_HEIGHT, 3.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(palette.node_hover);
			ctx.fill();
		}
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
