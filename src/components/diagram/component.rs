use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::lifecycle::{FrameCallbacks, Generation};
use super::render;
use super::state::DiagramState;
use super::types::{GraphData, GraphEdge, Position};
use crate::state::theme::try_use_theme;

type SharedState = Rc<RefCell<Option<DiagramState>>>;
type Callbacks = Rc<FrameCallbacks<Closure<dyn FnMut()>>>;

/// Pointer position relative to the canvas.
fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn release(callbacks: &Callbacks, window: &Window) {
	callbacks.release(
		|cb| {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		},
		|handle| {
			let _ = window.cancel_animation_frame(handle);
		},
	);
	log::debug!("Diagram canvas released");
}

fn request_frame(callbacks: &Callbacks, window: &Window) {
	let handle = callbacks
		.with_animate(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
		.flatten();
	if let Some(handle) = handle {
		callbacks.frame_requested(handle);
	}
}

/// Interactive flow diagram. Nodes can be dragged, the view panned and
/// zoomed, and shift-dragging from one node to another draws a new edge.
/// None of these changes are written back to `data`; `on_edges_change` and
/// `on_layout_change` report them instead.
#[component]
pub fn DiagramCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 500.0)] height: f64,
	/// Full edge set after a manual connection.
	#[prop(optional, into)]
	on_edges_change: Option<Callback<Vec<GraphEdge>>>,
	/// Node positions after a drag ends.
	#[prop(optional, into)]
	on_layout_change: Option<Callback<Vec<(String, Position)>>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let generation = Generation::default();
	let grabbing = RwSignal::new(false);
	let theme = try_use_theme();

	let (state_init, generation_init) = (state.clone(), generation.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		// Earlier runs see a stale generation and release their own callbacks.
		let my_generation = generation_init.begin();
		let callbacks: Callbacks = Rc::new(FrameCallbacks::default());

		let width = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(800.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::error!("Diagram canvas has no 2d context");
			return;
		};
		*state_init.borrow_mut() = Some(DiagramState::new(&data.get(), width, height));

		let (state_resize, canvas_resize, generation_resize, callbacks_resize) = (
			state_init.clone(),
			canvas.clone(),
			generation_init.clone(),
			callbacks.clone(),
		);
		callbacks.set_resize(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if !generation_resize.is_current(my_generation) {
				release(&callbacks_resize, &win);
				return;
			}
			let Some(nw) = canvas_resize
				.parent_element()
				.map(|p| p.client_width() as f64)
				.filter(|w| *w > 0.0)
			else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, height);
			}
		}));
		callbacks.with_resize(|cb| {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		});

		let (state_anim, generation_anim, callbacks_anim) =
			(state_init.clone(), generation_init.clone(), callbacks.clone());
		callbacks.set_animate(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			if !generation_anim.is_current(my_generation) {
				release(&callbacks_anim, &win);
				return;
			}
			let dark = theme.is_some_and(|t| t.mode_untracked().is_dark());
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx, dark);
			}
			request_frame(&callbacks_anim, &win);
		}));
		request_frame(&callbacks, &window);
	});

	on_cleanup(move || generation.invalidate());

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y, ev.shift_key());
			grabbing.set(s.is_dragging());
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		let mut edges = None;
		let mut layout = None;
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			let dragged_node = s.drag.node_idx.is_some();
			if s.pointer_up(x, y).is_some() {
				edges = Some(s.edges().to_vec());
			}
			if dragged_node {
				layout = Some(s.node_positions());
			}
		}
		grabbing.set(false);
		// callbacks run after the state borrow ends
		if let (Some(cb), Some(edges)) = (on_edges_change, edges) {
			cb.run(edges);
		}
		if let (Some(cb), Some(layout)) = (on_layout_change, layout) {
			cb.run(layout);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
		grabbing.set(false);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			s.zoom_at(x, y, factor);
		}
	};

	let control = move |action: fn(&mut DiagramState)| {
		let state = state.clone();
		move |_: MouseEvent| {
			if let Some(ref mut s) = *state.borrow_mut() {
				action(s);
			}
		}
	};

	view! {
		<div class="diagram" style=format!("height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class=move || {
					if grabbing.get() { "diagram__canvas diagram__canvas--grabbing" } else { "diagram__canvas" }
				}
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
			/>
			<div class="diagram__controls">
				<button title="Acercar" on:click=control(DiagramState::zoom_in)>"+"</button>
				<button title="Alejar" on:click=control(DiagramState::zoom_out)>"−"</button>
				<button title="Ajustar vista" on:click=control(DiagramState::fit_view)>"⤢"</button>
			</div>
		</div>
	}
}
