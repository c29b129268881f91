//! Ownership of the browser callbacks behind one mount of the canvas.
//!
//! Cleanup hooks must be `Send`, so they only invalidate the mount's
//! generation. The callbacks notice on their next call and release
//! themselves through [`FrameCallbacks::release`], which unregisters the
//! resize listener, cancels the pending frame and drops both closures.

use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Counter shared by every mount of one component. Only the latest
/// generation is live.
#[derive(Clone, Debug, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
	/// Starts a new mount, retiring every earlier one.
	pub fn begin(&self) -> u64 {
		self.0.fetch_add(1, Ordering::SeqCst) + 1
	}

	/// Retires the current mount without starting another.
	pub fn invalidate(&self) {
		self.0.fetch_add(1, Ordering::SeqCst);
	}

	pub fn is_current(&self, generation: u64) -> bool {
		self.0.load(Ordering::SeqCst) == generation
	}
}

/// Animation and resize callbacks of a single mount, plus the id of the
/// frame request still pending.
#[derive(Debug)]
pub struct FrameCallbacks<C> {
	animate: RefCell<Option<C>>,
	resize: RefCell<Option<C>>,
	frame: Cell<Option<i32>>,
}

impl<C> Default for FrameCallbacks<C> {
	fn default() -> Self {
		Self {
			animate: RefCell::new(None),
			resize: RefCell::new(None),
			frame: Cell::new(None),
		}
	}
}

impl<C> FrameCallbacks<C> {
	pub fn set_animate(&self, callback: C) {
		*self.animate.borrow_mut() = Some(callback);
	}

	pub fn set_resize(&self, callback: C) {
		*self.resize.borrow_mut() = Some(callback);
	}

	pub fn with_animate<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
		self.animate.borrow().as_ref().map(f)
	}

	pub fn with_resize<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
		self.resize.borrow().as_ref().map(f)
	}

	/// Records the id of the frame just requested.
	pub fn frame_requested(&self, handle: i32) {
		self.frame.set(Some(handle));
	}

	pub fn is_released(&self) -> bool {
		self.animate.borrow().is_none() && self.resize.borrow().is_none()
	}

	/// Unregisters and drops everything this mount still holds. Safe to call
	/// more than once; later calls do nothing.
	pub fn release(&self, unregister_resize: impl FnOnce(&C), cancel_frame: impl FnOnce(i32)) {
		if let Some(handle) = self.frame.take() {
			cancel_frame(handle);
		}
		let resize = self.resize.borrow_mut().take();
		if let Some(ref callback) = resize {
			unregister_resize(callback);
		}
		let animate = self.animate.borrow_mut().take();
		drop((resize, animate));
	}
}
