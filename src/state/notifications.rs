//! App-owned, non-blocking notifications.
//!
//! Messages queue up in the corner of the layout until the user dismisses
//! them. Showing or dismissing a toast changes nothing else in the app.

use leptos::prelude::*;

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

/// Visual weight of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// Neutral information.
	Info,
	/// An action finished.
	Success,
	/// The user needs to fix something.
	Warning,
}

impl ToastKind {
	/// CSS modifier class.
	pub fn class(self) -> &'static str {
		match self {
			Self::Info => "toast--info",
			Self::Success => "toast--success",
			Self::Warning => "toast--warning",
		}
	}
}

/// A queued message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
	/// Unique within the session.
	pub id: u64,
	/// Visual weight.
	pub kind: ToastKind,
	/// Text shown to the user.
	pub message: String,
}

/// Ordered toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
	next_id: u64,
	toasts: Vec<Toast>,
}

impl ToastQueue {
	/// Appends a toast and returns its id.
	pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
		self.next_id += 1;
		let id = self.next_id;
		self.toasts.push(Toast {
			id,
			kind,
			message: message.into(),
		});
		if self.toasts.len() > MAX_TOASTS {
			let overflow = self.toasts.len() - MAX_TOASTS;
			self.toasts.drain(..overflow);
		}
		id
	}

	/// Removes a toast; returns `false` if it was already gone.
	pub fn dismiss(&mut self, id: u64) -> bool {
		let before = self.toasts.len();
		self.toasts.retain(|t| t.id != id);
		self.toasts.len() != before
	}

	/// Visible toasts, oldest first.
	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}
}

/// Reactive handle to the toast queue, provided by the app root.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
	queue: RwSignal<ToastQueue>,
}

impl Notifier {
	/// Creates the queue and provides it to descendants.
	pub fn provide() -> Self {
		let notifier = Self {
			queue: RwSignal::new(ToastQueue::default()),
		};
		provide_context(notifier);
		notifier
	}

	/// Shows a message.
	pub fn notify(&self, kind: ToastKind, message: impl Into<String>) -> u64 {
		let message = message.into();
		let mut id = 0;
		self.queue.update(|q| id = q.push(kind, message));
		id
	}

	/// Hides a message.
	pub fn dismiss(&self, id: u64) {
		self.queue.update(|q| {
			q.dismiss(id);
		});
	}

	/// Visible toasts, tracked.
	pub fn toasts(&self) -> Vec<Toast> {
		self.queue.with(|q| q.toasts().to_vec())
	}
}
