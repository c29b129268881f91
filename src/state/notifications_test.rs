use super::*;

#[test]
fn push_assigns_increasing_ids() {
	let mut queue = ToastQueue::default();
	let a = queue.push(ToastKind::Info, "uno");
	let b = queue.push(ToastKind::Warning, "dos");
	assert!(b > a);
	let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
	assert_eq!(messages, vec!["uno", "dos"]);
}

#[test]
fn dismiss_removes_only_that_toast() {
	let mut queue = ToastQueue::default();
	let a = queue.push(ToastKind::Info, "uno");
	let b = queue.push(ToastKind::Success, "dos");
	assert!(queue.dismiss(a));
	assert!(!queue.dismiss(a));
	assert_eq!(queue.toasts().len(), 1);
	assert_eq!(queue.toasts()[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
	let mut queue = ToastQueue::default();
	let a = queue.push(ToastKind::Info, "uno");
	queue.dismiss(a);
	let b = queue.push(ToastKind::Info, "dos");
	assert_ne!(a, b);
}

#[test]
fn oldest_toasts_drop_past_limit() {
	let mut queue = ToastQueue::default();
	for i in 0..MAX_TOASTS + 2 {
		queue.push(ToastKind::Info, format!("m{i}"));
	}
	assert_eq!(queue.toasts().len(), MAX_TOASTS);
	assert_eq!(queue.toasts()[0].message, "m2");
}

#[test]
fn notifier_round_trip() {
	let owner = Owner::new();
	owner.with(|| {
		let notifier = Notifier::provide();
		let id = notifier.notify(ToastKind::Warning, "hola");
		assert_eq!(notifier.toasts().len(), 1);
		assert_eq!(notifier.toasts()[0].kind, ToastKind::Warning);
		notifier.dismiss(id);
		assert!(notifier.toasts().is_empty());
		assert!(use_context::<Notifier>().is_some());
	});
}
