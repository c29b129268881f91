use std::collections::BTreeMap;

use serde::Deserialize;

use super::*;

fn cache() -> LocalCache<MemoryStorage> {
	LocalCache::with_backend(MemoryStorage::default(), "test.")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Draft {
	title: String,
	tags: Vec<String>,
	pinned: bool,
	meta: BTreeMap<String, Option<f64>>,
}

#[test]
fn missing_key_returns_default() {
	assert_eq!(cache().get("nope", 7_u32), 7);
}

#[test]
fn round_trips_structured_values() {
	let cache = cache();
	let draft = Draft {
		title: "<p>hola</p>".into(),
		tags: vec!["git".into(), "add".into()],
		pinned: true,
		meta: BTreeMap::from([("score".into(), Some(1.5)), ("none".into(), None)]),
	};
	cache.set("draft", &draft);
	let empty = Draft {
		title: String::new(),
		tags: vec![],
		pinned: false,
		meta: BTreeMap::new(),
	};
	assert_eq!(cache.get("draft", empty), draft);
}

#[test]
fn round_trips_plain_json_values() {
	let cache = cache();
	let value = serde_json::json!({"a": [1, 2, {"b": null}], "c": "ñ"});
	cache.set("json", &value);
	assert_eq!(cache.get("json", serde_json::Value::Null), value);
}

#[test]
fn keys_are_prefixed() {
	let cache = cache();
	cache.set("k", "v");
	assert_eq!(
		cache.backend.get_item("test.k").unwrap(),
		Some("\"v\"".to_owned())
	);
	assert_eq!(cache.backend.get_item("k").unwrap(), None);
}

#[test]
fn unparseable_value_returns_default() {
	let cache = cache();
	cache.backend.set_item("test.bad", "{not json").unwrap();
	assert_eq!(cache.get("bad", String::from("fallback")), "fallback");
}

#[test]
fn type_mismatch_returns_default() {
	let cache = cache();
	cache.set("n", &"text");
	assert_eq!(cache.get("n", 3_i64), 3);
}

#[test]
fn failing_backend_is_silent() {
	let cache = LocalCache::with_backend(MemoryStorage::failing(), "test.");
	cache.set("k", &1_u8);
	cache.remove("k");
	assert_eq!(cache.get("k", 9_u8), 9);
}

#[test]
fn remove_deletes_value() {
	let cache = cache();
	cache.set("k", &true);
	cache.remove("k");
	assert!(!cache.get("k", false));
}

#[test]
fn overwrite_replaces_value() {
	let cache = cache();
	cache.set("k", &1);
	cache.set("k", &2);
	assert_eq!(cache.get("k", 0), 2);
}
