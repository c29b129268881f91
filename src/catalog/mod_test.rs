use super::*;

fn library() -> Library {
	Library::load().expect("built-in tables are valid")
}

// =============================================================
// Built-in tables
// =============================================================

#[test]
fn builtin_tables_load() {
	let library = library();
	assert_eq!(library.get(CatalogKind::Command).entries().len(), 6);
	assert_eq!(library.get(CatalogKind::Algorithm).entries().len(), 6);
	assert_eq!(library.get(CatalogKind::Command).kind(), CatalogKind::Command);
}

#[test]
fn every_entry_has_a_matching_detail() {
	let library = library();
	for kind in [CatalogKind::Command, CatalogKind::Algorithm] {
		let catalog = library.get(kind);
		for entry in catalog.entries() {
			let detail = catalog
				.lookup(&entry.id.to_string())
				.unwrap_or_else(|| panic!("{kind:?} {} has no detail", entry.id));
			assert_eq!(detail.name, entry.name);
			assert!(!detail.long_description.is_empty());
		}
	}
}

#[test]
fn every_diagram_edge_references_declared_nodes() {
	let library = library();
	for kind in [CatalogKind::Command, CatalogKind::Algorithm] {
		for entry in library.get(kind).entries() {
			let diagram = &library.get(kind).detail(entry.id).unwrap().diagram;
			for edge in &diagram.edges {
				assert!(diagram.contains_node(&edge.source), "{}", edge.id);
				assert!(diagram.contains_node(&edge.target), "{}", edge.id);
			}
		}
	}
}

#[test]
fn git_add_record_matches_published_content() {
	let library = library();
	let record = library.get(CatalogKind::Command).lookup("3").unwrap();
	assert_eq!(record.name, "git add");
	assert_eq!(
		record.syntax.as_deref(),
		Some("git add <archivo|directorio|patrón>")
	);
	assert_eq!(record.diagram.nodes.len(), 7);
	assert_eq!(record.diagram.edges.len(), 7);
	let labelled = record
		.diagram
		.edges
		.iter()
		.find(|e| e.id == "e2-3")
		.unwrap();
	assert_eq!(labelled.label.as_deref(), Some("git add"));
	assert!(labelled.animated);
}

#[test]
fn commands_carry_syntax_and_examples_algorithms_do_not() {
	let library = library();
	for entry in library.get(CatalogKind::Command).entries() {
		let record = library.get(CatalogKind::Command).detail(entry.id).unwrap();
		assert!(record.syntax.is_some());
		assert!(record.examples_block().is_some());
	}
	for entry in library.get(CatalogKind::Algorithm).entries() {
		let record = library.get(CatalogKind::Algorithm).detail(entry.id).unwrap();
		assert!(record.syntax.is_none());
		assert_eq!(record.examples_block(), None);
	}
}

#[test]
fn examples_block_joins_lines_verbatim() {
	let library = library();
	let record = library.get(CatalogKind::Command).lookup("1").unwrap();
	let block = record.examples_block().unwrap();
	assert!(block.starts_with("# Inicializar en el directorio actual\ngit init\n\n"));
	assert!(block.ends_with("git init -b main"));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn lookup_misses_unknown_and_malformed_ids() {
	let library = library();
	let commands = library.get(CatalogKind::Command);
	for raw in ["0", "7", "99", "", "abc", "03", "+3", "-1", "3 "] {
		assert!(commands.lookup(raw).is_none(), "{raw:?} should miss");
	}
}

#[test]
fn tables_are_independent() {
	let library = library();
	assert_eq!(library.get(CatalogKind::Command).lookup("1").unwrap().name, "git init");
	assert_eq!(
		library.get(CatalogKind::Algorithm).lookup("1").unwrap().name,
		"Algoritmo 1"
	);
}

// =============================================================
// Filter
// =============================================================

#[test]
fn blank_filter_returns_every_entry_in_order() {
	let library = library();
	let commands = library.get(CatalogKind::Command);
	let ids: Vec<u32> = commands.filter("  ").iter().map(|e| e.id).collect();
	assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn filter_matches_name_case_insensitively() {
	let library = library();
	let hits = library.get(CatalogKind::Command).filter("GIT PU");
	let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
	assert_eq!(names, vec!["git push", "git pull"]);
}

#[test]
fn filter_matches_description() {
	let library = library();
	let hits = library.get(CatalogKind::Command).filter("staging");
	assert!(hits.iter().any(|e| e.name == "git add"));
	assert!(library.get(CatalogKind::Command).filter("zzzz").is_empty());
}

// =============================================================
// Validation
// =============================================================

const DANGLING: &[RawRecord] = &[RawRecord {
	id: 1,
	name: "broken",
	summary: "",
	description: &[],
	syntax: None,
	examples: &[],
	nodes: &[("1", "a", 0.0, 0.0)],
	edges: &[("e1-2", "1", "2", None, false)],
}];

const DUPLICATE: &[RawRecord] = &[
	RawRecord {
		id: 4,
		name: "first",
		summary: "",
		description: &[],
		syntax: None,
		examples: &[],
		nodes: &[],
		edges: &[],
	},
	RawRecord {
		id: 4,
		name: "second",
		summary: "",
		description: &[],
		syntax: None,
		examples: &[],
		nodes: &[],
		edges: &[],
	},
];

#[test]
fn load_rejects_dangling_edge() {
	let err = Catalog::from_raw(CatalogKind::Algorithm, DANGLING).unwrap_err();
	assert_eq!(
		err,
		CatalogError::InvalidDiagram {
			kind: CatalogKind::Algorithm,
			id: 1,
			source: GraphError::DanglingEdge {
				edge: "e1-2".into(),
				endpoint: "2".into(),
			},
		}
	);
}

#[test]
fn load_rejects_duplicate_ids() {
	let err = Catalog::from_raw(CatalogKind::Command, DUPLICATE).unwrap_err();
	assert_eq!(
		err,
		CatalogError::DuplicateEntry {
			kind: CatalogKind::Command,
			id: 4,
		}
	);
}

// =============================================================
// Kind
// =============================================================

#[test]
fn detail_paths_use_kind_prefix() {
	assert_eq!(CatalogKind::Command.detail_path(3), "/comando/3");
	assert_eq!(CatalogKind::Algorithm.detail_path(6), "/algoritmo/6");
}
