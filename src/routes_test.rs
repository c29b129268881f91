use super::*;

// =============================================================
// NavItem::is_active
// =============================================================

fn active(path: &str) -> Vec<&'static str> {
	NAV.iter()
		.filter(|item| item.is_active(path))
		.map(|item| item.label)
		.collect()
}

#[test]
fn nav_marks_only_the_matching_item() {
	assert_eq!(active("/"), vec!["Inicio"]);
	assert_eq!(active("/comenzar"), vec!["Comandos"]);
	assert_eq!(active("/start"), vec!["Comandos"]);
}

#[test]
fn trailing_slash_is_ignored() {
	assert_eq!(active("/comenzar/"), vec!["Comandos"]);
}

#[test]
fn detail_and_unknown_paths_mark_nothing() {
	assert!(active("/comando/1").is_empty());
	assert!(active("/comenzar/ya").is_empty());
	assert!(active("/nada").is_empty());
	assert!(active("").is_empty());
}
