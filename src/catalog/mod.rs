//! Static lookup tables for the Git command and algorithm detail pages.
//!
//! The tables are authored as plain `'static` literals in [`commands`] and
//! [`algorithms`] and converted into owned, validated records once at
//! startup. A table whose diagrams reference undeclared nodes is rejected
//! instead of being rendered with missing edges.

use std::collections::BTreeMap;

use log::info;
use thiserror::Error;

use crate::components::diagram::{GraphData, GraphEdge, GraphError, GraphNode, Position};

mod algorithms;
mod commands;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// `(id, label, x, y)`
type RawNode = (&'static str, &'static str, f64, f64);
/// `(id, source, target, label, animated)`
type RawEdge = (
	&'static str,
	&'static str,
	&'static str,
	Option<&'static str>,
	bool,
);

struct RawRecord {
	id: u32,
	name: &'static str,
	summary: &'static str,
	description: &'static [&'static str],
	syntax: Option<&'static str>,
	examples: &'static [&'static str],
	nodes: &'static [RawNode],
	edges: &'static [RawEdge],
}

/// Which table a detail route reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
	/// Git commands, served under `/comando/:id`.
	Command,
	/// Example algorithms, served under `/algoritmo/:id`.
	Algorithm,
}

impl CatalogKind {
	/// Path prefix of this kind's detail route.
	pub fn route_prefix(self) -> &'static str {
		match self {
			Self::Command => "/comando",
			Self::Algorithm => "/algoritmo",
		}
	}

	/// Detail route for the record with `id`.
	pub fn detail_path(self, id: u32) -> String {
		format!("{}/{id}", self.route_prefix())
	}

	/// Heading shown when a route id has no record.
	pub fn not_found_title(self) -> &'static str {
		match self {
			Self::Command => "Comando no encontrado",
			Self::Algorithm => "Algoritmo no encontrado",
		}
	}

	/// Subtitle under the record name on the detail page.
	pub fn tagline(self) -> &'static str {
		match self {
			Self::Command => "Aprende cómo funciona este comando de Git",
			Self::Algorithm => "Información detallada y visualización",
		}
	}

	/// Title of the description section.
	pub fn description_title(self) -> &'static str {
		match self {
			Self::Command => "Descripción del Comando",
			Self::Algorithm => "Descripción del Algoritmo",
		}
	}

	/// Title of the diagram section.
	pub fn diagram_title(self) -> &'static str {
		match self {
			Self::Command => "Diagrama de Flujo del Comando",
			Self::Algorithm => "Visualización del Grafo",
		}
	}
}

/// One card in the catalog browse view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
	/// Identifier shared with the matching [`DetailRecord`].
	pub id: u32,
	/// Display name, e.g. `git add`.
	pub name: String,
	/// Card description; truncated by the card when long.
	pub short_description: String,
}

/// Full content of a detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailRecord {
	/// Identifier shared with the matching [`CatalogEntry`].
	pub id: u32,
	/// Display name.
	pub name: String,
	/// Multi-paragraph description, rendered with line breaks preserved.
	pub long_description: String,
	/// Usage syntax, when the record describes a command.
	pub syntax: Option<String>,
	/// Example lines, shown verbatim.
	pub examples: Vec<String>,
	/// Flow diagram shown below the description.
	pub diagram: GraphData,
}

impl DetailRecord {
	/// Example lines joined with line breaks, or `None` when there are none.
	pub fn examples_block(&self) -> Option<String> {
		(!self.examples.is_empty()).then(|| self.examples.join("\n"))
	}
}

/// Defects found while loading a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
	/// Two records share an id.
	#[error("{kind:?} table declares id {id} more than once")]
	DuplicateEntry {
		/// Table being loaded.
		kind: CatalogKind,
		/// Repeated id.
		id: u32,
	},
	/// A record's diagram failed validation.
	#[error("{kind:?} record {id} has an invalid diagram: {source}")]
	InvalidDiagram {
		/// Table being loaded.
		kind: CatalogKind,
		/// Offending record.
		id: u32,
		/// What was wrong with the diagram.
		#[source]
		source: GraphError,
	},
}

/// A validated table of entries and their detail records.
#[derive(Clone, Debug)]
pub struct Catalog {
	kind: CatalogKind,
	entries: Vec<CatalogEntry>,
	details: BTreeMap<u32, DetailRecord>,
}

impl Catalog {
	/// The Git command table.
	pub fn commands() -> Result<Self, CatalogError> {
		Self::from_raw(CatalogKind::Command, commands::RECORDS)
	}

	/// The algorithm table.
	pub fn algorithms() -> Result<Self, CatalogError> {
		Self::from_raw(CatalogKind::Algorithm, algorithms::RECORDS)
	}

	fn from_raw(kind: CatalogKind, raw: &[RawRecord]) -> Result<Self, CatalogError> {
		let mut entries = Vec::with_capacity(raw.len());
		let mut details = BTreeMap::new();

		for record in raw {
			let diagram = GraphData {
				nodes: record
					.nodes
					.iter()
					.map(|&(id, label, x, y)| GraphNode {
						id: id.to_owned(),
						label: label.to_owned(),
						position: Position { x, y },
					})
					.collect(),
				edges: record
					.edges
					.iter()
					.map(|&(id, source, target, label, animated)| GraphEdge {
						id: id.to_owned(),
						source: source.to_owned(),
						target: target.to_owned(),
						label: label.map(str::to_owned),
						animated,
					})
					.collect(),
			};
			diagram
				.validate()
				.map_err(|source| CatalogError::InvalidDiagram {
					kind,
					id: record.id,
					source,
				})?;

			let detail = DetailRecord {
				id: record.id,
				name: record.name.to_owned(),
				long_description: record.description.join("\n"),
				syntax: record.syntax.map(str::to_owned),
				examples: record.examples.iter().map(|l| (*l).to_owned()).collect(),
				diagram,
			};
			if details.insert(record.id, detail).is_some() {
				return Err(CatalogError::DuplicateEntry {
					kind,
					id: record.id,
				});
			}
			entries.push(CatalogEntry {
				id: record.id,
				name: record.name.to_owned(),
				short_description: record.summary.to_owned(),
			});
		}

		Ok(Self {
			kind,
			entries,
			details,
		})
	}

	pub fn kind(&self) -> CatalogKind {
		self.kind
	}

	/// Entries in authoring order.
	pub fn entries(&self) -> &[CatalogEntry] {
		&self.entries
	}

	pub fn detail(&self, id: u32) -> Option<&DetailRecord> {
		self.details.get(&id)
	}

	/// Resolves a raw route parameter. Only the canonical decimal form of an
	/// id matches, so `03` or `+3` miss just like an unknown id.
	pub fn lookup(&self, raw_id: &str) -> Option<&DetailRecord> {
		let id: u32 = raw_id.parse().ok()?;
		if id.to_string() != raw_id {
			return None;
		}
		self.detail(id)
	}

	/// Entries whose name or short description contains `query`, ignoring
	/// case. A blank query matches everything.
	pub fn filter(&self, query: &str) -> Vec<&CatalogEntry> {
		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return self.entries.iter().collect();
		}
		self.entries
			.iter()
			.filter(|e| {
				e.name.to_lowercase().contains(&needle)
					|| e.short_description.to_lowercase().contains(&needle)
			})
			.collect()
	}
}

/// Both tables, loaded together at startup.
#[derive(Clone, Debug)]
pub struct Library {
	commands: Catalog,
	algorithms: Catalog,
}

impl Library {
	/// Loads and validates every table.
	pub fn load() -> Result<Self, CatalogError> {
		let library = Self {
			commands: Catalog::commands()?,
			algorithms: Catalog::algorithms()?,
		};
		info!(
			"Catalog loaded: {} commands, {} algorithms",
			library.commands.entries().len(),
			library.algorithms.entries().len()
		);
		Ok(library)
	}

	pub fn get(&self, kind: CatalogKind) -> &Catalog {
		match kind {
			CatalogKind::Command => &self.commands,
			CatalogKind::Algorithm => &self.algorithms,
		}
	}
}
