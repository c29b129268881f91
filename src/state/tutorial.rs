//! Linear walk through the introductory tutorial.
//!
//! The flow only tracks an index; the Home page owns it while the tutorial
//! is mounted and drops it on completion, so re-entering starts at step 0.

#[cfg(test)]
#[path = "tutorial_test.rs"]
mod tutorial_test;

/// One screen of the tutorial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialStep {
	/// 1-based display id.
	pub id: u32,
	/// Heading.
	pub title: &'static str,
	/// Paragraph text.
	pub body: &'static str,
}

/// Built-in tutorial content, in order.
pub const STEPS: &[TutorialStep] = &[
	TutorialStep {
		id: 1,
		title: "¿Qué es Git?",
		body: "Git es un sistema de control de versiones distribuido. Guarda instantáneas de tu proyecto a lo largo del tiempo para que puedas volver a cualquier versión anterior, comparar cambios y trabajar sin miedo a perder nada.",
	},
	TutorialStep {
		id: 2,
		title: "Las tres áreas",
		body: "Tus archivos viven en el directorio de trabajo. Con git add los preparas en el área de staging, y con git commit los guardas de forma permanente en el repositorio. Entender este recorrido es la base de todo lo demás.",
	},
	TutorialStep {
		id: 3,
		title: "Trabajar con remotos",
		body: "Un repositorio remoto es una copia de tu proyecto alojada en un servidor. git clone lo descarga, git pull trae los cambios de tu equipo y git push comparte los tuyos.",
	},
	TutorialStep {
		id: 4,
		title: "Explora los comandos",
		body: "En el catálogo encontrarás cada comando con su sintaxis, ejemplos de uso y un diagrama interactivo de su flujo. Arrastra los nodos, haz zoom y conecta pasos para entender cómo funciona Git por dentro.",
	},
];

/// Result of asking the flow to move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
	/// Now showing the step at this index.
	Moved(usize),
	/// The caller should close the tutorial.
	Completed,
}

/// How a step indicator should be drawn relative to the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
	/// Already visited.
	Done,
	/// On screen.
	Current,
	/// Not reached yet.
	Upcoming,
}

/// Position within a tutorial of `len` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialFlow {
	index: usize,
	len: usize,
}

impl TutorialFlow {
	/// Starts at the first step.
	pub fn new(len: usize) -> Self {
		Self { index: 0, len }
	}

	/// Current step index.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Number of steps.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether the tutorial has no steps.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Whether "previous" has nowhere to go.
	pub fn is_first(&self) -> bool {
		self.index == 0
	}

	/// Whether "next" completes the tutorial.
	pub fn is_last(&self) -> bool {
		self.index + 1 >= self.len
	}

	/// Moves forward, or reports completion from the last step.
	pub fn next(&mut self) -> Advance {
		if self.is_last() {
			return Advance::Completed;
		}
		self.index += 1;
		Advance::Moved(self.index)
	}

	/// Moves back one step, staying put on the first.
	pub fn previous(&mut self) {
		self.index = self.index.saturating_sub(1);
	}

	/// Ends the tutorial from any step.
	pub fn skip(&self) -> Advance {
		Advance::Completed
	}

	/// Indicator state for step `i`.
	pub fn status(&self, i: usize) -> StepStatus {
		match i.cmp(&self.index) {
			std::cmp::Ordering::Less => StepStatus::Done,
			std::cmp::Ordering::Equal => StepStatus::Current,
			std::cmp::Ordering::Greater => StepStatus::Upcoming,
		}
	}

	/// e.g. `2 de 4`.
	pub fn progress_label(&self) -> String {
		format!("{} de {}", self.index + 1, self.len)
	}
}
