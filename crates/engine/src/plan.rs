// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeSet,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tadpole_catalog::{Field, Model};
use tadpole_frame::{Expr, Frame, Schema};
use tracing::{debug, instrument, trace};

use crate::DeriveError;

/// The candidate chosen for one field in one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
	pub field: String,
	/// Index into the field's candidates.
	pub candidate: usize,
	pub expr: Expr,
}

/// Selections applied together; none of them sees the others' output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
	pub selections: Vec<Selection>,
}

/// A field no candidate could produce, and the typed literal it takes instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fallback {
	pub field: String,
	pub literal: Expr,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
	pub rounds: Vec<Round>,
	pub defaults: Vec<Fallback>,
	/// Final projection, sorted by name.
	pub output: Vec<String>,
}

/// Per-call bookkeeping; the model's fields are never touched.
struct RunState {
	resolved: BTreeSet<String>,
	available: BTreeSet<String>,
}

impl RunState {
	fn new(schema: &Schema) -> Self {
		Self {
			resolved: BTreeSet::new(),
			available: schema.keys().cloned().collect(),
		}
	}

	fn unresolved<'a>(&self, model: &'a Model) -> Vec<&'a Field> {
		model.fields().filter(|f| !self.resolved.contains(f.name())).collect()
	}

	/// First candidate, in declaration order, whose roots are all available.
	fn select(&self, field: &Field) -> Option<Selection> {
		field.computations().iter().enumerate().find_map(|(candidate, expr)| {
			expr.root_names().is_subset(&self.available).then(|| Selection {
				field: field.name().to_string(),
				candidate,
				expr: expr.clone(),
			})
		})
	}
}

/// Resolves, at schema level, which candidate derives each field and in which
/// round.
///
/// Each round selects, for every unresolved field, the first candidate whose
/// roots are available. A round's outputs become available only to the next
/// round. Planning stops once every field is resolved or a round makes no
/// progress; remaining fields fall back to their default literal. Starting
/// round `max_iterations + 1` with unresolved fields is a
/// [`DeriveError::Timeout`].
#[instrument(name = "engine::plan", level = "debug", skip_all, fields(model = %model.name(), max_iterations = max_iterations))]
pub fn plan(model: &Model, schema: &Schema, max_iterations: usize) -> crate::Result<Plan> {
	let mut state = RunState::new(schema);
	let mut rounds = Vec::new();

	for n in 0.. {
		let unresolved = state.unresolved(model);
		if unresolved.is_empty() {
			break;
		}

		if n > max_iterations {
			return Err(DeriveError::Timeout {
				unresolved: unresolved.iter().map(|f| f.name().to_string()).collect(),
				max_iterations,
			});
		}

		let selections: Vec<Selection> = unresolved.iter().filter_map(|f| state.select(f)).collect();
		if selections.is_empty() {
			trace!(round = n, "no progress");
			break;
		}

		debug!(
			round = n,
			fields = ?selections.iter().map(|s| s.field.as_str()).collect::<Vec<_>>(),
			"round selected"
		);

		for selection in &selections {
			state.resolved.insert(selection.field.clone());
			state.available.insert(selection.field.clone());
		}
		rounds.push(Round {
			selections,
		});
	}

	let defaults = state
		.unresolved(model)
		.into_iter()
		.map(|f| Fallback {
			field: f.name().to_string(),
			literal: f.literal(),
		})
		.collect();

	Ok(Plan {
		rounds,
		defaults,
		output: model.sorted_field_names(),
	})
}

impl Plan {
	/// Fields taking their default literal.
	pub fn default_fields(&self) -> Vec<String> {
		self.defaults.iter().map(|d| d.field.clone()).collect()
	}

	/// Applies every round as one batch, then the defaults, then projects to
	/// the output columns.
	#[instrument(name = "engine::plan::execute", level = "debug", skip_all, fields(rounds = self.rounds.len()))]
	pub fn execute(&self, frame: Frame) -> crate::Result<Frame> {
		let mut frame = frame;

		for (n, round) in self.rounds.iter().enumerate() {
			trace!(round = n, selections = round.selections.len(), "applying round");
			let batch = round.selections.iter().map(|s| (s.field.clone(), s.expr.clone())).collect();
			frame = frame.with_columns(batch)?;
		}

		if !self.defaults.is_empty() {
			let batch = self.defaults.iter().map(|d| (d.field.clone(), d.literal.clone())).collect();
			frame = frame.with_columns(batch)?;
		}

		Ok(frame.select(&self.output)?)
	}
}

impl Display for Plan {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (n, round) in self.rounds.iter().enumerate() {
			writeln!(f, "round {}:", n)?;
			for selection in &round.selections {
				writeln!(f, "  {} <- [{}] {}", selection.field, selection.candidate, selection.expr)?;
			}
		}
		if !self.defaults.is_empty() {
			writeln!(f, "defaults:")?;
			for default in &self.defaults {
				writeln!(f, "  {} <- {}", default.field, default.literal)?;
			}
		}
		write!(f, "output: {}", self.output.join(", "))
	}
}
