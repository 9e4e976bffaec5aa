// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tadpole_frame::{Expr, col, lit};
use tadpole_type::{Type, Value};

use super::{Field, PLACEHOLDER};
use crate::ModelError;

/// One way of producing a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Candidate {
	/// A computation over other columns, possibly reading the placeholder.
	Computed(Expr),
	/// A plain value: becomes the field default, and the field reads its own
	/// source column.
	Default(Value),
}

impl From<Expr> for Candidate {
	fn from(expr: Expr) -> Self {
		Candidate::Computed(expr)
	}
}

impl From<Value> for Candidate {
	fn from(value: Value) -> Self {
		Candidate::Default(value)
	}
}

/// Unbound field definition, as authored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
	dtype: Type,
	candidates: Vec<Candidate>,
	default: Option<Value>,
	primary_key: bool,
}

impl FieldDef {
	pub fn new(dtype: Type) -> Self {
		Self {
			dtype,
			candidates: Vec::new(),
			default: None,
			primary_key: false,
		}
	}

	pub fn candidate(mut self, candidate: impl Into<Candidate>) -> Self {
		self.candidates.push(candidate.into());
		self
	}

	pub fn default(mut self, value: impl Into<Value>) -> Self {
		self.default = Some(value.into());
		self
	}

	pub fn primary_key(mut self) -> Self {
		self.primary_key = true;
		self
	}

	pub fn dtype(&self) -> &Type {
		&self.dtype
	}

	pub fn candidates(&self) -> &[Candidate] {
		&self.candidates
	}

	/// Binds the definition to `name`.
	///
	/// Placeholder reads are rewritten to `name`, every candidate is cast to
	/// the field type and, when a default exists, has its undefined values
	/// filled with it. A definition without candidates reads the source
	/// column `name` as is.
	pub fn bind(self, name: &str) -> crate::Result<Field> {
		if name.is_empty() {
			return Err(ModelError::UnboundField {
				candidates: self.candidates.len(),
			});
		}

		let mut candidates = self.candidates;
		if candidates.is_empty() {
			candidates.push(Candidate::Computed(col(PLACEHOLDER)));
		}

		// the last plain value wins over an explicit default
		let default = candidates
			.iter()
			.rev()
			.find_map(|c| match c {
				Candidate::Default(v) => Some(v.clone()),
				Candidate::Computed(_) => None,
			})
			.or(self.default)
			.filter(|v| !v.is_undefined());

		let computations = candidates
			.into_iter()
			.map(|candidate| {
				let expr = match candidate {
					Candidate::Computed(expr) => expr.rename_root(PLACEHOLDER, name),
					Candidate::Default(_) => col(name),
				}
				.cast(self.dtype.clone());
				match &default {
					Some(default) => expr.fill_null(lit(default.clone())),
					None => expr,
				}
			})
			.collect();

		Ok(Field {
			name: name.to_string(),
			dtype: self.dtype,
			default,
			primary_key: self.primary_key,
			computations,
		})
	}
}

/// A single computation of unknown type.
impl From<Expr> for FieldDef {
	fn from(expr: Expr) -> Self {
		FieldDef::new(Type::Undefined).candidate(expr)
	}
}

impl From<Type> for FieldDef {
	fn from(dtype: Type) -> Self {
		FieldDef::new(dtype)
	}
}
