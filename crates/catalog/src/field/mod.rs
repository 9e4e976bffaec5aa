// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::BTreeSet,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tadpole_frame::{Expr, col, lit};
use tadpole_type::{Type, Value};

mod def;

pub use def::{Candidate, FieldDef};

/// Column name standing in for "the field being defined" until binding.
pub const PLACEHOLDER: &str = "__field__";

/// A computation over the field's own column, e.g. `field().trim()`.
pub fn field() -> Expr {
	col(PLACEHOLDER)
}

/// A bound output column of a model. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
	name: String,
	dtype: Type,
	default: Option<Value>,
	primary_key: bool,
	computations: Vec<Expr>,
}

impl Field {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn dtype(&self) -> &Type {
		&self.dtype
	}

	pub fn default(&self) -> Option<&Value> {
		self.default.as_ref()
	}

	pub fn is_primary_key(&self) -> bool {
		self.primary_key
	}

	/// Bound candidate computations, in declaration order.
	pub fn computations(&self) -> &[Expr] {
		&self.computations
	}

	/// The default value as a literal of the field's type; undefined when no
	/// default was declared.
	pub fn literal(&self) -> Expr {
		lit(self.default.clone().unwrap_or(Value::Undefined)).cast(self.dtype.clone())
	}

	/// Root column names of each candidate, in declaration order.
	pub fn roots(&self) -> Vec<BTreeSet<String>> {
		self.computations.iter().map(Expr::root_names).collect()
	}
}

impl Display for Field {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.dtype)?;
		if self.primary_key {
			f.write_str(" [pk]")?;
		}
		if let Some(default) = &self.default {
			write!(f, " = {}", default)?;
		}
		Ok(())
	}
}
