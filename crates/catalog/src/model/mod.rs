// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tadpole_frame::Schema;

use crate::Field;

mod builder;

pub use builder::ModelBuilder;

/// An ordered set of fields keyed by name; the target schema of a derivation.
///
/// Models are immutable once built and safe to share across threads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
	name: String,
	fields: IndexMap<String, Field>,
}

impl Model {
	pub fn builder(name: impl Into<String>) -> ModelBuilder {
		ModelBuilder::new(name)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
		self.fields.values()
	}

	pub fn field(&self, name: &str) -> Option<&Field> {
		self.fields.get(name)
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Field names in declaration order.
	pub fn field_names(&self) -> Vec<String> {
		self.fields.keys().cloned().collect()
	}

	/// Field names in the order of the derived output.
	pub fn sorted_field_names(&self) -> Vec<String> {
		let mut names = self.field_names();
		names.sort();
		names
	}

	pub fn primary_key_columns(&self) -> Vec<String> {
		self.fields.values().filter(|f| f.is_primary_key()).map(|f| f.name().to_string()).collect()
	}

	/// Field name to declared type, in declaration order.
	pub fn schema(&self) -> Schema {
		self.fields.values().map(|f| (f.name().to_string(), f.dtype().clone())).collect()
	}
}

impl Display for Model {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (i, field) in self.fields.values().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", field)?;
		}
		f.write_str(")")
	}
}
