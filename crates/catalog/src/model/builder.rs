// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tracing::{debug, instrument};

use super::Model;
use crate::{Field, FieldDef};

pub struct ModelBuilder {
	name: String,
	definitions: IndexMap<String, FieldDef>,
	inherited: Vec<Field>,
}

impl ModelBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			definitions: IndexMap::new(),
			inherited: Vec::new(),
		}
	}

	/// Declares a field. Declaring a name again replaces the earlier
	/// definition but keeps its position.
	pub fn field(mut self, name: impl Into<String>, definition: impl Into<FieldDef>) -> Self {
		self.definitions.insert(name.into(), definition.into());
		self
	}

	/// Inherits the fields of `parent`. They are placed after the fields
	/// declared on this builder and only for names this builder does not
	/// declare itself.
	pub fn extends(mut self, parent: &Model) -> Self {
		self.inherited.extend(parent.fields().cloned());
		self
	}

	#[instrument(name = "catalog::model::build", level = "debug", skip(self), fields(model = %self.name))]
	pub fn build(self) -> crate::Result<Model> {
		let mut fields = IndexMap::with_capacity(self.definitions.len() + self.inherited.len());

		for (name, definition) in self.definitions {
			let field = definition.bind(&name)?;
			fields.insert(name, field);
		}

		for field in self.inherited {
			if !fields.contains_key(field.name()) {
				fields.insert(field.name().to_string(), field);
			}
		}

		debug!(fields = fields.len(), "model built");

		Ok(Model {
			name: self.name,
			fields,
		})
	}
}
