// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Add, sync::Arc};

use tadpole_catalog::Model;
use tadpole_frame::Frame;
use tracing::instrument;

use crate::{DeriveConfig, Source, append, normalize, transform};

/// Rows loaded for one model, normalized and ready to be derived.
#[derive(Debug, Clone)]
pub struct Dataset {
	model: Arc<Model>,
	config: DeriveConfig,
	frame: Frame,
}

impl Dataset {
	/// Loads `source` and normalizes it according to `config`.
	#[instrument(name = "engine::dataset::new", level = "debug", skip_all, fields(model = %model.name()))]
	pub fn new(model: Arc<Model>, source: impl Into<Source>, config: DeriveConfig) -> crate::Result<Self> {
		let frame = source.into().load()?;
		let frame = normalize(frame, config.expand, &config.expand_columns, &config.separator)?;
		Ok(Self {
			model,
			config,
			frame,
		})
	}

	pub fn model(&self) -> &Model {
		&self.model
	}

	pub fn config(&self) -> &DeriveConfig {
		&self.config
	}

	/// The normalized rows, before derivation.
	pub fn frame(&self) -> &Frame {
		&self.frame
	}

	pub fn primary_key(&self) -> Vec<String> {
		self.model.primary_key_columns()
	}

	/// Adds more rows. A frame, including the frame of another dataset, is
	/// taken as is; records and files are loaded and normalized with this
	/// dataset's configuration first.
	pub fn append(&mut self, other: impl Into<Source>) -> crate::Result<()> {
		let other = match other.into() {
			Source::Frame(frame) => frame,
			source => {
				let config = &self.config;
				normalize(source.load()?, config.expand, &config.expand_columns, &config.separator)?
			}
		};
		let frame = std::mem::take(&mut self.frame);
		self.frame = append(frame, other)?;
		Ok(())
	}

	/// Derives the model's fields.
	#[instrument(name = "engine::dataset::collect", level = "debug", skip_all, fields(model = %self.model.name()))]
	pub fn collect(&self) -> crate::Result<Frame> {
		transform(&self.model, self.frame.clone(), &self.config)
	}

	/// Derives `model`'s fields from `frame` with the default configuration
	/// and without normalization.
	pub fn transform(model: &Model, frame: Frame) -> crate::Result<Frame> {
		transform(model, frame, &DeriveConfig::default())
	}
}

impl From<&Dataset> for Source {
	fn from(dataset: &Dataset) -> Self {
		Source::Frame(dataset.frame.clone())
	}
}

impl From<Dataset> for Source {
	fn from(dataset: Dataset) -> Self {
		Source::Frame(dataset.frame)
	}
}

/// A copy of the left dataset with the rows of the right one appended.
impl Add<&Dataset> for &Dataset {
	type Output = crate::Result<Dataset>;

	fn add(self, other: &Dataset) -> Self::Output {
		let mut result = self.clone();
		result.append(other)?;
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use serde_json::json;
	use tadpole_catalog::{FieldDef, Model};
	use tadpole_frame::{Column, Frame, col};
	use tadpole_type::{Type, Value};

	use super::Dataset;
	use crate::{DeriveConfig, ExpandMode};

	fn model() -> Arc<Model> {
		Arc::new(
			Model::builder("Orders")
				.field("order_id", FieldDef::new(Type::Int8).candidate(col("id")).primary_key())
				.field("item", FieldDef::new(Type::Utf8).candidate(col("items")))
				.build()
				.unwrap(),
		)
	}

	fn config() -> DeriveConfig {
		DeriveConfig::default().expand(ExpandMode::Explode)
	}

	#[test]
	fn test_new_normalizes() {
		let dataset = Dataset::new(model(), vec![json!({"id": 1, "items": ["a", "b"]})], config()).unwrap();
		assert_eq!(dataset.frame().row_count(), 2);
		assert_eq!(dataset.primary_key(), vec!["order_id"]);
	}

	#[test]
	fn test_append_records_are_normalized() {
		let mut dataset = Dataset::new(model(), vec![json!({"id": 1, "items": ["a"]})], config()).unwrap();
		dataset.append(vec![json!({"id": 2, "items": ["b", "c"], "note": "x"})]).unwrap();

		assert_eq!(dataset.frame().names(), vec!["id", "items", "note"]);
		assert_eq!(dataset.frame().row_count(), 3);

		let result = dataset.collect().unwrap();
		assert_eq!(result.names(), vec!["item", "order_id"]);
		assert_eq!(result.column("item").unwrap().data.values().collect::<Vec<_>>(), vec![
			Value::utf8("a"),
			Value::utf8("b"),
			Value::utf8("c")
		]);
	}

	#[test]
	fn test_append_frame_as_is() {
		let mut dataset = Dataset::new(model(), vec![json!({"id": 1, "items": ["a"]})], config()).unwrap();
		dataset.append(Frame::new(vec![Column::int8("id", [9])]).unwrap()).unwrap();
		assert_eq!(dataset.frame().row(1), vec![Value::int8(9), Value::Undefined]);
	}

	#[test]
	fn test_add_leaves_operands() {
		let left = Dataset::new(model(), vec![json!({"id": 1, "items": ["a"]})], config()).unwrap();
		let right = Dataset::new(model(), vec![json!({"id": 2, "items": ["b"]})], config()).unwrap();

		let sum = (&left + &right).unwrap();

		assert_eq!(sum.frame().row_count(), 2);
		assert_eq!(left.frame().row_count(), 1);
		assert_eq!(right.frame().row_count(), 1);
	}

	#[test]
	fn test_transform_without_dataset() {
		let frame = Frame::new(vec![Column::int8("id", [5]), Column::utf8("items", ["z"])]).unwrap();
		let result = Dataset::transform(&model(), frame).unwrap();
		assert_eq!(result.row(0), vec![Value::utf8("z"), Value::int8(5)]);
	}
}
