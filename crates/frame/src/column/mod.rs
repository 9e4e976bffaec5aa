// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub use container::Container;
pub use data::ColumnData;

mod container;
mod data;
mod extend;

use tadpole_type::{Type, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn bool(name: &str, values: impl IntoIterator<Item = bool>) -> Self {
		Self::new(name, ColumnData::Bool(Container::from_vec(values.into_iter().collect())))
	}

	pub fn bool_with_validity(
		name: &str,
		values: impl IntoIterator<Item = bool>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(
			name,
			ColumnData::Bool(Container::new(values.into_iter().collect(), validity.into_iter().collect())),
		)
	}

	pub fn int8(name: &str, values: impl IntoIterator<Item = i64>) -> Self {
		Self::new(name, ColumnData::Int8(Container::from_vec(values.into_iter().collect())))
	}

	pub fn int8_with_validity(
		name: &str,
		values: impl IntoIterator<Item = i64>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(
			name,
			ColumnData::Int8(Container::new(values.into_iter().collect(), validity.into_iter().collect())),
		)
	}

	pub fn float8(name: &str, values: impl IntoIterator<Item = f64>) -> Self {
		Self::new(name, ColumnData::Float8(Container::from_vec(values.into_iter().collect())))
	}

	pub fn utf8<'a>(name: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
		Self::new(name, ColumnData::Utf8(Container::from_vec(values.into_iter().map(str::to_string).collect())))
	}

	pub fn utf8_with_validity<'a>(
		name: &str,
		values: impl IntoIterator<Item = &'a str>,
		validity: impl IntoIterator<Item = bool>,
	) -> Self {
		Self::new(
			name,
			ColumnData::Utf8(Container::new(
				values.into_iter().map(str::to_string).collect(),
				validity.into_iter().collect(),
			)),
		)
	}

	pub fn undefined(name: &str, len: usize) -> Self {
		Self::new(name, ColumnData::Undefined(len))
	}

	/// A column of `len` undefined values that still carries type `ty`.
	pub fn typed_undefined(name: &str, ty: &Type, len: usize) -> Self {
		Self::new(name, ColumnData::typed_undefined(ty, len))
	}

	/// Builds a column of type `ty`, casting every value into it.
	pub fn from_values(
		name: &str,
		ty: &Type,
		values: impl IntoIterator<Item = Value>,
	) -> crate::Result<Self> {
		Ok(Self::new(name, ColumnData::from_values(ty, values)?))
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}
