// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use tadpole_type::{Type, Value};

use super::{Column, Container};
use crate::FrameError;

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
	Bool(Container<bool>),
	Int8(Container<i64>),
	Float8(Container<f64>),
	Utf8(Container<String>),
	List {
		element: Type,
		container: Container<Vec<Value>>,
	},
	// children are stored columnar; `bitvec` marks rows where the record itself is defined
	Struct {
		fields: Vec<Column>,
		bitvec: Vec<bool>,
	},
	// special case: all undefined, type not known
	Undefined(usize),
}

impl ColumnData {
	pub fn typed_undefined(ty: &Type, len: usize) -> Self {
		match ty {
			Type::Undefined => ColumnData::Undefined(len),
			Type::Boolean => ColumnData::Bool(Container::undefined(len)),
			Type::Int8 => ColumnData::Int8(Container::undefined(len)),
			Type::Float8 => ColumnData::Float8(Container::undefined(len)),
			Type::Utf8 => ColumnData::Utf8(Container::undefined(len)),
			Type::List(element) => ColumnData::List {
				element: element.as_ref().clone(),
				container: Container::undefined(len),
			},
			Type::Struct(fields) => ColumnData::Struct {
				fields: fields.iter().map(|(name, ty)| Column::typed_undefined(name, ty, len)).collect(),
				bitvec: vec![false; len],
			},
		}
	}

	/// Builds column data of type `ty`; every value is cast into it.
	pub fn from_values(ty: &Type, values: impl IntoIterator<Item = Value>) -> crate::Result<Self> {
		let mut result = Self::typed_undefined(ty, 0);
		for value in values {
			result.push_value(value)?;
		}
		Ok(result)
	}

	/// Builds column data typed by the supertype of all `values`.
	pub fn from_values_inferred(values: Vec<Value>) -> crate::Result<Self> {
		let mut ty = Type::Undefined;
		for value in &values {
			let value_ty = value.get_type();
			ty = Type::promote(&ty, &value_ty).ok_or_else(|| FrameError::TypeMismatch {
				left: ty.clone(),
				right: value_ty,
			})?;
		}
		Self::from_values(&ty, values)
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Bool(_) => Type::Boolean,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::List {
				element,
				..
			} => Type::List(Box::new(element.clone())),
			ColumnData::Struct {
				fields,
				..
			} => Type::Struct(fields.iter().map(|c| (c.name.clone(), c.get_type())).collect()),
			ColumnData::Undefined(_) => Type::Undefined,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(c) => c.len(),
			ColumnData::Int8(c) => c.len(),
			ColumnData::Float8(c) => c.len(),
			ColumnData::Utf8(c) => c.len(),
			ColumnData::List {
				container,
				..
			} => container.len(),
			ColumnData::Struct {
				bitvec,
				..
			} => bitvec.len(),
			ColumnData::Undefined(n) => *n,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn is_defined(&self, index: usize) -> bool {
		match self {
			ColumnData::Bool(c) => c.is_defined(index),
			ColumnData::Int8(c) => c.is_defined(index),
			ColumnData::Float8(c) => c.is_defined(index),
			ColumnData::Utf8(c) => c.is_defined(index),
			ColumnData::List {
				container,
				..
			} => container.is_defined(index),
			ColumnData::Struct {
				bitvec,
				..
			} => bitvec.get(index).copied().unwrap_or(false),
			ColumnData::Undefined(_) => false,
		}
	}

	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(c) => c.get(index).map_or(Value::Undefined, |v| Value::Boolean(*v)),
			ColumnData::Int8(c) => c.get(index).map_or(Value::Undefined, |v| Value::Int8(*v)),
			ColumnData::Float8(c) => c.get(index).map_or(Value::Undefined, |v| Value::Float8(*v)),
			ColumnData::Utf8(c) => c.get(index).map_or(Value::Undefined, |v| Value::Utf8(v.clone())),
			ColumnData::List {
				container,
				..
			} => container.get(index).map_or(Value::Undefined, |v| Value::List(v.clone())),
			ColumnData::Struct {
				fields,
				..
			} => {
				if !self.is_defined(index) {
					return Value::Undefined;
				}
				Value::Struct(
					fields.iter()
						.map(|c| (c.name.clone(), c.data.get_value(index)))
						.collect::<IndexMap<_, _>>(),
				)
			}
			ColumnData::Undefined(_) => Value::Undefined,
		}
	}

	pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).map(|i| self.get_value(i))
	}

	/// Appends one value, casting it into this column's type first.
	///
	/// An untyped `Undefined` column adopts the type of the first defined
	/// value pushed into it.
	pub fn push_value(&mut self, value: Value) -> crate::Result<()> {
		if let ColumnData::Undefined(n) = self {
			if value.is_undefined() {
				*n += 1;
				return Ok(());
			}
			let len = *n;
			*self = Self::typed_undefined(&value.get_type(), len);
		}

		let value = value.cast(&self.get_type())?;

		match (self, value) {
			(ColumnData::Bool(c), Value::Boolean(v)) => c.push(v),
			(ColumnData::Int8(c), Value::Int8(v)) => c.push(v),
			(ColumnData::Float8(c), Value::Float8(v)) => c.push(v),
			(ColumnData::Utf8(c), Value::Utf8(v)) => c.push(v),
			(
				ColumnData::List {
					container,
					..
				},
				Value::List(v),
			) => container.push(v),
			(
				ColumnData::Struct {
					fields,
					bitvec,
				},
				Value::Struct(mut record),
			) => {
				for column in fields.iter_mut() {
					let value = record.shift_remove(&column.name).unwrap_or(Value::Undefined);
					column.data.push_value(value)?;
				}
				bitvec.push(true);
			}
			(
				ColumnData::Struct {
					fields,
					bitvec,
				},
				Value::Undefined,
			) => {
				for column in fields.iter_mut() {
					column.data.push_value(Value::Undefined)?;
				}
				bitvec.push(false);
			}
			(ColumnData::Bool(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Int8(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Float8(c), Value::Undefined) => c.push_undefined(),
			(ColumnData::Utf8(c), Value::Undefined) => c.push_undefined(),
			(
				ColumnData::List {
					container,
					..
				},
				Value::Undefined,
			) => container.push_undefined(),
			(ColumnData::Undefined(n), Value::Undefined) => *n += 1,
			(data, value) => {
				return Err(FrameError::TypeMismatch {
					left: data.get_type(),
					right: value.get_type(),
				});
			}
		}

		Ok(())
	}

	/// Gathers the rows at `indices`, in that order; repeats are allowed.
	pub fn take(&self, indices: &[usize]) -> ColumnData {
		match self {
			ColumnData::Bool(c) => ColumnData::Bool(c.take(indices)),
			ColumnData::Int8(c) => ColumnData::Int8(c.take(indices)),
			ColumnData::Float8(c) => ColumnData::Float8(c.take(indices)),
			ColumnData::Utf8(c) => ColumnData::Utf8(c.take(indices)),
			ColumnData::List {
				element,
				container,
			} => ColumnData::List {
				element: element.clone(),
				container: container.take(indices),
			},
			ColumnData::Struct {
				fields,
				bitvec,
			} => ColumnData::Struct {
				fields: fields.iter().map(|c| Column::new(c.name.clone(), c.data.take(indices))).collect(),
				bitvec: indices.iter().map(|&i| bitvec.get(i).copied().unwrap_or(false)).collect(),
			},
			ColumnData::Undefined(_) => ColumnData::Undefined(indices.len()),
		}
	}

	pub fn cast(&self, ty: &Type) -> crate::Result<ColumnData> {
		if ty.is_undefined() || *ty == self.get_type() {
			return Ok(self.clone());
		}

		let mut result = Self::typed_undefined(ty, 0);
		for value in self.values() {
			result.push_value(value.cast(ty)?)?;
		}
		Ok(result)
	}

	pub fn as_string(&self, index: usize) -> String {
		self.get_value(index).to_string()
	}
}
