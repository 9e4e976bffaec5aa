// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod cast;
mod r#type;

pub use r#type::Type;

/// A single cell, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(f64),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// An ordered sequence of values sharing one element type
	List(Vec<Value>),
	/// A nested record; field order is significant
	Struct(IndexMap<String, Value>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn list(values: impl IntoIterator<Item = Value>) -> Self {
		Value::List(values.into_iter().collect())
	}

	pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
		Value::Struct(fields.into_iter().map(|(name, value)| (name.to_string(), value)).collect())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// The narrowest type describing this value.
	///
	/// Lists and structs infer their element/field types by promotion; an
	/// empty list is `List(Undefined)`.
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::List(values) => {
				let element = values
					.iter()
					.map(Value::get_type)
					.try_fold(Type::Undefined, |acc, ty| Type::promote(&acc, &ty))
					.unwrap_or(Type::Undefined);
				Type::List(Box::new(element))
			}
			Value::Struct(fields) => Type::Struct(
				fields.iter().map(|(name, value)| (name.clone(), value.get_type())).collect(),
			),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int8(v as i64)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Value::Undefined, Into::into)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("Undefined"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Utf8(v) => Display::fmt(v, f),
			Value::List(values) => {
				f.write_str("[")?;
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", value)?;
				}
				f.write_str("]")
			}
			Value::Struct(fields) => {
				f.write_str("{")?;
				for (i, (name, value)) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", name, value)?;
				}
				f.write_str("}")
			}
		}
	}
}
