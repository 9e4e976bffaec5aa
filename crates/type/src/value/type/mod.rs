// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::TypeError;

mod promote;

/// All possible column data types
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// Value is not defined; also stands in for "type not known yet"
	Undefined,
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A list whose elements all share the inner type
	List(Box<Type>),
	/// A nested record with ordered, named fields
	Struct(Vec<(String, Type)>),
}

impl Type {
	pub fn list(element: Type) -> Self {
		Type::List(Box::new(element))
	}

	pub fn record<'a>(fields: impl IntoIterator<Item = (&'a str, Type)>) -> Self {
		Type::Struct(fields.into_iter().map(|(name, ty)| (name.to_string(), ty)).collect())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int8 | Type::Float8)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_list(&self) -> bool {
		matches!(self, Type::List(_))
	}

	pub fn is_struct(&self) -> bool {
		matches!(self, Type::Struct(_))
	}

	/// Element type of a list, `None` for every other type.
	pub fn element(&self) -> Option<&Type> {
		match self {
			Type::List(element) => Some(element),
			_ => None,
		}
	}

	/// Field types of a struct, `None` for every other type.
	pub fn fields(&self) -> Option<&[(String, Type)]> {
		match self {
			Type::Struct(fields) => Some(fields),
			_ => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::List(element) => write!(f, "List<{}>", element),
			Type::Struct(fields) => {
				f.write_str("Struct{")?;
				for (i, (name, ty)) in fields.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", name, ty)?;
				}
				f.write_str("}")
			}
		}
	}
}

impl FromStr for Type {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let upper = trimmed.to_uppercase();

		if let Some(inner) = upper.strip_prefix("LIST<").and_then(|rest| rest.strip_suffix('>')) {
			return Ok(Type::list(inner.parse()?));
		}

		match upper.as_str() {
			"BOOL" | "BOOLEAN" => Ok(Type::Boolean),
			"INT" | "INT8" => Ok(Type::Int8),
			"FLOAT" | "FLOAT8" => Ok(Type::Float8),
			"UTF8" | "TEXT" | "STR" => Ok(Type::Utf8),
			"UNDEFINED" | "UNKNOWN" => Ok(Type::Undefined),
			_ => Err(TypeError::UnknownType(trimmed.to_string())),
		}
	}
}
