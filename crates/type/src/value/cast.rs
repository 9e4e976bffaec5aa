// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

use crate::{Result, Type, TypeError, Value};

impl Value {
	/// Cast this value to `target`.
	///
	/// `Undefined` casts to every type and stays `Undefined`; casting to
	/// `Type::Undefined` leaves the value untouched.
	pub fn cast(&self, target: &Type) -> Result<Value> {
		match (self, target) {
			(Value::Undefined, _) | (_, Type::Undefined) => Ok(self.clone()),

			(Value::Boolean(v), Type::Boolean) => Ok(Value::Boolean(*v)),
			(Value::Boolean(v), Type::Int8) => Ok(Value::Int8(*v as i64)),
			(Value::Boolean(v), Type::Float8) => Ok(Value::Float8(if *v { 1.0 } else { 0.0 })),
			(Value::Boolean(v), Type::Utf8) => Ok(Value::Utf8(v.to_string())),

			(Value::Int8(v), Type::Boolean) => Ok(Value::Boolean(*v != 0)),
			(Value::Int8(v), Type::Int8) => Ok(Value::Int8(*v)),
			(Value::Int8(v), Type::Float8) => Ok(Value::Float8(*v as f64)),
			(Value::Int8(v), Type::Utf8) => Ok(Value::Utf8(v.to_string())),

			(Value::Float8(v), Type::Boolean) => Ok(Value::Boolean(*v != 0.0)),
			(Value::Float8(v), Type::Int8) => {
				if v.is_finite() && *v >= i64::MIN as f64 && *v <= i64::MAX as f64 {
					Ok(Value::Int8(v.trunc() as i64))
				} else {
					Err(self.cast_error(target))
				}
			}
			(Value::Float8(v), Type::Float8) => Ok(Value::Float8(*v)),
			(Value::Float8(v), Type::Utf8) => Ok(Value::Utf8(v.to_string())),

			(Value::Utf8(v), Type::Boolean) => match v.trim().to_lowercase().as_str() {
				"true" => Ok(Value::Boolean(true)),
				"false" => Ok(Value::Boolean(false)),
				_ => Err(self.cast_error(target)),
			},
			(Value::Utf8(v), Type::Int8) => {
				v.trim().parse::<i64>().map(Value::Int8).map_err(|_| self.cast_error(target))
			}
			(Value::Utf8(v), Type::Float8) => {
				v.trim().parse::<f64>().map(Value::Float8).map_err(|_| self.cast_error(target))
			}
			(Value::Utf8(v), Type::Utf8) => Ok(Value::Utf8(v.clone())),

			(Value::List(values), Type::List(element)) => {
				values.iter().map(|v| v.cast(element)).collect::<Result<Vec<_>>>().map(Value::List)
			}

			(Value::Struct(values), Type::Struct(fields)) => {
				let mut result = IndexMap::with_capacity(fields.len());
				for (name, ty) in fields {
					let value = match values.get(name) {
						Some(value) => value.cast(ty)?,
						None => Value::Undefined,
					};
					result.insert(name.clone(), value);
				}
				Ok(Value::Struct(result))
			}

			_ => Err(self.cast_error(target)),
		}
	}

	fn cast_error(&self, target: &Type) -> TypeError {
		TypeError::Cast {
			value: self.clone(),
			from: self.get_type(),
			to: target.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{Type, TypeError, Value};

	#[test]
	fn test_undefined_casts_to_anything() {
		assert_eq!(Value::Undefined.cast(&Type::Int8), Ok(Value::Undefined));
		assert_eq!(Value::Undefined.cast(&Type::list(Type::Utf8)), Ok(Value::Undefined));
	}

	#[test]
	fn test_cast_to_undefined_is_identity() {
		assert_eq!(Value::utf8("x").cast(&Type::Undefined), Ok(Value::utf8("x")));
	}

	#[test]
	fn test_utf8_to_int8() {
		assert_eq!(Value::utf8(" 42 ").cast(&Type::Int8), Ok(Value::int8(42)));
	}

	#[test]
	fn test_utf8_to_int8_fails() {
		let result = Value::utf8("forty-two").cast(&Type::Int8);
		assert_eq!(
			result,
			Err(TypeError::Cast {
				value: Value::utf8("forty-two"),
				from: Type::Utf8,
				to: Type::Int8,
			})
		);
	}

	#[test]
	fn test_float8_to_int8_truncates() {
		assert_eq!(Value::float8(3.9).cast(&Type::Int8), Ok(Value::int8(3)));
		assert!(Value::float8(f64::NAN).cast(&Type::Int8).is_err());
	}

	#[test]
	fn test_utf8_to_boolean() {
		assert_eq!(Value::utf8("TRUE").cast(&Type::Boolean), Ok(Value::bool(true)));
		assert!(Value::utf8("yes").cast(&Type::Boolean).is_err());
	}

	#[test]
	fn test_number_to_utf8() {
		assert_eq!(Value::int8(7).cast(&Type::Utf8), Ok(Value::utf8("7")));
		assert_eq!(Value::float8(1.5).cast(&Type::Utf8), Ok(Value::utf8("1.5")));
	}

	#[test]
	fn test_list_casts_elementwise() {
		let value = Value::list([Value::int8(1), Value::Undefined]);
		assert_eq!(
			value.cast(&Type::list(Type::Float8)),
			Ok(Value::list([Value::float8(1.0), Value::Undefined]))
		);
	}

	#[test]
	fn test_struct_casts_by_name() {
		let value = Value::record([("b", Value::int8(2)), ("extra", Value::bool(true))]);
		let target = Type::record([("a", Type::Utf8), ("b", Type::Utf8)]);
		assert_eq!(value.cast(&target), Ok(Value::record([("a", Value::Undefined), ("b", Value::utf8("2"))])));
	}

	#[test]
	fn test_list_to_scalar_fails() {
		assert!(Value::list([]).cast(&Type::Int8).is_err());
	}
}
