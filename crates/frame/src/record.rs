// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde_json::{Map, Number, Value as JsonValue};
use tadpole_type::Value;

use crate::{Column, ColumnData, Frame, FrameError};

/// Converts one JSON value; integers that fit become `Int8`, every other
/// number becomes `Float8`.
pub fn value_from_json(json: &JsonValue) -> Value {
	match json {
		JsonValue::Null => Value::Undefined,
		JsonValue::Bool(v) => Value::Boolean(*v),
		JsonValue::Number(n) => match n.as_i64() {
			Some(v) => Value::Int8(v),
			None => n.as_f64().map_or(Value::Undefined, Value::Float8),
		},
		JsonValue::String(v) => Value::Utf8(v.clone()),
		JsonValue::Array(values) => Value::List(values.iter().map(value_from_json).collect()),
		JsonValue::Object(fields) => {
			Value::Struct(fields.iter().map(|(k, v)| (k.clone(), value_from_json(v))).collect())
		}
	}
}

pub fn value_to_json(value: &Value) -> JsonValue {
	match value {
		Value::Undefined => JsonValue::Null,
		Value::Boolean(v) => JsonValue::Bool(*v),
		Value::Int8(v) => JsonValue::Number((*v).into()),
		Value::Float8(v) => Number::from_f64(*v).map_or(JsonValue::Null, JsonValue::Number),
		Value::Utf8(v) => JsonValue::String(v.clone()),
		Value::List(values) => JsonValue::Array(values.iter().map(value_to_json).collect()),
		Value::Struct(fields) => {
			JsonValue::Object(fields.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect::<Map<_, _>>())
		}
	}
}

impl Frame {
	/// Builds a frame from JSON objects. Columns appear in first-seen key
	/// order; a key missing from a record is undefined in that row. Records
	/// without any keys still count as rows.
	pub fn from_records(records: &[JsonValue]) -> crate::Result<Frame> {
		let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();

		for (index, record) in records.iter().enumerate() {
			let JsonValue::Object(fields) = record else {
				return Err(FrameError::InvalidRecord {
					index,
				});
			};
			for (name, value) in fields {
				let values = columns.entry(name.clone()).or_insert_with(|| vec![Value::Undefined; index]);
				values.push(value_from_json(value));
			}
			for values in columns.values_mut() {
				if values.len() < index + 1 {
					values.push(Value::Undefined);
				}
			}
		}

		let columns = columns
			.into_iter()
			.map(|(name, values)| Ok(Column::new(name, ColumnData::from_values_inferred(values)?)))
			.collect::<crate::Result<Vec<_>>>()?;
		if columns.is_empty() {
			return Ok(Frame::with_rows(records.len()));
		}
		Frame::new(columns)
	}

	/// One JSON object per row.
	pub fn to_records(&self) -> Vec<JsonValue> {
		(0..self.row_count())
			.map(|row| {
				JsonValue::Object(
					self.columns
						.iter()
						.map(|c| (c.name.clone(), value_to_json(&c.data.get_value(row))))
						.collect::<Map<_, _>>(),
				)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use tadpole_type::{Type, Value};

	use crate::{Frame, FrameError};

	#[test]
	fn test_from_records_infers_types() {
		let frame = Frame::from_records(&[
			json!({"id": 1, "score": 1, "tags": ["a"], "user": {"name": "ada"}}),
			json!({"id": 2, "score": 2.5, "tags": [], "user": null}),
		])
		.unwrap();

		let schema = frame.schema();
		assert_eq!(schema["id"], Type::Int8);
		assert_eq!(schema["score"], Type::Float8);
		assert_eq!(schema["tags"], Type::list(Type::Utf8));
		assert_eq!(schema["user"], Type::record([("name", Type::Utf8)]));
		assert_eq!(frame.row(1)[3], Value::Undefined);
	}

	#[test]
	fn test_from_records_missing_keys() {
		let frame = Frame::from_records(&[json!({"a": 1}), json!({"b": "x"}), json!({"a": 3})]).unwrap();

		assert_eq!(frame.names(), vec!["a", "b"]);
		assert_eq!(frame.row_count(), 3);
		assert_eq!(frame.row(1), vec![Value::Undefined, Value::utf8("x")]);
		assert_eq!(frame.row(2), vec![Value::int8(3), Value::Undefined]);
	}

	#[test]
	fn test_from_records_rejects_non_objects() {
		assert_eq!(
			Frame::from_records(&[json!({"a": 1}), json!(2)]),
			Err(FrameError::InvalidRecord {
				index: 1
			})
		);
	}

	#[test]
	fn test_to_records() {
		let frame = Frame::from_records(&[json!({"a": 1, "b": null})]).unwrap();
		assert_eq!(frame.to_records(), vec![json!({"a": 1, "b": null})]);
	}

	#[test]
	fn test_from_records_without_keys_keeps_rows() {
		let frame = Frame::from_records(&[json!({}), json!({})]).unwrap();
		assert_eq!(frame.row_count(), 2);
		assert_eq!(frame.column_count(), 0);
		assert!(!frame.is_blank());
		assert_eq!(frame.to_records(), vec![json!({}), json!({})]);
	}
}
