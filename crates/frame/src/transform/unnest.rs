// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::instrument;

use crate::{Column, ColumnData, Frame, FrameError};

impl Frame {
	/// Replaces each named struct column, in place, by one column per field
	/// named `<column><separator><field>`.
	#[instrument(name = "frame::unnest", level = "trace", skip(self))]
	pub fn unnest(&self, columns: &[String], separator: &str) -> crate::Result<Frame> {
		for name in columns {
			let column = self.column_or_err(name)?;
			if !matches!(column.data, ColumnData::Struct { .. }) {
				return Err(FrameError::NotAStruct {
					name: name.clone(),
					ty: column.get_type(),
				});
			}
		}

		let mut result = Vec::with_capacity(self.columns.len());
		for column in &self.columns {
			match &column.data {
				ColumnData::Struct {
					fields,
					..
				} if columns.contains(&column.name) => {
					for field in fields {
						let name = format!("{}{}{}", column.name, separator, field.name);
						result.push(Column::new(name, field.data.clone()));
					}
				}
				_ => result.push(column.clone()),
			}
		}

		Frame::new(result)
	}
}

#[cfg(test)]
mod tests {
	use tadpole_type::{Type, Value};

	use crate::{Column, ColumnData, Frame, FrameError};

	#[test]
	fn test_unnest_in_place_with_prefix() {
		let user = ColumnData::from_values(
			&Type::record([("name", Type::Utf8), ("age", Type::Int8)]),
			vec![Value::record([("name", Value::utf8("ada")), ("age", Value::int8(36))]), Value::Undefined],
		)
		.unwrap();
		let frame =
			Frame::new(vec![Column::int8("id", [1, 2]), Column::new("user", user), Column::bool("ok", [true, false])])
				.unwrap();

		let result = frame.unnest(&["user".to_string()], ".").unwrap();

		assert_eq!(result.names(), vec!["id", "user.name", "user.age", "ok"]);
		assert_eq!(result.row(0), vec![Value::int8(1), Value::utf8("ada"), Value::int8(36), Value::bool(true)]);
		assert_eq!(result.row(1), vec![Value::int8(2), Value::Undefined, Value::Undefined, Value::bool(false)]);
	}

	#[test]
	fn test_unnest_custom_separator() {
		let meta = ColumnData::from_values(&Type::record([("k", Type::Utf8)]), vec![Value::record([(
			"k",
			Value::utf8("v"),
		)])])
		.unwrap();
		let frame = Frame::new(vec![Column::new("meta", meta)]).unwrap();

		let result = frame.unnest(&["meta".to_string()], "__").unwrap();
		assert_eq!(result.names(), vec!["meta__k"]);
	}

	#[test]
	fn test_unnest_not_a_struct() {
		let frame = Frame::new(vec![Column::int8("id", [1])]).unwrap();
		assert!(matches!(frame.unnest(&["id".to_string()], "."), Err(FrameError::NotAStruct { .. })));
	}

	#[test]
	fn test_unnest_name_collision() {
		let a = ColumnData::from_values(&Type::record([("b", Type::Int8)]), vec![Value::record([(
			"b",
			Value::int8(1),
		)])])
		.unwrap();
		let frame = Frame::new(vec![Column::new("a", a), Column::int8("a.b", [2])]).unwrap();

		assert_eq!(
			frame.unnest(&["a".to_string()], "."),
			Err(FrameError::DuplicateColumn {
				name: "a.b".to_string()
			})
		);
		assert_eq!(frame.unnest(&["a".to_string()], "_").unwrap().names(), vec!["a_b", "a.b"]);
	}
}
