// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	ops::{Deref, Index},
};

use indexmap::IndexMap;
use tadpole_type::Type;

use crate::{Column, ColumnData, FrameError};

/// Ordered mapping of column name to column type.
pub type Schema = IndexMap<String, Type>;

#[derive(Clone, Debug, Default)]
pub struct Frame {
	pub columns: Vec<Column>,
	// row count of a frame without columns
	rows: usize,
}

impl PartialEq for Frame {
	fn eq(&self, other: &Self) -> bool {
		self.columns == other.columns && self.row_count() == other.row_count()
	}
}

impl Deref for Frame {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Frame {
	type Output = Column;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

impl Frame {
	pub fn new(columns: Vec<Column>) -> crate::Result<Self> {
		let n = columns.first().map_or(0, |c| c.data.len());
		for (i, column) in columns.iter().enumerate() {
			if column.data.len() != n {
				return Err(FrameError::LengthMismatch {
					name: column.name.clone(),
					expected: n,
					actual: column.data.len(),
				});
			}
			if columns[..i].iter().any(|c| c.name == column.name) {
				return Err(FrameError::DuplicateColumn {
					name: column.name.clone(),
				});
			}
		}
		Ok(Self {
			columns,
			rows: n,
		})
	}

	/// A frame with `rows` rows and no columns.
	pub fn with_rows(rows: usize) -> Self {
		Self {
			columns: Vec::new(),
			rows,
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	/// A frame with zero rows whose columns carry the given types.
	pub fn with_schema<'a>(schema: impl IntoIterator<Item = (&'a String, &'a Type)>) -> Self {
		Self {
			columns: schema.into_iter().map(|(name, ty)| Column::typed_undefined(name, ty, 0)).collect(),
			rows: 0,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(self.rows, |c| c.data.len())
	}

	pub fn column_count(&self) -> usize {
		self.columns.len()
	}

	/// No rows and no columns at all.
	pub fn is_blank(&self) -> bool {
		self.columns.is_empty() && self.rows == 0
	}

	pub fn schema(&self) -> Schema {
		self.columns.iter().map(|c| (c.name.clone(), c.get_type())).collect()
	}

	pub fn names(&self) -> Vec<String> {
		self.columns.iter().map(|c| c.name.clone()).collect()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.columns.iter().any(|c| c.name == name)
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub(crate) fn column_or_err(&self, name: &str) -> crate::Result<&Column> {
		self.column(name).ok_or_else(|| FrameError::ColumnNotFound {
			name: name.to_string(),
			available: self.names(),
		})
	}

	/// Appends or replaces columns by name; replaced columns keep their
	/// position.
	pub(crate) fn put_columns(&mut self, columns: Vec<Column>) -> crate::Result<()> {
		let n = self.row_count();
		for column in columns {
			if column.data.len() != n {
				return Err(FrameError::LengthMismatch {
					name: column.name,
					expected: n,
					actual: column.data.len(),
				});
			}
			match self.columns.iter_mut().find(|c| c.name == column.name) {
				Some(existing) => *existing = column,
				None => self.columns.push(column),
			}
		}
		Ok(())
	}

	pub fn row(&self, index: usize) -> Vec<tadpole_type::Value> {
		self.columns.iter().map(|c| c.data.get_value(index)).collect()
	}

	pub(crate) fn row_data(&self, indices: &[usize]) -> Vec<Column> {
		self.columns.iter().map(|c| Column::new(c.name.clone(), c.data.take(indices))).collect()
	}
}

impl From<Frame> for Vec<Column> {
	fn from(frame: Frame) -> Self {
		frame.columns
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		let mut col_widths: Vec<usize> = Vec::new();
		for col in &self.columns {
			let header_width = escape_control_chars(&col.name).chars().count();
			let mut max_val_width = 0;
			for i in 0..row_count {
				max_val_width = max_val_width.max(escape_control_chars(&col.data.as_string(i)).chars().count());
			}
			col_widths.push(header_width.max(max_val_width));
		}

		for w in &mut col_widths {
			*w += 2;
		}

		let sep: String = if col_widths.is_empty() {
			"++".to_string()
		} else {
			col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
		};

		writeln!(f, "{}", sep)?;

		let header_parts: Vec<String> = self
			.columns
			.iter()
			.zip(col_widths.iter())
			.map(|(col, w)| centered(&escape_control_chars(&col.name), *w))
			.collect();
		writeln!(f, "|{}|", header_parts.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..row_count {
			let row_parts: Vec<String> = self
				.columns
				.iter()
				.zip(col_widths.iter())
				.map(|(col, w)| centered(&escape_control_chars(&col.data.as_string(row_idx)), *w))
				.collect();
			writeln!(f, "|{}|", row_parts.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}

fn centered(val: &str, w: usize) -> String {
	let pad = w.saturating_sub(val.chars().count());
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", val, "")
}

impl ColumnData {
	pub(crate) fn broadcast(value: &tadpole_type::Value, len: usize) -> crate::Result<Self> {
		ColumnData::from_values(&value.get_type(), std::iter::repeat_n(value.clone(), len))
	}
}

#[cfg(test)]
mod tests {
	use indexmap::IndexMap;
	use tadpole_type::Type;

	use crate::{Column, Frame, FrameError};

	#[test]
	fn test_new_rejects_ragged_columns() {
		let result = Frame::new(vec![Column::int8("a", [1, 2]), Column::int8("b", [1])]);
		assert_eq!(
			result,
			Err(FrameError::LengthMismatch {
				name: "b".to_string(),
				expected: 2,
				actual: 1
			})
		);
	}

	#[test]
	fn test_with_schema_has_no_rows() {
		let schema: IndexMap<String, Type> =
			[("a".to_string(), Type::Int8), ("b".to_string(), Type::Utf8)].into_iter().collect();
		let frame = Frame::with_schema(&schema);
		assert_eq!(frame.row_count(), 0);
		assert_eq!(frame.schema(), schema);
	}

	#[test]
	fn test_display() {
		let frame = Frame::new(vec![Column::int8("id", [1, 22]), Column::utf8_with_validity("name", ["a", ""], [true, false])])
			.unwrap();
		let expected = "\
+------+-------------+
|  id  |    name     |
+------+-------------+
|  1   |      a      |
|  22  |  Undefined  |
+------+-------------+
";
		assert_eq!(frame.to_string(), expected);
	}

	#[test]
	fn test_new_rejects_duplicate_names() {
		let result = Frame::new(vec![Column::int8("a", [1]), Column::utf8("b", ["x"]), Column::int8("a", [2])]);
		assert_eq!(
			result,
			Err(FrameError::DuplicateColumn {
				name: "a".to_string()
			})
		);
	}

	#[test]
	fn test_rows_without_columns() {
		let frame = Frame::with_rows(3);
		assert_eq!(frame.row_count(), 3);
		assert!(!frame.is_blank());
		assert!(Frame::empty().is_blank());
		assert_ne!(frame, Frame::empty());
	}
}
