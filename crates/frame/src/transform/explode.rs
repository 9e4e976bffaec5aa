// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_type::{Type, Value};
use tracing::instrument;

use crate::{Column, ColumnData, Frame, FrameError};

impl Frame {
	/// Turns every element of the given list columns into its own row,
	/// repeating the values of all other columns.
	///
	/// An undefined or empty list produces a single row holding an undefined
	/// element. Lists exploded together must have equal lengths in each row.
	#[instrument(name = "frame::explode", level = "trace", skip(self))]
	pub fn explode(&self, columns: &[String]) -> crate::Result<Frame> {
		if columns.is_empty() {
			return Ok(self.clone());
		}

		let mut lists = Vec::with_capacity(columns.len());
		for name in columns {
			let column = self.column_or_err(name)?;
			match &column.data {
				ColumnData::List {
					element,
					container,
				} => lists.push((name, element.clone(), container)),
				other => {
					return Err(FrameError::NotAList {
						name: name.clone(),
						ty: other.get_type(),
					});
				}
			}
		}

		let mut indices = Vec::new();
		let mut exploded: Vec<Vec<Value>> = vec![Vec::new(); lists.len()];

		for row in 0..self.row_count() {
			let mut row_len = None;
			for (_, _, container) in &lists {
				let len = container.get(row).map_or(0, Vec::len);
				match row_len {
					None => row_len = Some(len),
					Some(expected) if expected != len => {
						return Err(FrameError::ExplodeLengthMismatch {
							row,
						});
					}
					Some(_) => {}
				}
			}

			let len = row_len.unwrap_or(0);
			if len == 0 {
				indices.push(row);
				for values in exploded.iter_mut() {
					values.push(Value::Undefined);
				}
				continue;
			}

			indices.extend(std::iter::repeat_n(row, len));
			for ((_, _, container), values) in lists.iter().zip(exploded.iter_mut()) {
				if let Some(list) = container.get(row) {
					values.extend(list.iter().cloned());
				}
			}
		}

		let mut replacements = Vec::with_capacity(lists.len());
		for ((name, element, _), values) in lists.into_iter().zip(exploded) {
			replacements.push(Column::new(name.clone(), element_data(&element, values)?));
		}

		let mut result = Frame::new(self.row_data(&indices))?;
		result.put_columns(replacements)?;
		Ok(result)
	}
}

fn element_data(element: &Type, values: Vec<Value>) -> crate::Result<ColumnData> {
	if element.is_undefined() {
		ColumnData::from_values_inferred(values)
	} else {
		ColumnData::from_values(element, values)
	}
}
