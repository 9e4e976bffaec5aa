// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_type::Type;
use tracing::instrument;

use crate::{Column, ColumnData, Expr, Frame, FrameError};

mod explode;
mod unnest;

impl Frame {
	/// Keeps only the named columns, in the given order.
	pub fn select<S: AsRef<str>>(&self, names: &[S]) -> crate::Result<Frame> {
		let columns = names
			.iter()
			.map(|name| self.column_or_err(name.as_ref()).cloned())
			.collect::<crate::Result<Vec<_>>>()?;
		if columns.is_empty() {
			return Ok(Frame::with_rows(self.row_count()));
		}
		Frame::new(columns)
	}

	/// Evaluates every expression against this frame and adds the results as
	/// new columns, replacing same-named ones in place.
	///
	/// All expressions see the input frame; none of them observes a column
	/// produced by another expression in the same call.
	#[instrument(name = "frame::with_columns", level = "trace", skip_all, fields(count = exprs.len()))]
	pub fn with_columns(&self, exprs: Vec<(String, Expr)>) -> crate::Result<Frame> {
		let columns = exprs
			.into_iter()
			.map(|(name, expr)| Ok(Column::new(name, expr.evaluate(self)?)))
			.collect::<crate::Result<Vec<_>>>()?;

		let mut result = self.clone();
		result.put_columns(columns)?;
		Ok(result)
	}

	/// Stacks frames vertically. All frames must have the same column names in
	/// the same order; column types are promoted to their common supertype.
	pub fn concat(frames: Vec<Frame>) -> crate::Result<Frame> {
		let mut frames = frames.into_iter();
		let Some(first) = frames.next() else {
			return Ok(Frame::empty());
		};
		let rest: Vec<Frame> = frames.collect();

		let names = first.names();
		if names.is_empty() && rest.iter().all(|f| f.column_count() == 0) {
			return Ok(Frame::with_rows(first.row_count() + rest.iter().map(Frame::row_count).sum::<usize>()));
		}
		let mut types: Vec<Type> = first.columns.iter().map(Column::get_type).collect();
		for frame in &rest {
			if frame.names() != names {
				return Err(FrameError::ColumnsMismatch {
					left: names,
					right: frame.names(),
				});
			}
			for (ty, column) in types.iter_mut().zip(frame.columns.iter()) {
				let right = column.get_type();
				*ty = Type::promote(ty, &right).ok_or_else(|| FrameError::TypeMismatch {
					left: ty.clone(),
					right,
				})?;
			}
		}

		let mut columns = first
			.columns
			.into_iter()
			.zip(types.iter())
			.map(|(c, ty)| Ok(Column::new(c.name, c.data.cast(ty)?)))
			.collect::<crate::Result<Vec<_>>>()?;

		for frame in rest {
			for ((column, other), ty) in columns.iter_mut().zip(frame.columns).zip(types.iter()) {
				column.data.extend(other.data.cast(ty)?)?;
			}
		}

		Frame::new(columns)
	}

	/// Adds a column of undefined values carrying type `ty`.
	pub fn with_typed_undefined(&self, name: &str, ty: &Type) -> crate::Result<Frame> {
		let mut result = self.clone();
		result.put_columns(vec![Column::new(name, ColumnData::typed_undefined(ty, self.row_count()))])?;
		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use tadpole_type::{Type, Value};

	use crate::{Column, Frame, FrameError, col, lit};

	fn frame() -> Frame {
		Frame::new(vec![Column::int8("a", [1, 2]), Column::utf8("b", ["x", "y"])]).unwrap()
	}

	#[test]
	fn test_select_reorders() {
		let result = frame().select(&["b", "a"]).unwrap();
		assert_eq!(result.names(), vec!["b", "a"]);
	}

	#[test]
	fn test_select_missing() {
		let err = frame().select(&["c"]).unwrap_err();
		assert_eq!(
			err,
			FrameError::ColumnNotFound {
				name: "c".to_string(),
				available: vec!["a".to_string(), "b".to_string()]
			}
		);
	}

	#[test]
	fn test_with_columns_is_a_batch() {
		let result = frame()
			.with_columns(vec![
				("a".to_string(), col("a").mul(lit(10))),
				("c".to_string(), col("a").add(lit(1))),
			])
			.unwrap();

		assert_eq!(result.names(), vec!["a", "b", "c"]);
		assert_eq!(result.column("a").unwrap().data.values().collect::<Vec<_>>(), vec![
			Value::int8(10),
			Value::int8(20)
		]);
		// `c` reads the input `a`, not the replaced one
		assert_eq!(result.column("c").unwrap().data.values().collect::<Vec<_>>(), vec![
			Value::int8(2),
			Value::int8(3)
		]);
	}

	#[test]
	fn test_with_columns_does_not_touch_input() {
		let input = frame();
		let _ = input.with_columns(vec![("z".to_string(), lit(true))]).unwrap();
		assert_eq!(input.names(), vec!["a", "b"]);
	}

	#[test]
	fn test_concat_promotes() {
		let top = Frame::new(vec![Column::int8("n", [1])]).unwrap();
		let bottom = Frame::new(vec![Column::float8("n", [0.5])]).unwrap();
		let result = Frame::concat(vec![top, bottom]).unwrap();
		assert_eq!(result.schema()["n"], Type::Float8);
		assert_eq!(result.row_count(), 2);
	}

	#[test]
	fn test_concat_undefined_takes_other_type() {
		let top = Frame::new(vec![Column::undefined("n", 2)]).unwrap();
		let bottom = Frame::new(vec![Column::utf8("n", ["z"])]).unwrap();
		let result = Frame::concat(vec![top, bottom]).unwrap();
		assert_eq!(result.schema()["n"], Type::Utf8);
		assert_eq!(result.column("n").unwrap().data.values().collect::<Vec<_>>(), vec![
			Value::Undefined,
			Value::Undefined,
			Value::utf8("z")
		]);
	}

	#[test]
	fn test_concat_rejects_different_columns() {
		let top = Frame::new(vec![Column::int8("n", [1])]).unwrap();
		let bottom = Frame::new(vec![Column::int8("m", [1])]).unwrap();
		assert!(matches!(Frame::concat(vec![top, bottom]), Err(FrameError::ColumnsMismatch { .. })));
	}

	#[test]
	fn test_concat_rejects_incompatible_types() {
		let top = Frame::new(vec![Column::int8("n", [1])]).unwrap();
		let bottom = Frame::new(vec![Column::utf8("n", ["1"])]).unwrap();
		assert_eq!(
			Frame::concat(vec![top, bottom]),
			Err(FrameError::TypeMismatch {
				left: Type::Int8,
				right: Type::Utf8
			})
		);
	}

	#[test]
	fn test_concat_rows_without_columns() {
		let result = Frame::concat(vec![Frame::with_rows(2), Frame::with_rows(1)]).unwrap();
		assert_eq!(result.row_count(), 3);
		assert_eq!(result.column_count(), 0);
	}

	#[test]
	fn test_with_columns_on_rows_without_columns() {
		let result = Frame::with_rows(2).with_columns(vec![("n".to_string(), lit(1))]).unwrap();
		assert_eq!(result.column("n").unwrap().data.values().collect::<Vec<_>>(), vec![
			Value::int8(1),
			Value::int8(1)
		]);
	}
}
