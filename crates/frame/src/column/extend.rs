// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_type::Type;

use crate::{ColumnData, FrameError};

impl ColumnData {
	/// Appends the rows of `other`.
	///
	/// Both sides must carry the same type, except that an untyped
	/// `Undefined` side takes on the type of the other side.
	pub fn extend(&mut self, other: ColumnData) -> crate::Result<()> {
		match (&mut *self, other) {
			(ColumnData::Bool(l), ColumnData::Bool(r)) => l.extend(&r),
			(ColumnData::Int8(l), ColumnData::Int8(r)) => l.extend(&r),
			(ColumnData::Float8(l), ColumnData::Float8(r)) => l.extend(&r),
			(ColumnData::Utf8(l), ColumnData::Utf8(r)) => l.extend(&r),
			(
				ColumnData::List {
					element: l_element,
					container: l,
				},
				ColumnData::List {
					element: r_element,
					container: r,
				},
			) => {
				let element = Type::promote(l_element, &r_element).ok_or_else(|| FrameError::TypeMismatch {
					left: Type::list(l_element.clone()),
					right: Type::list(r_element.clone()),
				})?;
				*l_element = element;
				l.extend(&r);
			}
			(
				ColumnData::Struct {
					fields: l_fields,
					bitvec: l_bitvec,
				},
				ColumnData::Struct {
					fields: r_fields,
					bitvec: r_bitvec,
				},
			) => {
				let same_shape = l_fields.len() == r_fields.len()
					&& l_fields.iter().zip(r_fields.iter()).all(|(l, r)| l.name == r.name);
				if !same_shape {
					return Err(FrameError::TypeMismatch {
						left: Type::Struct(
							l_fields.iter().map(|c| (c.name.clone(), c.get_type())).collect(),
						),
						right: Type::Struct(
							r_fields.iter().map(|c| (c.name.clone(), c.get_type())).collect(),
						),
					});
				}
				for (l, r) in l_fields.iter_mut().zip(r_fields) {
					l.data.extend(r.data)?;
				}
				l_bitvec.extend(r_bitvec);
			}

			(ColumnData::Undefined(l), ColumnData::Undefined(r)) => *l += r,

			// Promote Undefined → typed
			(ColumnData::Undefined(l_len), typed) => {
				let mut promoted = ColumnData::typed_undefined(&typed.get_type(), *l_len);
				promoted.extend(typed)?;
				*self = promoted;
			}

			(typed, ColumnData::Undefined(r_len)) => {
				let padding = ColumnData::typed_undefined(&typed.get_type(), r_len);
				typed.extend(padding)?;
			}

			(l, r) => {
				return Err(FrameError::TypeMismatch {
					left: l.get_type(),
					right: r.get_type(),
				});
			}
		}

		Ok(())
	}
}
