// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Type;

impl Type {
	/// The narrowest type both `l` and `r` can be cast to without losing
	/// definedness, or `None` when the two do not share a supertype.
	pub fn promote(l: &Type, r: &Type) -> Option<Type> {
		match (l, r) {
			(l, r) if l == r => Some(l.clone()),
			(Type::Undefined, other) | (other, Type::Undefined) => Some(other.clone()),
			(Type::Int8, Type::Float8) | (Type::Float8, Type::Int8) => Some(Type::Float8),
			(Type::List(l), Type::List(r)) => Type::promote(l, r).map(Type::list),
			(Type::Struct(l), Type::Struct(r)) => {
				let mut fields = l.clone();
				for (name, ty) in r {
					match fields.iter_mut().find(|(existing, _)| existing == name) {
						Some((_, existing)) => *existing = Type::promote(existing, ty)?,
						None => fields.push((name.clone(), ty.clone())),
					}
				}
				Some(Type::Struct(fields))
			}
			_ => None,
		}
	}
}
