// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use super::Expr;

impl Expr {
	/// Direct sub-expressions, left to right.
	pub fn children(&self) -> Vec<&Expr> {
		match self {
			Expr::Column(_) | Expr::Literal(_) => vec![],
			Expr::Cast {
				expr,
				..
			}
			| Expr::Unary {
				expr,
				..
			}
			| Expr::Field {
				expr,
				..
			} => vec![&**expr],
			Expr::Binary {
				left,
				right,
				..
			} => vec![&**left, &**right],
			Expr::FillNull {
				expr,
				value,
			} => vec![&**expr, &**value],
			Expr::When {
				condition,
				then,
				otherwise,
			} => vec![&**condition, &**then, &**otherwise],
			Expr::Call {
				arguments,
				..
			}
			| Expr::Format {
				arguments,
				..
			} => arguments.iter().collect(),
		}
	}

	fn children_mut(&mut self) -> Vec<&mut Expr> {
		match self {
			Expr::Column(_) | Expr::Literal(_) => vec![],
			Expr::Cast {
				expr,
				..
			}
			| Expr::Unary {
				expr,
				..
			}
			| Expr::Field {
				expr,
				..
			} => vec![&mut **expr],
			Expr::Binary {
				left,
				right,
				..
			} => vec![&mut **left, &mut **right],
			Expr::FillNull {
				expr,
				value,
			} => vec![&mut **expr, &mut **value],
			Expr::When {
				condition,
				then,
				otherwise,
			} => vec![&mut **condition, &mut **then, &mut **otherwise],
			Expr::Call {
				arguments,
				..
			}
			| Expr::Format {
				arguments,
				..
			} => arguments.iter_mut().collect(),
		}
	}

	/// Names of every column this expression reads, found by walking the tree.
	pub fn root_names(&self) -> BTreeSet<String> {
		let mut result = BTreeSet::new();
		self.collect_roots(&mut result);
		result
	}

	fn collect_roots(&self, result: &mut BTreeSet<String>) {
		if let Expr::Column(name) = self {
			result.insert(name.clone());
		}
		for child in self.children() {
			child.collect_roots(result);
		}
	}

	/// Returns a copy where every read of column `from` reads `to` instead.
	pub fn rename_root(&self, from: &str, to: &str) -> Expr {
		let mut result = self.clone();
		result.rename_root_in_place(from, to);
		result
	}

	fn rename_root_in_place(&mut self, from: &str, to: &str) {
		if let Expr::Column(name) = self {
			if name == from {
				*name = to.to_string();
			}
		}
		for child in self.children_mut() {
			child.rename_root_in_place(from, to);
		}
	}
}
