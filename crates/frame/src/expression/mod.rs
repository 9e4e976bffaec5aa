// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tadpole_type::{Type, Value};

mod builder;
mod eval;
mod meta;

pub use builder::{When, WhenThen, coalesce, col, concat, format, lit, when};

/// A computation producing one column from the columns of a frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
	/// Reference to a column by name
	Column(String),

	/// Literal constant, broadcast to the frame's row count
	Literal(Value),

	Cast {
		expr: Box<Expr>,
		to: Type,
	},

	Binary {
		op: BinaryOp,
		left: Box<Expr>,
		right: Box<Expr>,
	},

	Unary {
		op: UnaryOp,
		expr: Box<Expr>,
	},

	/// Replaces undefined values of `expr` with `value`
	FillNull {
		expr: Box<Expr>,
		value: Box<Expr>,
	},

	When {
		condition: Box<Expr>,
		then: Box<Expr>,
		otherwise: Box<Expr>,
	},

	Call {
		function: Function,
		arguments: Vec<Expr>,
	},

	/// String interpolation; every `{}` in `template` takes the next argument
	Format {
		template: String,
		arguments: Vec<Expr>,
	},

	/// Field access on a struct column
	Field {
		expr: Box<Expr>,
		name: String,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
	// Arithmetic
	Add,
	Sub,
	Mul,
	Div,
	Rem,

	// Comparison
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,

	// Logical
	And,
	Or,
}

impl Display for BinaryOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			BinaryOp::Add => write!(f, "+"),
			BinaryOp::Sub => write!(f, "-"),
			BinaryOp::Mul => write!(f, "*"),
			BinaryOp::Div => write!(f, "/"),
			BinaryOp::Rem => write!(f, "%"),
			BinaryOp::Eq => write!(f, "=="),
			BinaryOp::Ne => write!(f, "!="),
			BinaryOp::Lt => write!(f, "<"),
			BinaryOp::Le => write!(f, "<="),
			BinaryOp::Gt => write!(f, ">"),
			BinaryOp::Ge => write!(f, ">="),
			BinaryOp::And => write!(f, "and"),
			BinaryOp::Or => write!(f, "or"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
	Not,
	Neg,
	IsNull,
	IsNotNull,
}

impl Display for UnaryOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			UnaryOp::Not => write!(f, "not"),
			UnaryOp::Neg => write!(f, "-"),
			UnaryOp::IsNull => write!(f, "is_null"),
			UnaryOp::IsNotNull => write!(f, "is_not_null"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Function {
	/// Joins all arguments as text
	Concat,
	Lower,
	Upper,
	Trim,
	/// `replace(text, pattern, replacement)`, all occurrences
	Replace,
	/// First defined argument
	Coalesce,
}

impl Function {
	pub fn name(&self) -> &'static str {
		match self {
			Function::Concat => "concat",
			Function::Lower => "lower",
			Function::Upper => "upper",
			Function::Trim => "trim",
			Function::Replace => "replace",
			Function::Coalesce => "coalesce",
		}
	}

	/// Exact arity, `None` for variadic functions.
	pub(crate) fn arity(&self) -> Option<usize> {
		match self {
			Function::Lower | Function::Upper | Function::Trim => Some(1),
			Function::Replace => Some(3),
			Function::Concat | Function::Coalesce => None,
		}
	}
}

impl Display for Function {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

fn write_arguments(f: &mut Formatter<'_>, arguments: &[Expr]) -> fmt::Result {
	for (i, argument) in arguments.iter().enumerate() {
		if i > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{}", argument)?;
	}
	Ok(())
}

impl Display for Expr {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Expr::Column(name) => write!(f, "col(\"{}\")", name),
			Expr::Literal(Value::Utf8(v)) => write!(f, "\"{}\"", v),
			Expr::Literal(value) => write!(f, "{}", value),
			Expr::Cast {
				expr,
				to,
			} => write!(f, "{}.cast({})", expr, to),
			Expr::Binary {
				op,
				left,
				right,
			} => write!(f, "({} {} {})", left, op, right),
			Expr::Unary {
				op: UnaryOp::Not,
				expr,
			} => write!(f, "not {}", expr),
			Expr::Unary {
				op: UnaryOp::Neg,
				expr,
			} => write!(f, "-{}", expr),
			Expr::Unary {
				op,
				expr,
			} => write!(f, "{}.{}()", expr, op),
			Expr::FillNull {
				expr,
				value,
			} => write!(f, "{}.fill_null({})", expr, value),
			Expr::When {
				condition,
				then,
				otherwise,
			} => write!(f, "when({}).then({}).otherwise({})", condition, then, otherwise),
			Expr::Call {
				function,
				arguments,
			} => {
				write!(f, "{}(", function)?;
				write_arguments(f, arguments)?;
				f.write_str(")")
			}
			Expr::Format {
				template,
				arguments,
			} => {
				write!(f, "format(\"{}\"", template)?;
				for argument in arguments {
					write!(f, ", {}", argument)?;
				}
				f.write_str(")")
			}
			Expr::Field {
				expr,
				name,
			} => write!(f, "{}.field(\"{}\")", expr, name),
		}
	}
}

#[cfg(test)]
mod tests {
	use tadpole_type::Type;

	use crate::{col, format, lit, when};

	#[test]
	fn test_display() {
		let expr = col("a").add(lit(1)).cast(Type::Float8).fill_null(lit(0.5));
		assert_eq!(expr.to_string(), "(col(\"a\") + 1).cast(Float8).fill_null(0.5)");
	}

	#[test]
	fn test_display_when_and_format() {
		let expr = when(col("x").is_null()).then(lit("none")).otherwise(format("{}-{}", [col("x"), col("y")]));
		assert_eq!(
			expr.to_string(),
			"when(col(\"x\").is_null()).then(\"none\").otherwise(format(\"{}-{}\", col(\"x\"), col(\"y\")))"
		);
	}

	#[test]
	fn test_serde_roundtrip() {
		let expr = col("user").field("name").lower().eq(lit("ada"));
		let json = serde_json::to_string(&expr).unwrap();
		let back: crate::Expr = serde_json::from_str(&json).unwrap();
		assert_eq!(back, expr);
	}
}
