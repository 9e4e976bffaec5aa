// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_type::{Type, Value};

use super::{BinaryOp, Expr, Function, UnaryOp};

pub fn col(name: impl Into<String>) -> Expr {
	Expr::Column(name.into())
}

pub fn lit(value: impl Into<Value>) -> Expr {
	Expr::Literal(value.into())
}

pub fn format(template: impl Into<String>, arguments: impl IntoIterator<Item = Expr>) -> Expr {
	Expr::Format {
		template: template.into(),
		arguments: arguments.into_iter().collect(),
	}
}

pub fn coalesce(arguments: impl IntoIterator<Item = Expr>) -> Expr {
	Expr::Call {
		function: Function::Coalesce,
		arguments: arguments.into_iter().collect(),
	}
}

pub fn concat(arguments: impl IntoIterator<Item = Expr>) -> Expr {
	Expr::Call {
		function: Function::Concat,
		arguments: arguments.into_iter().collect(),
	}
}

/// Starts a conditional: `when(c).then(a).otherwise(b)`.
pub fn when(condition: Expr) -> When {
	When {
		condition,
	}
}

pub struct When {
	condition: Expr,
}

impl When {
	pub fn then(self, then: Expr) -> WhenThen {
		WhenThen {
			condition: self.condition,
			then,
		}
	}
}

pub struct WhenThen {
	condition: Expr,
	then: Expr,
}

impl WhenThen {
	pub fn otherwise(self, otherwise: Expr) -> Expr {
		Expr::When {
			condition: Box::new(self.condition),
			then: Box::new(self.then),
			otherwise: Box::new(otherwise),
		}
	}
}

impl From<Value> for Expr {
	fn from(value: Value) -> Self {
		Expr::Literal(value)
	}
}

impl Expr {
	fn binary(self, op: BinaryOp, right: Expr) -> Expr {
		Expr::Binary {
			op,
			left: Box::new(self),
			right: Box::new(right),
		}
	}

	fn unary(self, op: UnaryOp) -> Expr {
		Expr::Unary {
			op,
			expr: Box::new(self),
		}
	}

	fn call(self, function: Function, rest: impl IntoIterator<Item = Expr>) -> Expr {
		Expr::Call {
			function,
			arguments: std::iter::once(self).chain(rest).collect(),
		}
	}

	#[allow(clippy::should_implement_trait)]
	pub fn add(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Add, right)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn sub(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Sub, right)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn mul(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Mul, right)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn div(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Div, right)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn rem(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Rem, right)
	}

	pub fn eq(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Eq, right)
	}

	pub fn neq(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Ne, right)
	}

	pub fn lt(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Lt, right)
	}

	pub fn lt_eq(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Le, right)
	}

	pub fn gt(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Gt, right)
	}

	pub fn gt_eq(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Ge, right)
	}

	pub fn and(self, right: Expr) -> Expr {
		self.binary(BinaryOp::And, right)
	}

	pub fn or(self, right: Expr) -> Expr {
		self.binary(BinaryOp::Or, right)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn not(self) -> Expr {
		self.unary(UnaryOp::Not)
	}

	#[allow(clippy::should_implement_trait)]
	pub fn neg(self) -> Expr {
		self.unary(UnaryOp::Neg)
	}

	pub fn is_null(self) -> Expr {
		self.unary(UnaryOp::IsNull)
	}

	pub fn is_not_null(self) -> Expr {
		self.unary(UnaryOp::IsNotNull)
	}

	pub fn cast(self, to: Type) -> Expr {
		Expr::Cast {
			expr: Box::new(self),
			to,
		}
	}

	pub fn fill_null(self, value: Expr) -> Expr {
		Expr::FillNull {
			expr: Box::new(self),
			value: Box::new(value),
		}
	}

	pub fn lower(self) -> Expr {
		self.call(Function::Lower, [])
	}

	pub fn upper(self) -> Expr {
		self.call(Function::Upper, [])
	}

	pub fn trim(self) -> Expr {
		self.call(Function::Trim, [])
	}

	pub fn replace(self, pattern: Expr, replacement: Expr) -> Expr {
		self.call(Function::Replace, [pattern, replacement])
	}

	pub fn field(self, name: impl Into<String>) -> Expr {
		Expr::Field {
			expr: Box::new(self),
			name: name.into(),
		}
	}
}
