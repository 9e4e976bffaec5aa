// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use tadpole_type::{Type, Value};

use super::{BinaryOp, Expr, Function, UnaryOp};
use crate::{ColumnData, Frame, FrameError};

impl Expr {
	/// Evaluates this expression against `frame`, producing one value per row.
	pub fn evaluate(&self, frame: &Frame) -> crate::Result<ColumnData> {
		let row_count = frame.row_count();
		match self {
			Expr::Column(name) => Ok(frame.column_or_err(name)?.data.clone()),

			Expr::Literal(value) => ColumnData::broadcast(value, row_count),

			Expr::Cast {
				expr,
				to,
			} => expr.evaluate(frame)?.cast(to),

			Expr::Binary {
				op,
				left,
				right,
			} => {
				let left = left.evaluate(frame)?;
				let right = right.evaluate(frame)?;
				let values = left
					.values()
					.zip(right.values())
					.map(|(l, r)| binary(*op, l, r))
					.collect::<crate::Result<Vec<_>>>()?;
				ColumnData::from_values_inferred(values)
			}

			Expr::Unary {
				op,
				expr,
			} => {
				let data = expr.evaluate(frame)?;
				let values = data.values().map(|v| unary(*op, v)).collect::<crate::Result<Vec<_>>>()?;
				ColumnData::from_values_inferred(values)
			}

			Expr::FillNull {
				expr,
				value,
			} => {
				let data = expr.evaluate(frame)?;
				let ty = data.get_type();
				let fill = value.evaluate(frame)?;
				let fill = if ty.is_undefined() {
					fill
				} else {
					fill.cast(&ty)?
				};
				let values: Vec<Value> = data
					.values()
					.zip(fill.values())
					.map(|(v, f)| if v.is_undefined() { f } else { v })
					.collect();
				if ty.is_undefined() {
					ColumnData::from_values_inferred(values)
				} else {
					ColumnData::from_values(&ty, values)
				}
			}

			Expr::When {
				condition,
				then,
				otherwise,
			} => {
				let condition = condition.evaluate(frame)?;
				let then = then.evaluate(frame)?;
				let otherwise = otherwise.evaluate(frame)?;
				let mut values = Vec::with_capacity(row_count);
				for ((c, t), o) in condition.values().zip(then.values()).zip(otherwise.values()) {
					match c {
						Value::Boolean(true) => values.push(t),
						Value::Boolean(false) | Value::Undefined => values.push(o),
						other => {
							return Err(FrameError::InvalidArgumentType {
								function: "when".to_string(),
								ty: other.get_type(),
							});
						}
					}
				}
				ColumnData::from_values_inferred(values)
			}

			Expr::Call {
				function,
				arguments,
			} => {
				let expected = function.arity();
				if expected.is_some_and(|n| n != arguments.len()) || arguments.is_empty() {
					return Err(FrameError::InvalidArguments {
						function: function.name().to_string(),
						expected: expected.unwrap_or(1),
						actual: arguments.len(),
					});
				}
				let columns = arguments.iter().map(|a| a.evaluate(frame)).collect::<crate::Result<Vec<_>>>()?;
				let mut values = Vec::with_capacity(row_count);
				for row in 0..row_count {
					let arguments: Vec<Value> = columns.iter().map(|c| c.get_value(row)).collect();
					values.push(call(*function, arguments)?);
				}
				ColumnData::from_values_inferred(values)
			}

			Expr::Format {
				template,
				arguments,
			} => {
				let placeholders = template.matches("{}").count();
				if placeholders != arguments.len() {
					return Err(FrameError::InvalidArguments {
						function: "format".to_string(),
						expected: placeholders,
						actual: arguments.len(),
					});
				}
				let columns = arguments.iter().map(|a| a.evaluate(frame)).collect::<crate::Result<Vec<_>>>()?;
				let values: Vec<Value> = (0..row_count)
					.map(|row| {
						let arguments: Vec<Value> = columns.iter().map(|c| c.get_value(row)).collect();
						interpolate(template, &arguments)
					})
					.collect();
				ColumnData::from_values(&Type::Utf8, values)
			}

			Expr::Field {
				expr,
				name,
			} => {
				let data = expr.evaluate(frame)?;
				if let ColumnData::Struct {
					fields,
					..
				} = &data
				{
					return match fields.iter().find(|c| &c.name == name) {
						Some(field) => Ok(field.data.clone()),
						None => Ok(ColumnData::Undefined(row_count)),
					};
				}
				match data {
					ColumnData::Undefined(n) => Ok(ColumnData::Undefined(n)),
					other => Err(FrameError::NotAStruct {
						name: name.clone(),
						ty: other.get_type(),
					}),
				}
			}
		}
	}
}

fn invalid(op: BinaryOp, l: &Value, r: &Value) -> FrameError {
	FrameError::InvalidOperation {
		op: op.to_string(),
		left: l.get_type(),
		right: r.get_type(),
	}
}

fn as_f64(value: &Value) -> Option<f64> {
	match value {
		Value::Int8(v) => Some(*v as f64),
		Value::Float8(v) => Some(*v),
		_ => None,
	}
}

fn binary(op: BinaryOp, l: Value, r: Value) -> crate::Result<Value> {
	if matches!(op, BinaryOp::And | BinaryOp::Or) {
		return logical(op, l, r);
	}

	if l.is_undefined() || r.is_undefined() {
		return Ok(Value::Undefined);
	}

	match op {
		BinaryOp::Eq => Ok(Value::Boolean(equals(&l, &r))),
		BinaryOp::Ne => Ok(Value::Boolean(!equals(&l, &r))),
		BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => {
			let ordering = compare(&l, &r).ok_or_else(|| invalid(op, &l, &r))?;
			Ok(Value::Boolean(match op {
				BinaryOp::Lt => ordering == Ordering::Less,
				BinaryOp::Le => ordering != Ordering::Greater,
				BinaryOp::Gt => ordering == Ordering::Greater,
				_ => ordering != Ordering::Less,
			}))
		}
		_ => arithmetic(op, l, r),
	}
}

// Int8 overflow and division by zero yield Undefined
fn arithmetic(op: BinaryOp, l: Value, r: Value) -> crate::Result<Value> {
	match (&l, &r) {
		(Value::Int8(a), Value::Int8(b)) => {
			let result = match op {
				BinaryOp::Add => a.checked_add(*b),
				BinaryOp::Sub => a.checked_sub(*b),
				BinaryOp::Mul => a.checked_mul(*b),
				BinaryOp::Rem => a.checked_rem(*b),
				_ => {
					return Ok(if *b == 0 {
						Value::Undefined
					} else {
						Value::Float8(*a as f64 / *b as f64)
					});
				}
			};
			Ok(result.map_or(Value::Undefined, Value::Int8))
		}
		(Value::Utf8(a), Value::Utf8(b)) if op == BinaryOp::Add => Ok(Value::Utf8(format!("{}{}", a, b))),
		_ => {
			let (Some(a), Some(b)) = (as_f64(&l), as_f64(&r)) else {
				return Err(invalid(op, &l, &r));
			};
			let result = match op {
				BinaryOp::Add => a + b,
				BinaryOp::Sub => a - b,
				BinaryOp::Mul => a * b,
				BinaryOp::Div | BinaryOp::Rem if b == 0.0 => return Ok(Value::Undefined),
				BinaryOp::Div => a / b,
				_ => a % b,
			};
			Ok(Value::Float8(result))
		}
	}
}

fn equals(l: &Value, r: &Value) -> bool {
	match (as_f64(l), as_f64(r)) {
		(Some(a), Some(b)) => a == b,
		_ => l == r,
	}
}

fn compare(l: &Value, r: &Value) -> Option<Ordering> {
	match (l, r) {
		(Value::Int8(a), Value::Int8(b)) => Some(a.cmp(b)),
		(Value::Utf8(a), Value::Utf8(b)) => Some(a.cmp(b)),
		(Value::Boolean(a), Value::Boolean(b)) => Some(a.cmp(b)),
		_ => as_f64(l)?.partial_cmp(&as_f64(r)?),
	}
}

fn logical(op: BinaryOp, l: Value, r: Value) -> crate::Result<Value> {
	let as_bool = |v: &Value| match v {
		Value::Boolean(b) => Ok(Some(*b)),
		Value::Undefined => Ok(None),
		_ => Err(invalid(op, &l, &r)),
	};
	let (a, b) = (as_bool(&l)?, as_bool(&r)?);
	let result = match op {
		BinaryOp::And => match (a, b) {
			(Some(false), _) | (_, Some(false)) => Some(false),
			(Some(true), Some(true)) => Some(true),
			_ => None,
		},
		_ => match (a, b) {
			(Some(true), _) | (_, Some(true)) => Some(true),
			(Some(false), Some(false)) => Some(false),
			_ => None,
		},
	};
	Ok(result.map_or(Value::Undefined, Value::Boolean))
}

fn unary(op: UnaryOp, value: Value) -> crate::Result<Value> {
	match (op, value) {
		(UnaryOp::IsNull, v) => Ok(Value::Boolean(v.is_undefined())),
		(UnaryOp::IsNotNull, v) => Ok(Value::Boolean(!v.is_undefined())),
		(_, Value::Undefined) => Ok(Value::Undefined),
		(UnaryOp::Not, Value::Boolean(v)) => Ok(Value::Boolean(!v)),
		(UnaryOp::Neg, Value::Int8(v)) => Ok(v.checked_neg().map_or(Value::Undefined, Value::Int8)),
		(UnaryOp::Neg, Value::Float8(v)) => Ok(Value::Float8(-v)),
		(op, v) => Err(FrameError::InvalidArgumentType {
			function: op.to_string(),
			ty: v.get_type(),
		}),
	}
}

fn text(function: Function, value: &Value) -> crate::Result<Option<String>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Utf8(v) => Ok(Some(v.clone())),
		Value::List(_) | Value::Struct(_) => Err(FrameError::InvalidArgumentType {
			function: function.name().to_string(),
			ty: value.get_type(),
		}),
		other => Ok(Some(other.to_string())),
	}
}

fn call(function: Function, arguments: Vec<Value>) -> crate::Result<Value> {
	match function {
		Function::Coalesce => Ok(arguments.into_iter().find(|v| !v.is_undefined()).unwrap_or(Value::Undefined)),
		Function::Concat => {
			let mut result = String::new();
			for argument in &arguments {
				match text(function, argument)? {
					Some(part) => result.push_str(&part),
					None => return Ok(Value::Undefined),
				}
			}
			Ok(Value::Utf8(result))
		}
		Function::Lower | Function::Upper | Function::Trim => {
			let Some(v) = arguments.first().map(|a| text(function, a)).transpose()?.flatten() else {
				return Ok(Value::Undefined);
			};
			Ok(Value::Utf8(match function {
				Function::Lower => v.to_lowercase(),
				Function::Upper => v.to_uppercase(),
				_ => v.trim().to_string(),
			}))
		}
		Function::Replace => {
			let parts = arguments.iter().map(|a| text(function, a)).collect::<crate::Result<Vec<_>>>()?;
			match parts.as_slice() {
				[Some(v), Some(pattern), Some(replacement)] => Ok(Value::Utf8(v.replace(pattern, replacement))),
				_ => Ok(Value::Undefined),
			}
		}
	}
}

fn interpolate(template: &str, arguments: &[Value]) -> Value {
	if arguments.iter().any(Value::is_undefined) {
		return Value::Undefined;
	}
	let mut result = String::with_capacity(template.len());
	let mut pieces = template.split("{}");
	if let Some(first) = pieces.next() {
		result.push_str(first);
	}
	for (piece, argument) in pieces.zip(arguments) {
		result.push_str(&argument.to_string());
		result.push_str(piece);
	}
	Value::Utf8(result)
}
