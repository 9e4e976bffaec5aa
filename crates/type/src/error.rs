// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Type, Value};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("cannot cast {value} from {from} to {to}")]
	Cast {
		value: Value,
		from: Type,
		to: Type,
	},

	#[error("unknown type '{0}'")]
	UnknownType(String),
}
