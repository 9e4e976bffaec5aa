// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_type::{Type, TypeError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
	#[error("column not found: '{name}' (available: {available:?})")]
	ColumnNotFound {
		name: String,
		available: Vec<String>,
	},

	#[error("column '{name}' has {actual} rows, expected {expected}")]
	LengthMismatch {
		name: String,
		expected: usize,
		actual: usize,
	},

	#[error("duplicate column '{name}'")]
	DuplicateColumn {
		name: String,
	},

	#[error("type mismatch: {left} vs {right}")]
	TypeMismatch {
		left: Type,
		right: Type,
	},

	#[error("frames to concatenate have different columns: {left:?} vs {right:?}")]
	ColumnsMismatch {
		left: Vec<String>,
		right: Vec<String>,
	},

	#[error("column '{name}' is not a list, found {ty}")]
	NotAList {
		name: String,
		ty: Type,
	},

	#[error("column '{name}' is not a struct, found {ty}")]
	NotAStruct {
		name: String,
		ty: Type,
	},

	#[error("exploded columns have different list lengths in row {row}")]
	ExplodeLengthMismatch {
		row: usize,
	},

	#[error("cannot apply '{op}' to {left} and {right}")]
	InvalidOperation {
		op: String,
		left: Type,
		right: Type,
	},

	#[error("'{function}' expects {expected} argument(s), got {actual}")]
	InvalidArguments {
		function: String,
		expected: usize,
		actual: usize,
	},

	#[error("'{function}' does not accept an argument of type {ty}")]
	InvalidArgumentType {
		function: String,
		ty: Type,
	},

	#[error("record {index} is not an object")]
	InvalidRecord {
		index: usize,
	},

	#[error(transparent)]
	Type(#[from] TypeError),
}
