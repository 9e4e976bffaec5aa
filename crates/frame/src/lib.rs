// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Columnar frames and the column computations evaluated over them.
//!
//! A [`Frame`] is an ordered set of equally long [`Column`]s. Frames are never
//! mutated in place by the operations in this crate: `select`,
//! `with_columns`, `explode`, `unnest` and `concat` all return a new frame.
//!
//! An [`Expr`] is a serializable computation tree producing one column. Its
//! inputs are discoverable through [`Expr::root_names`], and they can be
//! retargeted with [`Expr::rename_root`].

pub mod column;
pub mod error;
pub mod expression;
mod frame;
mod record;
mod transform;

pub use column::{Column, ColumnData, Container};
pub use error::FrameError;
pub use expression::{BinaryOp, Expr, Function, UnaryOp, coalesce, col, concat, format, lit, when};
pub use frame::{Frame, Schema};
pub use record::{value_from_json, value_to_json};
pub use tadpole_type::{Type, TypeError, Value};

pub type Result<T> = std::result::Result<T, FrameError>;
