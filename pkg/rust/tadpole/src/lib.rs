// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! # tadpole
//!
//! Declarative column derivation. A [`Model`] lists target fields, each with
//! ordered candidate computations, a type and an optional default. Given a
//! frame, tadpole picks for every field the first candidate whose inputs exist,
//! rounds at a time, until nothing changes; fields no candidate can produce
//! take their default.
//!
//! The workspace is composed of:
//!
//! - [`r#type`]: values, types, casting and promotion.
//! - [`frame`]: columnar frames and the [`Expr`] computation tree.
//! - [`catalog`]: fields and models.
//! - [`engine`]: planning, derivation, normalization and reconciliation.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use tadpole_catalog as catalog;
pub use tadpole_catalog::{Candidate, Field, FieldDef, Model, ModelBuilder, ModelError, field};
pub use tadpole_engine as engine;
pub use tadpole_engine::{
	Dataset, DeriveConfig, DeriveError, ExpandMode, Plan, Result, Source, append, derive, normalize, plan, transform,
};
pub use tadpole_frame as frame;
pub use tadpole_frame::{Column, Expr, Frame, FrameError, coalesce, col, concat, format, lit, when};
pub use tadpole_type as r#type;
pub use tadpole_type::{Type, TypeError, Value};
