// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::ModelError;
pub use field::{Candidate, Field, FieldDef, PLACEHOLDER, field};
pub use model::{Model, ModelBuilder};

mod error;
mod field;
mod model;

pub type Result<T> = std::result::Result<T, ModelError>;
