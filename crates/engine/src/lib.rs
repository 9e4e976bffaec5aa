// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Derivation of a model's fields from a frame.
//!
//! [`plan`] decides, at schema level, which candidate produces each field and
//! in which round; [`Plan::execute`] applies the rounds to a frame. [`derive`]
//! runs both after optional [`normalize`]-ation, and [`append`] concatenates
//! frames with different columns.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use config::{DeriveConfig, ExpandMode, ITER_MAX};
pub use dataset::Dataset;
pub use derive::{derive, transform};
pub use error::DeriveError;
pub use normalize::normalize;
pub use plan::{Fallback, Plan, Round, Selection, plan};
pub use reconcile::append;
pub use source::Source;

mod config;
mod dataset;
mod derive;
mod error;
mod normalize;
mod plan;
mod reconcile;
mod source;

pub type Result<T> = std::result::Result<T, DeriveError>;
