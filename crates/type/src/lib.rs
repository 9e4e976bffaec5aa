// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Scalar and nested values plus the type tags used to describe columns.

pub mod error;
pub mod value;

pub use error::TypeError;
pub use value::{Type, Value};

pub type Result<T> = std::result::Result<T, TypeError>;
