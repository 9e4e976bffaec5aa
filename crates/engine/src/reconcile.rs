// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_frame::Frame;
use tracing::instrument;

/// Concatenates two frames with possibly different columns.
///
/// Each side is padded with undefined columns, typed as on the other side, for
/// the names it lacks. The result has `top`'s columns in order followed by the
/// columns only `bottom` has; a column present on both sides takes the common
/// supertype of both.
#[instrument(name = "engine::append", level = "debug", skip_all, fields(top = top.row_count(), bottom = bottom.row_count()))]
pub fn append(top: Frame, bottom: Frame) -> crate::Result<Frame> {
	let top_schema = top.schema();
	let bottom_schema = bottom.schema();

	let mut names: Vec<String> = top_schema.keys().cloned().collect();
	names.extend(bottom_schema.keys().filter(|name| !top_schema.contains_key(*name)).cloned());

	let mut top = top;
	for (name, ty) in &bottom_schema {
		if !top_schema.contains_key(name) {
			top = top.with_typed_undefined(name, ty)?;
		}
	}

	let mut bottom = bottom;
	for (name, ty) in &top_schema {
		if !bottom_schema.contains_key(name) {
			bottom = bottom.with_typed_undefined(name, ty)?;
		}
	}

	Ok(Frame::concat(vec![top.select(&names)?, bottom.select(&names)?])?)
}
