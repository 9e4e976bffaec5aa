// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_frame::Frame;
use tadpole_type::Type;
use tracing::{debug, instrument};

use crate::ExpandMode;

/// Struct and list columns eligible for expansion under `mode`. A non-empty
/// `filter` keeps only columns whose name contains one of its entries.
fn expandable(frame: &Frame, mode: ExpandMode, filter: &[String]) -> (Vec<String>, Vec<String>) {
	let candidates =
		frame.iter().filter(|c| filter.is_empty() || filter.iter().any(|f| c.name.contains(f.as_str())));

	let mut structs = Vec::new();
	let mut lists = Vec::new();
	for column in candidates {
		match column.get_type() {
			Type::Struct(_) if mode.unnests() => structs.push(column.name.clone()),
			Type::List(_) if mode.explodes() => lists.push(column.name.clone()),
			_ => {}
		}
	}
	(structs, lists)
}

/// Expands nested columns before derivation.
///
/// Each pass explodes every eligible list column if any remain, and otherwise
/// unnests every eligible struct column. The `*-first` modes stop after one
/// pass; the others repeat until nothing eligible is left.
#[instrument(name = "engine::normalize", level = "debug", skip(frame, filter), fields(mode = %mode))]
pub fn normalize(frame: Frame, mode: ExpandMode, filter: &[String], separator: &str) -> crate::Result<Frame> {
	if mode == ExpandMode::None {
		return Ok(frame);
	}

	let mut frame = frame;
	loop {
		let (structs, lists) = expandable(&frame, mode, filter);
		if structs.is_empty() && lists.is_empty() {
			break;
		}

		frame = if !lists.is_empty() {
			debug!(columns = ?lists, "explode");
			frame.explode(&lists)?
		} else {
			debug!(columns = ?structs, "unnest");
			frame.unnest(&structs, separator)?
		};

		if mode.is_first_only() {
			break;
		}
	}

	Ok(frame)
}
