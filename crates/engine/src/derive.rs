// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tadpole_catalog::Model;
use tadpole_frame::Frame;
use tracing::{debug, instrument, warn};

use crate::{DeriveConfig, DeriveError, normalize, plan};

/// Normalizes `frame` per `config`, then derives the model's fields from it.
#[instrument(name = "engine::derive", level = "debug", skip_all, fields(model = %model.name(), expand = %config.expand))]
pub fn derive(model: &Model, frame: Frame, config: &DeriveConfig) -> crate::Result<Frame> {
	let frame = normalize(frame, config.expand, &config.expand_columns, &config.separator)?;
	transform(model, frame, config)
}

/// Derives the model's fields from an already normalized frame.
///
/// The result has exactly the model's fields as columns, sorted by name. A
/// frame without rows and columns yields an empty frame of the model's schema
/// without evaluating anything.
#[instrument(name = "engine::transform", level = "debug", skip_all, fields(model = %model.name(), rows = frame.row_count()))]
pub fn transform(model: &Model, frame: Frame, config: &DeriveConfig) -> crate::Result<Frame> {
	if frame.row_count() == 0 && frame.is_blank() {
		debug!("empty input");
		let schema = model.schema();
		let names = model.sorted_field_names();
		return Ok(Frame::with_schema(names.iter().filter_map(|n| schema.get_key_value(n))));
	}

	let plan = plan(model, &frame.schema(), config.max_iterations)?;

	if !plan.defaults.is_empty() {
		let fields = plan.default_fields();
		if config.strict {
			return Err(DeriveError::Unresolved {
				fields,
			});
		}
		warn!(?fields, "falling back to defaults");
	}

	debug!(rounds = plan.rounds.len(), "plan ready");
	plan.execute(frame)
}
