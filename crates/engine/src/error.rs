// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::path::PathBuf;

use tadpole_catalog::ModelError;
use tadpole_frame::FrameError;

#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
	/// The fixed point did not settle within the round cap.
	#[error("failed to derive fields {unresolved:?}: exceeded maximum of {max_iterations} derivation iterations")]
	Timeout {
		unresolved: Vec<String>,
		max_iterations: usize,
	},

	/// Strict mode only: fields no candidate could produce.
	#[error("no candidate could derive fields {fields:?}")]
	Unresolved {
		fields: Vec<String>,
	},

	#[error("unsupported source '{}': expected a .json, .jsonl or .ndjson file", path.display())]
	UnsupportedSource {
		path: PathBuf,
	},

	#[error("unknown expand mode '{0}'")]
	UnknownExpandMode(String),

	#[error("failed to read '{}'", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid JSON in '{}' at line {line}", path.display())]
	Json {
		path: PathBuf,
		line: usize,
		#[source]
		source: serde_json::Error,
	},

	#[error(transparent)]
	Frame(#[from] FrameError),

	#[error(transparent)]
	Model(#[from] ModelError),
}
