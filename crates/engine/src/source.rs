// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fs,
	path::{Path, PathBuf},
};

use serde_json::Value as JsonValue;
use tadpole_frame::Frame;
use tracing::{debug, instrument};

use crate::DeriveError;

/// Where the rows of a dataset come from.
#[derive(Debug, Clone)]
pub enum Source {
	Records(Vec<JsonValue>),
	Frame(Frame),
	/// `.json` holds an array of records (or a single record), `.jsonl` and
	/// `.ndjson` one record per line.
	File(PathBuf),
}

impl Source {
	pub fn load(self) -> crate::Result<Frame> {
		match self {
			Source::Records(records) => Ok(Frame::from_records(&records)?),
			Source::Frame(frame) => Ok(frame),
			Source::File(path) => read_file(&path),
		}
	}
}

#[instrument(name = "engine::source::read", level = "debug")]
fn read_file(path: &Path) -> crate::Result<Frame> {
	let extension = path.extension().and_then(|e| e.to_str()).map(str::to_lowercase);
	let records = match extension.as_deref() {
		Some("json") => {
			let text = read_to_string(path)?;
			let json: JsonValue = serde_json::from_str(&text).map_err(|source| DeriveError::Json {
				path: path.to_path_buf(),
				line: source.line(),
				source,
			})?;
			match json {
				JsonValue::Array(records) => records,
				record => vec![record],
			}
		}
		Some("jsonl") | Some("ndjson") => {
			let text = read_to_string(path)?;
			let mut records = Vec::new();
			for (index, line) in text.lines().enumerate() {
				if line.trim().is_empty() {
					continue;
				}
				let record = serde_json::from_str(line).map_err(|source| DeriveError::Json {
					path: path.to_path_buf(),
					line: index + 1,
					source,
				})?;
				records.push(record);
			}
			records
		}
		_ => {
			return Err(DeriveError::UnsupportedSource {
				path: path.to_path_buf(),
			});
		}
	};

	debug!(records = records.len(), "read");
	Ok(Frame::from_records(&records)?)
}

fn read_to_string(path: &Path) -> crate::Result<String> {
	fs::read_to_string(path).map_err(|source| DeriveError::Io {
		path: path.to_path_buf(),
		source,
	})
}

impl From<Vec<JsonValue>> for Source {
	fn from(records: Vec<JsonValue>) -> Self {
		Source::Records(records)
	}
}

impl From<Frame> for Source {
	fn from(frame: Frame) -> Self {
		Source::Frame(frame)
	}
}

impl From<PathBuf> for Source {
	fn from(path: PathBuf) -> Self {
		Source::File(path)
	}
}

impl From<&Path> for Source {
	fn from(path: &Path) -> Self {
		Source::File(path.to_path_buf())
	}
}

#[cfg(test)]
mod tests {
	use std::{fs, path::PathBuf};

	use serde_json::json;
	use tadpole_type::Value;

	use super::Source;
	use crate::DeriveError;

	fn temp_file(name: &str, content: &str) -> PathBuf {
		let dir = std::env::temp_dir().join(format!("tadpole-source-{}", std::process::id()));
		fs::create_dir_all(&dir).unwrap();
		let path = dir.join(name);
		fs::write(&path, content).unwrap();
		path
	}

	#[test]
	fn test_records() {
		let frame = Source::from(vec![json!({"a": 1}), json!({"a": 2})]).load().unwrap();
		assert_eq!(frame.row_count(), 2);
	}

	#[test]
	fn test_json_array_file() {
		let path = temp_file("array.json", r#"[{"a": 1}, {"a": 2, "b": "x"}]"#);
		let frame = Source::from(path).load().unwrap();
		assert_eq!(frame.names(), vec!["a", "b"]);
		assert_eq!(frame.row(1), vec![Value::int8(2), Value::utf8("x")]);
	}

	#[test]
	fn test_jsonl_file_skips_blank_lines() {
		let path = temp_file("lines.jsonl", "{\"a\": 1}\n\n{\"a\": 2}\n");
		let frame = Source::from(path).load().unwrap();
		assert_eq!(frame.row_count(), 2);
	}

	#[test]
	fn test_jsonl_reports_line() {
		let path = temp_file("broken.ndjson", "{\"a\": 1}\n{\"a\": \n");
		let err = Source::from(path).load().unwrap_err();
		assert!(matches!(err, DeriveError::Json { line: 2, .. }));
	}

	#[test]
	fn test_unsupported_extension() {
		let err = Source::from(PathBuf::from("data.parquet")).load().unwrap_err();
		assert!(matches!(err, DeriveError::UnsupportedSource { .. }));
	}

	#[test]
	fn test_missing_file() {
		let err = Source::from(PathBuf::from("/nonexistent/tadpole/data.json")).load().unwrap_err();
		assert!(matches!(err, DeriveError::Io { .. }));
	}
}
