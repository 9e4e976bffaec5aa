// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::DeriveError;

/// Default cap on derivation rounds.
pub const ITER_MAX: usize = 10;

/// How nested columns are expanded before derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpandMode {
	#[default]
	None,
	/// Flatten struct columns until none remain
	Unnest,
	/// Explode list columns until none remain
	Explode,
	/// Explode lists first, then unnest structs, until neither remains
	UnnestExplode,
	/// One level of structs only
	UnnestFirst,
	/// One level of lists only
	ExplodeFirst,
}

impl ExpandMode {
	pub fn unnests(&self) -> bool {
		matches!(self, ExpandMode::Unnest | ExpandMode::UnnestExplode | ExpandMode::UnnestFirst)
	}

	pub fn explodes(&self) -> bool {
		matches!(self, ExpandMode::Explode | ExpandMode::UnnestExplode | ExpandMode::ExplodeFirst)
	}

	/// Stops after a single expansion pass.
	pub fn is_first_only(&self) -> bool {
		matches!(self, ExpandMode::UnnestFirst | ExpandMode::ExplodeFirst)
	}
}

impl Display for ExpandMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ExpandMode::None => f.write_str("none"),
			ExpandMode::Unnest => f.write_str("unnest"),
			ExpandMode::Explode => f.write_str("explode"),
			ExpandMode::UnnestExplode => f.write_str("unnest-explode"),
			ExpandMode::UnnestFirst => f.write_str("unnest-first"),
			ExpandMode::ExplodeFirst => f.write_str("explode-first"),
		}
	}
}

impl FromStr for ExpandMode {
	type Err = DeriveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"" | "none" => Ok(ExpandMode::None),
			"unnest" => Ok(ExpandMode::Unnest),
			"explode" => Ok(ExpandMode::Explode),
			"unnest-explode" | "explode-unnest" => Ok(ExpandMode::UnnestExplode),
			"unnest-first" => Ok(ExpandMode::UnnestFirst),
			"explode-first" => Ok(ExpandMode::ExplodeFirst),
			_ => Err(DeriveError::UnknownExpandMode(s.to_string())),
		}
	}
}

/// Options of a derivation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriveConfig {
	pub expand: ExpandMode,
	/// Restricts expansion to columns whose name contains one of these; empty
	/// means every column.
	pub expand_columns: Vec<String>,
	pub separator: String,
	pub max_iterations: usize,
	/// Fail with `DeriveError::Unresolved` instead of falling back to defaults.
	pub strict: bool,
}

impl Default for DeriveConfig {
	fn default() -> Self {
		Self {
			expand: ExpandMode::None,
			expand_columns: Vec::new(),
			separator: ".".to_string(),
			max_iterations: ITER_MAX,
			strict: false,
		}
	}
}

impl DeriveConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn expand(mut self, mode: ExpandMode) -> Self {
		self.expand = mode;
		self
	}

	pub fn expand_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
		self.expand_columns = columns.into_iter().map(Into::into).collect();
		self
	}

	pub fn separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	pub fn max_iterations(mut self, max_iterations: usize) -> Self {
		self.max_iterations = max_iterations;
		self
	}

	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = DeriveConfig::default();
		assert_eq!(config.expand, ExpandMode::None);
		assert_eq!(config.separator, ".");
		assert_eq!(config.max_iterations, 10);
		assert!(!config.strict);
	}

	#[test]
	fn test_deserialize_partial() {
		let config: DeriveConfig =
			serde_json::from_str(r#"{"expand": "unnest-explode", "expand_columns": ["attributes"]}"#).unwrap();
		assert_eq!(config, DeriveConfig::new().expand(ExpandMode::UnnestExplode).expand_columns(["attributes"]));
	}

	#[test]
	fn test_expand_mode_from_str() {
		assert_eq!("Explode-First".parse::<ExpandMode>().unwrap(), ExpandMode::ExplodeFirst);
		assert!(matches!(
			"flatten".parse::<ExpandMode>(),
			Err(DeriveError::UnknownExpandMode(mode)) if mode == "flatten"
		));
	}

	#[test]
	fn test_expand_mode_display_roundtrip() {
		for mode in [
			ExpandMode::None,
			ExpandMode::Unnest,
			ExpandMode::Explode,
			ExpandMode::UnnestExplode,
			ExpandMode::UnnestFirst,
			ExpandMode::ExplodeFirst,
		] {
			assert_eq!(mode.to_string().parse::<ExpandMode>().unwrap(), mode);
		}
	}
}
