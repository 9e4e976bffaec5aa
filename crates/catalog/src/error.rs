// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
	/// Candidates reading the placeholder can only be bound once the field
	/// has a name.
	#[error("field has no name; cannot bind its {candidates} candidate(s)")]
	UnboundField {
		candidates: usize,
	},
}
