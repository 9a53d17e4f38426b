// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping error type.
//!
//! Every inconsistency found while compiling declarations is an authoring
//! error at the declaration site, so there is exactly one failure channel:
//! [`MappingError::InvalidMapping`] with a message naming the offending field
//! and class.

/// Error raised when declarations do not match the entity schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// Declaration is inconsistent with the schema or with itself.
    #[error("{0}")]
    InvalidMapping(String)
}

impl MappingError {
    /// Create an [`MappingError::InvalidMapping`] from any message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidMapping(message.into())
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidMapping(message) => message
        }
    }
}

/// Result alias used by the compilers.
pub type Result<T> = std::result::Result<T, MappingError>;
