// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Soft-deleteable declaration value.

use darling::FromMeta;

/// Returns the default deletion timestamp field.
///
/// Used by darling for the `field_name` attribute default.
pub fn default_field_name() -> String {
    "deleted_at".to_string()
}

fn default_hard_delete() -> bool {
    true
}

/// Class-level soft-deleteable declaration.
///
/// Parsed from `#[soft_deleteable(...)]`:
///
/// ```rust,ignore
/// #[soft_deleteable]
/// #[soft_deleteable(field_name = "removed_on", time_aware, hard_delete = false)]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, FromMeta)]
pub struct SoftDeleteableDeclaration {
    /// Field holding the deletion timestamp.
    ///
    /// Defaults to `"deleted_at"`.
    #[darling(default = "default_field_name")]
    pub field_name: String,

    /// Treat rows deleted in the future as not yet deleted.
    #[darling(default)]
    pub time_aware: bool,

    /// Deleting an already soft-deleted row removes it physically.
    ///
    /// Defaults to `true`.
    #[darling(default = "default_hard_delete")]
    pub hard_delete: bool
}

impl SoftDeleteableDeclaration {
    /// Declaration on `field_name` with default flags.
    #[must_use]
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            ..Self::default()
        }
    }

    /// Parse `#[soft_deleteable]` or `#[soft_deleteable(...)]`.
    ///
    /// The bare word form yields the defaults.
    ///
    /// # Errors
    ///
    /// Unknown options or values of the wrong type.
    pub fn from_attribute(attr: &syn::Attribute) -> darling::Result<Self> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Self::default()),
            meta => Self::from_meta(meta)
        }
    }

    /// Set the time-aware flag.
    #[must_use]
    pub fn time_aware(mut self, time_aware: bool) -> Self {
        self.time_aware = time_aware;
        self
    }

    /// Set the hard-delete flag.
    #[must_use]
    pub fn hard_delete(mut self, hard_delete: bool) -> Self {
        self.hard_delete = hard_delete;
        self
    }
}

impl Default for SoftDeleteableDeclaration {
    fn default() -> Self {
        Self {
            field_name:  default_field_name(),
            time_aware:  false,
            hard_delete: default_hard_delete()
        }
    }
}
