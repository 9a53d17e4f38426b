// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Soft-deleteable behaviour compiler.
//!
//! A class opts in with one class-level declaration naming the field that
//! stores the deletion timestamp. The field's storage type is checked against
//! the temporal types, but a mismatch is only logged: the configuration is
//! emitted regardless, and compilation never fails.
//!
//! ```rust,ignore
//! #[soft_deleteable(field_name = "deleted_at", time_aware)]
//! pub struct Article { /* ... */ }
//!
//! // SoftDeleteableConfig { enabled: true, field_name: "deleted_at", time_aware: true, hard_delete: true }
//! ```

use crate::{
    class::ClassDescriptor,
    declaration::{SoftDeleteableDeclaration, extract},
    schema::{Schema, StorageType}
};

/// Resolved soft-deleteable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SoftDeleteableConfig {
    /// Always `true`; a class without a declaration has no configuration.
    pub enabled: bool,

    /// Field holding the deletion timestamp.
    pub field_name: String,

    /// Rows with a deletion time in the future count as not deleted.
    pub time_aware: bool,

    /// Deleting a soft-deleted row removes it physically.
    pub hard_delete: bool
}

/// Compile the soft-deleteable declaration of `class`.
///
/// Returns `None` when the class declares no soft-deleteable behaviour.
pub fn compile(class: &ClassDescriptor, schema: &dyn Schema) -> Option<SoftDeleteableConfig> {
    let declaration =
        extract::<SoftDeleteableDeclaration>(class.name(), class.declarations())?;

    if !schema.field_type_matches(&declaration.field_name, StorageType::is_temporal) {
        tracing::warn!(
            class = schema.class_name(),
            field = %declaration.field_name,
            storage = schema.field_type(&declaration.field_name).map(StorageType::as_str),
            "soft-deleteable field is not mapped with a date or time type"
        );
    }

    Some(SoftDeleteableConfig {
        enabled:     true,
        field_name:  declaration.field_name.clone(),
        time_aware:  declaration.time_aware,
        hard_delete: declaration.hard_delete
    })
}
