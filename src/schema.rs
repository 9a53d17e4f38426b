// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent field catalog of an entity.
//!
//! The compilers never own schema knowledge. They ask a [`Schema`] whether a
//! field or association exists, which storage type a field has and which
//! fields form the identifier. [`EntitySchema`] is an in-memory implementation
//! built by hand or by [`crate::parse::Catalog`].
//!
//! # Field Paths
//!
//! Fields of embedded objects are flattened into the owning entity's catalog
//! and addressed with a dotted path:
//!
//! ```text
//! Article
//! ├── title          string
//! ├── address.city   string   (embedded Address.city)
//! └── address.zip    string   (embedded Address.zip)
//! ```

mod entity;
mod storage;

pub use entity::{AssociationMapping, EntitySchema, FieldMapping};
pub use storage::StorageType;

/// Read-only view of an entity's persistent mapping.
///
/// Implementations must be side-effect free. A compile call may query the
/// same path many times.
pub trait Schema: Send + Sync {
    /// Entity class name, used in error messages.
    fn class_name(&self) -> &str;

    /// Whether a mapped field exists at `path`.
    fn has_field(&self, path: &str) -> bool;

    /// Storage type of the mapped field at `path`.
    fn field_type(&self, path: &str) -> Option<&StorageType>;

    /// Whether an association named `name` exists.
    fn has_association(&self, name: &str) -> bool;

    /// Whether `name` is a to-one association.
    fn is_single_valued_association(&self, name: &str) -> bool;

    /// Whether the field at `path` is part of the identifier.
    fn is_identifier(&self, path: &str) -> bool;

    /// Whether the entity declares any identifier field.
    fn has_identifier(&self) -> bool;

    /// Whether the mapped class is a mapped superclass.
    fn is_mapped_superclass(&self) -> bool;

    /// Whether the field `name` is mapped by an ancestor class.
    fn is_inherited_field(&self, name: &str) -> bool;

    /// Whether the association `name` is mapped by an ancestor class.
    fn is_inherited_association(&self, name: &str) -> bool;

    /// Whether the property `name` belongs to a mapping inherited from an
    /// ancestor, either as a field or as an association.
    fn own_property_is_inherited_mapping(&self, name: &str) -> bool {
        self.is_inherited_field(name) || self.is_inherited_association(name)
    }

    /// Whether `path` exists and its storage type satisfies `accept`.
    fn field_type_matches(&self, path: &str, accept: fn(&StorageType) -> bool) -> bool {
        self.field_type(path).is_some_and(accept)
    }
}
