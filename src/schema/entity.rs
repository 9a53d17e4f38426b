// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory [`Schema`] implementation.

use super::{Schema, StorageType};

/// A mapped field of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Field path, dotted for embedded fields (e.g. `address.city`).
    pub name: String,

    /// Storage type tag.
    pub storage: StorageType,

    /// Part of the identifier.
    pub is_id: bool,

    /// Mapped by an ancestor class.
    pub inherited: bool
}

impl FieldMapping {
    /// Create a plain, non-identifier field mapping.
    #[must_use]
    pub fn new(name: impl Into<String>, storage: impl Into<StorageType>) -> Self {
        Self {
            name:      name.into(),
            storage:   storage.into(),
            is_id:     false,
            inherited: false
        }
    }
}

/// A mapped association of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationMapping {
    /// Association property name.
    pub name: String,

    /// To-one (`true`) or to-many (`false`).
    pub single_valued: bool,

    /// Mapped by an ancestor class.
    pub inherited: bool
}

/// Entity schema held in memory.
///
/// # Examples
///
/// ```rust,ignore
/// let schema = EntitySchema::new("Article")
///     .id("id", StorageType::Integer)
///     .field("title", StorageType::String)
///     .field("slug", StorageType::String)
///     .to_one("category");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySchema {
    name:              String,
    fields:            Vec<FieldMapping>,
    associations:      Vec<AssociationMapping>,
    mapped_superclass: bool
}

impl EntitySchema {
    /// Create an empty schema for the class `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a field mapping. A later mapping with the same name replaces the
    /// earlier one.
    #[must_use]
    pub fn with_field(mut self, mapping: FieldMapping) -> Self {
        self.push_field(mapping);
        self
    }

    /// Add a plain field.
    #[must_use]
    pub fn field(self, name: impl Into<String>, storage: impl Into<StorageType>) -> Self {
        self.with_field(FieldMapping::new(name, storage))
    }

    /// Add an identifier field.
    #[must_use]
    pub fn id(self, name: impl Into<String>, storage: impl Into<StorageType>) -> Self {
        self.with_field(FieldMapping {
            is_id: true,
            ..FieldMapping::new(name, storage)
        })
    }

    /// Add a field mapped by an ancestor class.
    #[must_use]
    pub fn inherited_field(self, name: impl Into<String>, storage: impl Into<StorageType>) -> Self {
        self.with_field(FieldMapping {
            inherited: true,
            ..FieldMapping::new(name, storage)
        })
    }

    /// Add an association mapping.
    #[must_use]
    pub fn with_association(mut self, mapping: AssociationMapping) -> Self {
        self.associations.retain(|a| a.name != mapping.name);
        self.associations.push(mapping);
        self
    }

    /// Add a to-one association.
    #[must_use]
    pub fn to_one(self, name: impl Into<String>) -> Self {
        self.with_association(AssociationMapping {
            name:          name.into(),
            single_valued: true,
            inherited:     false
        })
    }

    /// Add a to-many association.
    #[must_use]
    pub fn to_many(self, name: impl Into<String>) -> Self {
        self.with_association(AssociationMapping {
            name:          name.into(),
            single_valued: false,
            inherited:     false
        })
    }

    /// Mark the class as a mapped superclass.
    #[must_use]
    pub fn mapped_superclass(mut self) -> Self {
        self.mapped_superclass = true;
        self
    }

    /// All field mappings in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldMapping] {
        &self.fields
    }

    /// All association mappings in declaration order.
    #[must_use]
    pub fn associations(&self) -> &[AssociationMapping] {
        &self.associations
    }

    pub(crate) fn push_field(&mut self, mapping: FieldMapping) {
        match self.fields.iter_mut().find(|f| f.name == mapping.name) {
            Some(existing) => *existing = mapping,
            None => self.fields.push(mapping)
        }
    }

    pub(crate) fn set_mapped_superclass(&mut self, value: bool) {
        self.mapped_superclass = value;
    }

    fn find_field(&self, path: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|f| f.name == path)
    }

    fn find_association(&self, name: &str) -> Option<&AssociationMapping> {
        self.associations.iter().find(|a| a.name == name)
    }
}

impl Schema for EntitySchema {
    fn class_name(&self) -> &str {
        &self.name
    }

    fn has_field(&self, path: &str) -> bool {
        self.find_field(path).is_some()
    }

    fn field_type(&self, path: &str) -> Option<&StorageType> {
        self.find_field(path).map(|f| &f.storage)
    }

    fn has_association(&self, name: &str) -> bool {
        self.find_association(name).is_some()
    }

    fn is_single_valued_association(&self, name: &str) -> bool {
        self.find_association(name).is_some_and(|a| a.single_valued)
    }

    fn is_identifier(&self, path: &str) -> bool {
        self.find_field(path).is_some_and(|f| f.is_id)
    }

    fn has_identifier(&self) -> bool {
        self.fields.iter().any(|f| f.is_id)
    }

    fn is_mapped_superclass(&self) -> bool {
        self.mapped_superclass
    }

    fn is_inherited_field(&self, name: &str) -> bool {
        self.find_field(name).is_some_and(|f| f.inherited)
    }

    fn is_inherited_association(&self, name: &str) -> bool {
        self.find_association(name).is_some_and(|a| a.inherited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> EntitySchema {
        EntitySchema::new("Article")
            .id("id", StorageType::Integer)
            .field("title", StorageType::String)
            .field("address.city", StorageType::String)
            .inherited_field("created", StorageType::DateTime)
            .to_one("category")
            .with_association(AssociationMapping {
                name:          "tags".to_string(),
                single_valued: false,
                inherited:     true
            })
    }

    #[test]
    fn answers_field_queries() {
        let schema = article();
        assert_eq!(schema.class_name(), "Article");
        assert!(schema.has_field("title"));
        assert!(schema.has_field("address.city"));
        assert!(!schema.has_field("city"));
        assert_eq!(schema.field_type("title"), Some(&StorageType::String));
        assert_eq!(schema.field_type("missing"), None);
    }

    #[test]
    fn answers_identifier_queries() {
        let schema = article();
        assert!(schema.has_identifier());
        assert!(schema.is_identifier("id"));
        assert!(!schema.is_identifier("title"));
        assert!(!EntitySchema::new("Empty").has_identifier());
    }

    #[test]
    fn answers_association_queries() {
        let schema = article();
        assert!(schema.has_association("category"));
        assert!(schema.is_single_valued_association("category"));
        assert!(schema.has_association("tags"));
        assert!(!schema.is_single_valued_association("tags"));
        assert!(!schema.has_association("title"));
    }

    #[test]
    fn inherited_mappings() {
        let schema = article();
        assert!(schema.own_property_is_inherited_mapping("created"));
        assert!(schema.own_property_is_inherited_mapping("tags"));
        assert!(!schema.own_property_is_inherited_mapping("title"));
        assert!(!schema.own_property_is_inherited_mapping("category"));
    }

    #[test]
    fn later_field_replaces_earlier() {
        let schema = EntitySchema::new("A")
            .field("slug", StorageType::Boolean)
            .field("slug", StorageType::String);
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.field_type("slug"), Some(&StorageType::String));
    }

    #[test]
    fn type_predicate() {
        let schema = article();
        assert!(schema.field_type_matches("title", StorageType::is_slug_storage));
        assert!(!schema.field_type_matches("title", StorageType::is_temporal));
        assert!(!schema.field_type_matches("missing", StorageType::is_slug_storage));
    }
}
