// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! A set of entity definitions read together.
//!
//! Embedded fields reference other structs by name, so entities are parsed
//! as a group: every struct of a file is read first, then `#[embedded]`
//! fields are resolved against the group and their columns are flattened
//! into the owner's schema under `property.inner`.

use proc_macro2::TokenStream;
use syn::{DeriveInput, Item};

use super::entity::EntityDef;
use crate::{
    class::ClassDescriptor,
    error::Result,
    schema::EntitySchema,
    sluggable::SlugMetadata,
    soft_deleteable::SoftDeleteableConfig
};

/// Class descriptor and schema of one parsed struct.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    class:  ClassDescriptor,
    schema: EntitySchema
}

impl CatalogEntry {
    /// Typed declarations of the class.
    #[must_use]
    pub fn class(&self) -> &ClassDescriptor {
        &self.class
    }

    /// Mapping schema of the class.
    #[must_use]
    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    /// Compile the class's slug declarations with the built-in handlers.
    ///
    /// # Errors
    ///
    /// See [`crate::compile_slug_config`].
    pub fn compile_slugs(&self) -> Result<SlugMetadata> {
        crate::compile_slug_config(&self.class, &self.schema)
    }

    /// Compile the class's soft-deleteable declaration.
    #[must_use]
    pub fn compile_soft_deleteable(&self) -> Option<SoftDeleteableConfig> {
        crate::compile_soft_deleteable_config(&self.class, &self.schema)
    }
}

/// Entities parsed from one source, keyed by class name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>
}

impl Catalog {
    /// Parse Rust source text.
    ///
    /// # Errors
    ///
    /// Syntax errors, malformed attributes, or unresolved embedded types.
    pub fn parse_str(source: &str) -> darling::Result<Self> {
        let file = syn::parse_file(source)?;
        Self::from_file(&file)
    }

    /// Parse a token stream holding items.
    ///
    /// # Errors
    ///
    /// See [`Catalog::parse_str`].
    pub fn from_tokens(tokens: TokenStream) -> darling::Result<Self> {
        let file: syn::File = syn::parse2(tokens)?;
        Self::from_file(&file)
    }

    /// Read every struct of a parsed file. Other items are ignored.
    ///
    /// # Errors
    ///
    /// See [`Catalog::parse_str`].
    pub fn from_file(file: &syn::File) -> darling::Result<Self> {
        let items: Vec<DeriveInput> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Struct(item) => Some(DeriveInput::from(item.clone())),
                _ => None
            })
            .collect();
        Self::from_items(&items)
    }

    /// Read a group of struct definitions.
    ///
    /// # Errors
    ///
    /// Every malformed definition and every `#[embedded]` field whose type is
    /// not part of the group, accumulated.
    pub fn from_items(items: &[DeriveInput]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();

        let definitions: Vec<EntityDef> = items
            .iter()
            .filter_map(|item| errors.handle(EntityDef::from_derive_input(item)))
            .collect();

        let entries: Vec<CatalogEntry> = definitions
            .iter()
            .filter_map(|definition| errors.handle(resolve(definition, &definitions)))
            .collect();

        errors.finish_with(Self {
            entries
        })
    }

    /// Entry of the class `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.class.name() == name)
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the entry of `definition`, resolving its embedded fields one level
/// deep against `definitions`.
fn resolve(definition: &EntityDef, definitions: &[EntityDef]) -> darling::Result<CatalogEntry> {
    let mut class = definition.class_descriptor();
    let mut schema = definition.own_schema();
    let mut errors = darling::Error::accumulator();

    for field in &definition.fields {
        let Some(type_name) = field.embedded_type() else {
            continue;
        };
        let Some(embedded) = definitions.iter().find(|d| d.ident == type_name) else {
            errors.push(
                darling::Error::custom(format!(
                    "embedded type `{type_name}` is not defined alongside `{}`",
                    definition.ident
                ))
                .with_span(&field.ty)
            );
            continue;
        };

        let property = field.name_str();
        for inner in &embedded.fields {
            if let Some(mapping) = inner.field_mapping(format!("{property}.{}", inner.ident)) {
                schema.push_field(mapping);
            }
        }
        class = class.embed(
            property,
            embedded
                .fields
                .iter()
                .fold(ClassDescriptor::new(&embedded.name), |descriptor, inner| {
                    descriptor.property(inner.property())
                })
        );
    }

    errors.finish_with(CatalogEntry {
        class,
        schema
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;
    use crate::schema::{Schema, StorageType};

    #[test]
    fn reads_every_struct() {
        let catalog = Catalog::from_tokens(quote! {
            use chrono::NaiveDateTime;

            pub struct Article {
                #[id]
                id: i64,
                #[column]
                title: String
            }

            #[entity(name = "Comment")]
            pub struct CommentRow {
                #[id]
                id: i64
            }

            fn helper() {}
        })
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Article").is_some());
        assert!(catalog.get("Comment").is_some());
        assert!(catalog.get("CommentRow").is_none());
    }

    #[test]
    fn flattens_embedded_columns() {
        let catalog = Catalog::parse_str(
            r#"
            pub struct Address {
                #[column]
                city: String,
                #[column]
                #[slug(fields = ["city"])]
                city_slug: String,
                note: String
            }

            pub struct Customer {
                #[id]
                id: i64,
                #[embedded]
                address: Address
            }
            "#
        )
        .unwrap();

        let customer = catalog.get("Customer").unwrap();
        let schema = customer.schema();
        assert_eq!(schema.field_type("address.city"), Some(&StorageType::String));
        assert!(schema.has_field("address.city_slug"));
        assert!(!schema.has_field("address.note"));
        assert!(!schema.has_field("address"));

        let embedded = &customer.class().embedded()[0];
        assert_eq!(embedded.property(), "address");
        assert_eq!(embedded.class().name(), "Address");
        assert_eq!(embedded.class().properties().len(), 3);
    }

    #[test]
    fn unknown_embedded_type() {
        let err = Catalog::parse_str(
            r"
            pub struct Customer {
                #[embedded]
                address: Address
            }
            "
        )
        .unwrap_err();
        assert!(err.to_string().contains("embedded type `Address`"));
    }

    #[test]
    fn syntax_error() {
        assert!(Catalog::parse_str("pub struct {").is_err());
    }

    #[test]
    fn empty_source() {
        let catalog = Catalog::parse_str("").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
