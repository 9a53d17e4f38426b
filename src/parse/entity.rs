// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! This module handles `#[entity(...)]` using darling and collects the
//! class-level `#[soft_deleteable(...)]` declarations forwarded by it.

use darling::FromDeriveInput;
use syn::{Attribute, DeriveInput, Ident};

use super::field::FieldDef;
use crate::{
    class::ClassDescriptor,
    declaration::{Declaration, DeclarationKind, SoftDeleteableDeclaration},
    schema::EntitySchema
};

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// Internal to darling; the public API is [`EntityDef`].
#[derive(Debug, FromDeriveInput)]
#[darling(
    attributes(entity),
    forward_attrs(soft_deleteable),
    supports(struct_named)
)]
struct EntityAttrs {
    /// Struct identifier (e.g., `Article`).
    ident: Ident,

    /// Forwarded class-level declaration attributes.
    attrs: Vec<Attribute>,

    /// Class name. Defaults to the struct identifier.
    #[darling(default)]
    name: Option<String>,

    /// Mapped superclass flag.
    #[darling(default)]
    mapped_superclass: bool
}

/// Complete parsed entity definition.
#[derive(Debug, Clone)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Class name used in error messages and lookups.
    pub name: String,

    /// Whether the class is a mapped superclass.
    pub mapped_superclass: bool,

    /// Class-level declarations in attribute order.
    pub declarations: Vec<Declaration>,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse an entity definition from a derive input.
    ///
    /// # Errors
    ///
    /// Every malformed entity, declaration, or field attribute, accumulated.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        let mut errors = darling::Error::accumulator();

        let declarations: Vec<Declaration> = attrs
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident(DeclarationKind::SoftDeleteable.attribute()))
            .filter_map(|attr| {
                errors.handle(
                    SoftDeleteableDeclaration::from_attribute(attr).map_err(|e| e.with_span(attr))
                )
            })
            .map(Declaration::from)
            .collect();

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => data
                .fields
                .iter()
                .filter_map(|field| errors.handle(FieldDef::from_field(field)))
                .collect(),
            _ => {
                return Err(
                    darling::Error::custom("entity can only be read from structs")
                        .with_span(&input.ident)
                );
            }
        };

        errors.finish_with(Self {
            name: attrs.name.unwrap_or_else(|| attrs.ident.to_string()),
            ident: attrs.ident,
            mapped_superclass: attrs.mapped_superclass,
            declarations,
            fields
        })
    }

    /// Identifier fields.
    pub fn id_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_id)
    }

    /// Class descriptor of this entity without embedded objects.
    #[must_use]
    pub fn class_descriptor(&self) -> ClassDescriptor {
        let class = self
            .declarations
            .iter()
            .cloned()
            .fold(ClassDescriptor::new(&self.name), |class, declaration| {
                class.declare(declaration)
            });
        self.fields
            .iter()
            .fold(class, |class, field| class.property(field.property()))
    }

    /// Schema of this entity's own columns and associations.
    ///
    /// Fields of embedded objects are added by the catalog, which knows the
    /// embedded definitions.
    #[must_use]
    pub fn own_schema(&self) -> EntitySchema {
        let mut schema = EntitySchema::new(&self.name);
        schema.set_mapped_superclass(self.mapped_superclass);
        for field in &self.fields {
            if let Some(mapping) = field.field_mapping(field.name_str()) {
                schema.push_field(mapping);
            }
            if let Some(mapping) = field.association_mapping() {
                schema = schema.with_association(mapping);
            }
        }
        schema
    }
}
