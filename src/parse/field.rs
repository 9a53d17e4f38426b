// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! This module handles the mapping markers (`#[id]`, `#[column]`,
//! `#[association]`, `#[inherited]`, `#[embedded]`) and the `#[slug(...)]`
//! declaration.

use syn::{Field, Ident, Type};

use super::{
    column::{AssociationAttr, ColumnAttr},
    slug::parse_slug
};
use crate::{
    class::{PropertyDescriptor, Visibility},
    declaration::Declaration,
    schema::{AssociationMapping, FieldMapping}
};

/// Field definition with all parsed attributes.
///
/// # Attribute Flags
///
/// | Field | Attribute | Effect |
/// |-------|-----------|--------|
/// | `is_id` | `#[id]` | Identifier; implies a column |
/// | `column` | `#[column(...)]` | Mapped field |
/// | `association` | `#[association(...)]` | Mapped association |
/// | `inherited` | `#[inherited]` | Mapping inherited from an ancestor |
/// | `embedded` | `#[embedded]` | Holds an embedded object |
/// | `declarations` | `#[slug(...)]` | Declarations on the property |
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type. For embedded fields, names the embedded struct.
    pub ty: Type,

    /// Property visibility derived from the Rust visibility.
    pub visibility: Visibility,

    /// Whether this is an identifier field (`#[id]`).
    pub is_id: bool,

    /// Column mapping, if any.
    pub column: Option<ColumnAttr>,

    /// Association mapping, if any.
    pub association: Option<AssociationAttr>,

    /// Whether the mapping is inherited (`#[inherited]`).
    pub inherited: bool,

    /// Whether the field holds an embedded object (`#[embedded]`).
    pub embedded: bool,

    /// Declarations in attribute order.
    pub declarations: Vec<Declaration>
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Every malformed attribute on the field, accumulated, or a missing
    /// identifier on tuple fields.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(darling::Error::custom("entity requires named fields").with_span(field));
        };

        let mut errors = darling::Error::accumulator();
        let mut is_id = false;
        let mut column = None;
        let mut association = None;
        let mut inherited = false;
        let mut embedded = false;
        let mut declarations = Vec::new();

        for attr in &field.attrs {
            let path = attr.path();
            if path.is_ident("id") {
                is_id = true;
            } else if path.is_ident("column") {
                column = errors.handle(ColumnAttr::from_attr(attr).map_err(darling::Error::from));
            } else if path.is_ident("association") {
                association =
                    errors.handle(AssociationAttr::from_attr(attr).map_err(darling::Error::from));
            } else if path.is_ident("inherited") {
                inherited = true;
            } else if path.is_ident("embedded") {
                embedded = true;
            } else if path.is_ident("slug") {
                if let Some(slug) = errors.handle(parse_slug(attr).map_err(darling::Error::from)) {
                    declarations.push(Declaration::from(slug));
                }
            }
        }

        if column.is_some() && association.is_some() {
            errors.push(
                darling::Error::custom("field cannot be both a column and an association")
                    .with_span(&ident)
            );
        }

        errors.finish_with(Self {
            visibility: visibility_of(&field.vis),
            ident,
            ty: field.ty.clone(),
            is_id,
            column,
            association,
            inherited,
            embedded,
            declarations
        })
    }

    /// Field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Whether the field is a mapped column. `#[id]` implies a column.
    #[must_use]
    pub fn is_column(&self) -> bool {
        self.column.is_some() || (self.is_id && self.association.is_none())
    }

    /// Field mapping under `path`, if the field is a column.
    #[must_use]
    pub fn field_mapping(&self, path: String) -> Option<FieldMapping> {
        if !self.is_column() {
            return None;
        }
        let storage = self.column.clone().unwrap_or_default().storage_for(&self.ty);
        Some(FieldMapping {
            name:      path,
            storage,
            is_id:     self.is_id,
            inherited: self.inherited
        })
    }

    /// Association mapping, if the field is an association.
    #[must_use]
    pub fn association_mapping(&self) -> Option<AssociationMapping> {
        self.association.map(|association| AssociationMapping {
            name:          self.name_str(),
            single_valued: !association.to_many,
            inherited:     self.inherited || association.inherited
        })
    }

    /// Property descriptor carrying this field's declarations.
    #[must_use]
    pub fn property(&self) -> PropertyDescriptor {
        self.declarations.iter().cloned().fold(
            PropertyDescriptor::new(self.name_str()).visibility(self.visibility),
            |property, declaration| property.declare(declaration)
        )
    }

    /// Name of the embedded struct, taken from the last path segment.
    #[must_use]
    pub fn embedded_type(&self) -> Option<String> {
        if !self.embedded {
            return None;
        }
        match &self.ty {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .map(|segment| segment.ident.to_string()),
            _ => None
        }
    }
}

/// Map Rust visibility onto property visibility.
///
/// `pub` is public, `pub(crate)` and friends are protected, and private
/// fields stay private.
fn visibility_of(vis: &syn::Visibility) -> Visibility {
    match vis {
        syn::Visibility::Public(_) => Visibility::Public,
        syn::Visibility::Restricted(_) => Visibility::Protected,
        syn::Visibility::Inherited => Visibility::Private
    }
}
