// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Built-in slug handlers.
//!
//! | Identifier | Required options | Schema requirement |
//! |------------|------------------|--------------------|
//! | `relative` | `relation_field` | to-one association |
//! | `tree` | `parent_relation_field` | to-one association |
//! | `inversed_relative` | `relation_class`, `mapped_by`, `inverse_slug_field` | none |
//!
//! Other options (`separator`, `urilize`, `relation_slug_field`) are runtime
//! concerns and pass through unchecked.

use super::HandlerSpec;
use crate::{
    error::{MappingError, Result},
    schema::Schema,
    sluggable::config::HandlerOptions
};

/// Prefixes the slug with the slug of a related entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeSlugHandler;

impl RelativeSlugHandler {
    /// Registry identifier.
    pub const ID: &'static str = "relative";
}

impl HandlerSpec for RelativeSlugHandler {
    fn validate(&self, options: &HandlerOptions, schema: &dyn Schema) -> Result<()> {
        let relation = required(options, Self::ID, "relation_field", schema)?;
        if !schema.is_single_valued_association(relation) {
            return Err(MappingError::invalid(format!(
                "Unable to find slug relation through field - [{relation}] in class - {}",
                schema.class_name()
            )));
        }
        Ok(())
    }
}

/// Builds hierarchical slugs from the parent's slug.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSlugHandler;

impl TreeSlugHandler {
    /// Registry identifier.
    pub const ID: &'static str = "tree";
}

impl HandlerSpec for TreeSlugHandler {
    fn validate(&self, options: &HandlerOptions, schema: &dyn Schema) -> Result<()> {
        let parent = required(options, Self::ID, "parent_relation_field", schema)?;
        if !schema.is_single_valued_association(parent) {
            return Err(MappingError::invalid(format!(
                "Unable to find tree parent slug relation through field - [{parent}] in class - {}",
                schema.class_name()
            )));
        }
        Ok(())
    }
}

/// Refreshes slugs of entities that use this one as their relative.
#[derive(Debug, Clone, Copy, Default)]
pub struct InversedRelativeSlugHandler;

impl InversedRelativeSlugHandler {
    /// Registry identifier.
    pub const ID: &'static str = "inversed_relative";
}

impl HandlerSpec for InversedRelativeSlugHandler {
    fn validate(&self, options: &HandlerOptions, schema: &dyn Schema) -> Result<()> {
        for name in ["relation_class", "mapped_by", "inverse_slug_field"] {
            required(options, Self::ID, name, schema)?;
        }
        Ok(())
    }
}

/// Non-empty string option `name`.
fn required<'a>(
    options: &'a HandlerOptions,
    handler: &str,
    name: &str,
    schema: &dyn Schema
) -> Result<&'a str> {
    options
        .get(name)
        .and_then(|value| value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            MappingError::invalid(format!(
                "Slug handler [{handler}] requires a non-empty string option [{name}] in class - {}",
                schema.class_name()
            ))
        })
}
