// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # entity-mapping
//!
//! Compiles behaviour declarations attached to persistent entities into
//! validated, ready-to-use configuration records.
//!
//! Two behaviours are supported:
//!
//! - **Sluggable**: a field holding a URL-friendly identifier generated from
//!   other fields. Compiled into [`SlugMetadata`].
//! - **Soft-deleteable**: deletion sets a timestamp instead of removing the
//!   row. Compiled into [`SoftDeleteableConfig`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use entity_mapping::parse::Catalog;
//!
//! let catalog = Catalog::parse_str(r#"
//!     #[soft_deleteable]
//!     pub struct Article {
//!         #[id]
//!         id: i64,
//!
//!         #[column]
//!         title: String,
//!
//!         #[column]
//!         #[slug(fields = ["title"], separator = "_")]
//!         slug: String,
//!
//!         #[column]
//!         deleted_at: Option<DateTime<Utc>>,
//!     }
//! "#)?;
//!
//! let article = catalog.get("Article").unwrap();
//! let slugs = article.compile_slugs()?;
//! assert_eq!(slugs.get("slug").unwrap().fields, ["title"]);
//! ```
//!
//! Classes and schemas can also be built by hand:
//!
//! ```rust,ignore
//! use entity_mapping::{
//!     ClassDescriptor, EntitySchema, PropertyDescriptor, SlugDeclaration, StorageType,
//!     compile_slug_config
//! };
//!
//! let class = ClassDescriptor::new("Article")
//!     .property(PropertyDescriptor::new("title"))
//!     .property(PropertyDescriptor::new("slug").declare(SlugDeclaration::new(["title"])));
//! let schema = EntitySchema::new("Article")
//!     .id("id", StorageType::Integer)
//!     .field("title", StorageType::String)
//!     .field("slug", StorageType::String);
//!
//! let metadata = compile_slug_config(&class, &schema)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`schema`] | Mapping queries the compilers need |
//! | [`class`] | Class descriptors holding typed declarations |
//! | [`declaration`] | Declaration values and defaults |
//! | [`walker`] | Own and embedded targets of a class |
//! | [`sluggable`] | Slug compiler, handler registry, slug configuration |
//! | [`soft_deleteable`] | Soft-deleteable compiler |
//! | [`parse`] | Reads declarations from Rust struct definitions |
//!
//! ## Logging
//!
//! Compilers emit [`tracing`] events: `debug` for every compiled slug and
//! `warn` for tolerated irregularities such as duplicate declarations or a
//! soft-deleteable field without a temporal type. Install any `tracing`
//! subscriber to see them.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod class;
pub mod declaration;
mod error;
pub mod parse;
pub mod schema;
pub mod sluggable;
pub mod soft_deleteable;
pub mod walker;

use std::sync::LazyLock;

pub use class::{ClassDescriptor, EmbeddedDescriptor, PropertyDescriptor, Visibility};
pub use declaration::{
    Declaration, DeclarationKind, HandlerDeclaration, HandlerOption, OptionValue,
    SlugDeclaration, SlugStyle, SoftDeleteableDeclaration
};
pub use error::{MappingError, Result};
pub use schema::{AssociationMapping, EntitySchema, FieldMapping, Schema, StorageType};
pub use sluggable::{
    HandlerConfig, HandlerRegistry, HandlerSpec, SlugCompiler, SlugConfig, SlugMetadata
};
pub use soft_deleteable::SoftDeleteableConfig;

static DEFAULT_SLUG_COMPILER: LazyLock<SlugCompiler> = LazyLock::new(SlugCompiler::default);

/// Compile the slug declarations of `class` with the built-in handlers.
///
/// Use a [`SlugCompiler`] with a custom [`HandlerRegistry`] to accept other
/// handlers.
///
/// # Errors
///
/// [`MappingError::InvalidMapping`] for the first declaration that violates
/// a mapping rule.
pub fn compile_slug_config(class: &ClassDescriptor, schema: &dyn Schema) -> Result<SlugMetadata> {
    DEFAULT_SLUG_COMPILER.compile(class, schema)
}

/// Compile the soft-deleteable declaration of `class`.
///
/// Returns `None` when the class has no such declaration. Never fails.
#[must_use]
pub fn compile_soft_deleteable_config(
    class: &ClassDescriptor,
    schema: &dyn Schema
) -> Option<SoftDeleteableConfig> {
    soft_deleteable::compile(class, schema)
}
