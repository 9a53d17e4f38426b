// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration source: Rust struct definitions.
//!
//! This module reads entity definitions written as Rust structs and produces,
//! for each struct, a [`ClassDescriptor`](crate::ClassDescriptor) holding the
//! typed declarations and an [`EntitySchema`](crate::EntitySchema) describing
//! its persistent fields.
//!
//! # Parsing Strategy
//!
//! Struct-level `#[entity(...)]` attributes are parsed with darling's
//! `FromDeriveInput`, and `#[soft_deleteable(...)]` with darling's
//! `FromMeta`. Field-level attributes are marker-style or carry nested
//! lists (`handlers(handler(...))`), so they are parsed manually with
//! `syn::meta::ParseNestedMeta`.
//!
//! # Supported Attributes
//!
//! | Attribute | Target | Effect |
//! |-----------|--------|--------|
//! | `#[entity(name = "...")]` | struct | Class name (defaults to the struct name) |
//! | `#[entity(mapped_superclass)]` | struct | Mark as mapped superclass |
//! | `#[soft_deleteable(...)]` | struct | Soft-deleteable declaration |
//! | `#[id]` | field | Identifier field |
//! | `#[column]`, `#[column(type = "...")]` | field | Mapped field, type inferred or explicit |
//! | `#[association]`, `#[association(to_many, inherited)]` | field | Mapped association |
//! | `#[inherited]` | field | Field mapping inherited from an ancestor |
//! | `#[embedded]` | field | Embedded object, resolved within the catalog |
//! | `#[slug(...)]` | field | Slug declaration |
//!
//! # Examples
//!
//! ```rust,ignore
//! let catalog = Catalog::parse_str(r#"
//!     #[soft_deleteable]
//!     pub struct Article {
//!         #[id] #[column] id: i64,
//!         #[column] title: String,
//!         #[column] #[slug(fields = ["title"])] slug: String,
//!         #[column] deleted_at: Option<DateTime<Utc>>,
//!     }
//! "#)?;
//! let article = catalog.get("Article").unwrap();
//! let slugs = article.compile_slugs()?;
//! ```

mod catalog;
mod column;
mod entity;
mod field;
mod slug;

pub use catalog::{Catalog, CatalogEntry};
pub use column::{AssociationAttr, ColumnAttr, infer_storage};
pub use entity::EntityDef;
pub use field::FieldDef;
pub use slug::parse_slug;
