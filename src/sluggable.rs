// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sluggable behaviour: declaration compiler and resolved configuration.
//!
//! # Compilation Flow
//!
//! ```text
//! ClassDescriptor ──► walk() ──► Target ──► extract::<SlugDeclaration>()
//!                                              │
//!                     Schema ◄── checks ───────┤ target field exists, slug storage type
//!                                              │ at least one source field
//!                                              │ every source field exists, slug storage type
//!                                              │ identifier slug is unique
//!                                              │ unique_base only with unique
//!                                              │ unique_base is a field or association
//!                                              │ handler chain (HandlerRegistry)
//!                                              ▼
//!                                         SlugMetadata { "slug" => SlugConfig, ... }
//! ```
//!
//! The first failing check aborts the whole class with
//! [`MappingError::InvalidMapping`](crate::MappingError::InvalidMapping).
//!
//! # Embedded Objects
//!
//! A slug declared inside an embedded object resolves its source fields
//! relative to the same object:
//!
//! ```rust,ignore
//! // Address { city, #[slug(fields = ["city"])] city_slug } embedded as `address`
//! metadata.get("address.city_slug").unwrap().fields == ["address.city"]
//! ```

mod compiler;
mod config;
mod handler;

#[cfg(test)]
mod tests;

pub use compiler::SlugCompiler;
pub use config::{HandlerConfig, HandlerOptions, SlugConfig, SlugMetadata};
pub use handler::{
    HandlerRegistry, HandlerSpec,
    builtin::{InversedRelativeSlugHandler, RelativeSlugHandler, TreeSlugHandler}
};
