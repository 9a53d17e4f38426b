// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved slug configuration.
//!
//! Every path stored here has been checked against the schema during
//! compilation. Consumers do not need to re-validate.

use std::collections::BTreeMap;

use crate::declaration::{OptionValue, SlugStyle};

/// Validated options of one handler, keyed by option name.
pub type HandlerOptions = BTreeMap<String, OptionValue>;

/// A validated handler in a slug's chain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandlerConfig {
    /// Handler identifier.
    pub class: String,

    /// Options after collapsing duplicates (last declaration wins).
    pub options: HandlerOptions
}

/// Resolved configuration of one slug field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlugConfig {
    /// Target field path, prefixed for embedded targets.
    pub slug: String,

    /// Source field paths, prefixed like the target.
    pub fields: Vec<String>,

    /// Naming style.
    pub style: SlugStyle,

    /// Format for temporal source fields.
    pub date_format: String,

    /// Regenerate when sources change.
    pub updatable: bool,

    /// Enforce uniqueness.
    pub unique: bool,

    /// Field or association partitioning the uniqueness check.
    pub unique_base: Option<String>,

    /// Word separator.
    pub separator: String,

    /// Literal prefix.
    pub prefix: String,

    /// Literal suffix.
    pub suffix: String,

    /// Handler chain in declaration order, one entry per handler class.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_handlers"))]
    pub handlers: Vec<HandlerConfig>
}

impl SlugConfig {
    /// Options of the handler `class`, if it is part of the chain.
    #[must_use]
    pub fn handler(&self, class: &str) -> Option<&HandlerOptions> {
        self.handlers
            .iter()
            .find(|h| h.class == class)
            .map(|h| &h.options)
    }
}

/// All slug configurations of one class, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlugMetadata {
    slugs: Vec<SlugConfig>
}

impl SlugMetadata {
    /// Configuration of the slug stored in `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SlugConfig> {
        self.slugs.iter().find(|s| s.slug == field)
    }

    /// Whether a slug is stored in `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Target field paths in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(|s| s.slug.as_str())
    }

    /// Configurations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlugConfig> {
        self.slugs.iter()
    }

    /// Number of slug fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    /// Whether the class has no slug fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }

    /// Insert `config`, replacing an existing entry for the same field in
    /// place.
    pub(crate) fn insert(&mut self, config: SlugConfig) {
        match self.slugs.iter_mut().find(|s| s.slug == config.slug) {
            Some(existing) => *existing = config,
            None => self.slugs.push(config)
        }
    }
}

impl<'a> IntoIterator for &'a SlugMetadata {
    type Item = &'a SlugConfig;
    type IntoIter = std::slice::Iter<'a, SlugConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.slugs.iter()
    }
}

impl IntoIterator for SlugMetadata {
    type Item = SlugConfig;
    type IntoIter = std::vec::IntoIter<SlugConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.slugs.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SlugMetadata {
    /// Serialized as a map from target field to configuration.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.slugs.len()))?;
        for slug in &self.slugs {
            map.serialize_entry(&slug.slug, slug)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
fn serialize_handlers<S: serde::Serializer>(
    handlers: &[HandlerConfig],
    serializer: S
) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(handlers.len()))?;
    for handler in handlers {
        map.serialize_entry(&handler.class, &handler.options)?;
    }
    map.end()
}
