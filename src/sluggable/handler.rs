// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Slug handler validation.
//!
//! A handler post-processes generated slugs at runtime. At compile time only
//! its declaration is checked:
//!
//! 1. the handler identifier is not empty;
//! 2. every option name is not empty; options collapse into a map where the
//!    last declaration of a name wins;
//! 3. the identifier resolves in the [`HandlerRegistry`] and the registered
//!    [`HandlerSpec`] accepts the option map.
//!
//! Failures from a spec propagate unchanged.

pub mod builtin;

use std::{collections::BTreeMap, fmt, sync::Arc};

use super::config::{HandlerConfig, HandlerOptions};
use crate::{
    declaration::HandlerDeclaration,
    error::{MappingError, Result},
    schema::Schema
};

/// Structural validation contract of a handler type.
///
/// # Examples
///
/// ```rust,ignore
/// struct RequiresLocale;
///
/// impl HandlerSpec for RequiresLocale {
///     fn validate(&self, options: &HandlerOptions, schema: &dyn Schema) -> Result<()> {
///         if options.contains_key("locale") {
///             Ok(())
///         } else {
///             Err(MappingError::invalid(format!(
///                 "locale option is required in entity - {}",
///                 schema.class_name()
///             )))
///         }
///     }
/// }
/// ```
pub trait HandlerSpec: Send + Sync {
    /// Check `options` against the entity's `schema`.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidMapping`] when the options cannot work with
    /// this entity.
    fn validate(&self, options: &HandlerOptions, schema: &dyn Schema) -> Result<()>;
}

impl<F> HandlerSpec for F
where
    F: Fn(&HandlerOptions, &dyn Schema) -> Result<()> + Send + Sync
{
    fn validate(&self, options: &HandlerOptions, schema: &dyn Schema) -> Result<()> {
        self(options, schema)
    }
}

/// Handler identifiers mapped to their validation contracts.
///
/// [`HandlerRegistry::default`] contains the built-in handlers
/// (`relative`, `tree`, `inversed_relative`); [`HandlerRegistry::empty`]
/// contains none.
#[derive(Clone)]
pub struct HandlerRegistry {
    specs: BTreeMap<String, Arc<dyn HandlerSpec>>
}

impl HandlerRegistry {
    /// Registry without any handler.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            specs: BTreeMap::new()
        }
    }

    /// Register `spec` under `id`, replacing a previous registration.
    #[must_use]
    pub fn register(mut self, id: impl Into<String>, spec: impl HandlerSpec + 'static) -> Self {
        self.specs.insert(id.into(), Arc::new(spec));
        self
    }

    /// Contract registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn HandlerSpec> {
        self.specs.get(id).map(|spec| spec.as_ref())
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.specs.contains_key(id)
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Validate one handler declaration and resolve its option map.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidMapping`] on an empty or unknown identifier, an
    /// empty option name, or a rejection by the handler's own contract.
    pub fn validate(
        &self,
        declaration: &HandlerDeclaration,
        schema: &dyn Schema
    ) -> Result<HandlerConfig> {
        let class_name = schema.class_name();

        if declaration.class.is_empty() {
            return Err(MappingError::invalid(format!(
                "Slug handler class must be a non-empty handler name in entity - {class_name}"
            )));
        }

        let mut options = HandlerOptions::new();
        for option in &declaration.options {
            if option.name.is_empty() {
                return Err(MappingError::invalid(format!(
                    "Slug handler [{}] option name must not be empty in entity - {class_name}",
                    declaration.class
                )));
            }
            options.insert(option.name.clone(), option.value.clone());
        }

        let spec = self.get(&declaration.class).ok_or_else(|| {
            MappingError::invalid(format!(
                "Slug handler [{}] should be a valid handler class in entity - {class_name}",
                declaration.class
            ))
        })?;
        spec.validate(&options, schema)?;

        Ok(HandlerConfig {
            class: declaration.class.clone(),
            options
        })
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::empty()
            .register(builtin::RelativeSlugHandler::ID, builtin::RelativeSlugHandler)
            .register(builtin::TreeSlugHandler::ID, builtin::TreeSlugHandler)
            .register(
                builtin::InversedRelativeSlugHandler::ID,
                builtin::InversedRelativeSlugHandler
            )
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.specs.keys()).finish()
    }
}
