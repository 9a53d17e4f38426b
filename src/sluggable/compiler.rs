// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Slug metadata compiler.

use super::{
    config::{HandlerConfig, SlugConfig, SlugMetadata},
    handler::HandlerRegistry
};
use crate::{
    class::ClassDescriptor,
    declaration::{SlugDeclaration, extract},
    error::{MappingError, Result},
    schema::{Schema, StorageType},
    walker::{Target, walk}
};

/// Compiles slug declarations of a class into [`SlugMetadata`].
///
/// The compiler holds no per-call state; one instance can serve any number
/// of classes, concurrently.
///
/// # Examples
///
/// ```rust,ignore
/// let compiler = SlugCompiler::new(HandlerRegistry::default().register("locale", LocaleSpec));
/// let metadata = compiler.compile(&class, &schema)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlugCompiler {
    handlers: HandlerRegistry
}

impl SlugCompiler {
    /// Compiler resolving handlers through `handlers`.
    #[must_use]
    pub fn new(handlers: HandlerRegistry) -> Self {
        Self {
            handlers
        }
    }

    /// Handler registry in use.
    #[must_use]
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Compile every slug declared on `class`.
    ///
    /// A class without slug declarations yields empty metadata.
    ///
    /// # Errors
    ///
    /// The first [`MappingError::InvalidMapping`] found, in target order:
    /// own properties first, then embedded properties.
    pub fn compile(&self, class: &ClassDescriptor, schema: &dyn Schema) -> Result<SlugMetadata> {
        let mut metadata = SlugMetadata::default();

        for target in walk(class, schema) {
            let slug = target.field_path();
            let label = format!("{}::{slug}", class.name());
            let Some(declaration) =
                extract::<SlugDeclaration>(&label, target.property().declarations())
            else {
                continue;
            };

            let config = self.compile_target(&target, slug, declaration, schema)?;
            tracing::debug!(
                class = schema.class_name(),
                slug = %config.slug,
                fields = ?config.fields,
                handlers = config.handlers.len(),
                "compiled slug"
            );
            metadata.insert(config);
        }

        Ok(metadata)
    }

    fn compile_target(
        &self,
        target: &Target<'_>,
        slug: String,
        declaration: &SlugDeclaration,
        schema: &dyn Schema
    ) -> Result<SlugConfig> {
        let class_name = schema.class_name();

        ensure_slug_field(schema, &slug)?;

        if declaration.fields.is_empty() {
            return Err(MappingError::invalid(format!(
                "Slug [{slug}] must contain at least one field for slug generation in class - {class_name}"
            )));
        }

        let fields: Vec<String> = declaration
            .fields
            .iter()
            .map(|field| target.qualify(field))
            .collect();
        for field in &fields {
            ensure_slug_field(schema, field)?;
        }

        if !declaration.unique && schema.has_identifier() && schema.is_identifier(&slug) {
            return Err(MappingError::invalid(format!(
                "Identifier field - [{slug}] slug must be unique in order to maintain primary key in class - {class_name}"
            )));
        }

        let unique_base = declaration
            .unique_base
            .as_deref()
            .filter(|base| !base.is_empty());
        if let Some(base) = unique_base {
            if !declaration.unique {
                return Err(MappingError::invalid(format!(
                    "Slug [{slug}] option [unique_base] can not be set if unique is disabled in class - {class_name}"
                )));
            }
            if !schema.has_field(base) && !schema.has_association(base) {
                return Err(MappingError::invalid(format!(
                    "Unable to find [{base}] as mapped property in entity - {class_name}"
                )));
            }
        }

        let handlers = self.compile_handlers(declaration, schema)?;

        Ok(SlugConfig {
            slug,
            fields,
            style:       declaration.style,
            date_format: declaration.date_format.clone(),
            updatable:   declaration.updatable,
            unique:      declaration.unique,
            unique_base: unique_base.map(str::to_string),
            separator:   declaration.separator.clone(),
            prefix:      declaration.prefix.clone(),
            suffix:      declaration.suffix.clone(),
            handlers
        })
    }

    /// Validate the handler chain in declaration order.
    ///
    /// A handler declared twice keeps its first position in the chain and
    /// takes the options of its last declaration.
    fn compile_handlers(
        &self,
        declaration: &SlugDeclaration,
        schema: &dyn Schema
    ) -> Result<Vec<HandlerConfig>> {
        let mut chain: Vec<HandlerConfig> = Vec::with_capacity(declaration.handlers.len());

        for handler in &declaration.handlers {
            let config = self.handlers.validate(handler, schema)?;
            match chain.iter_mut().find(|h| h.class == config.class) {
                Some(existing) => *existing = config,
                None => chain.push(config)
            }
        }

        Ok(chain)
    }
}

/// Field `path` must be mapped with a slug storage type.
fn ensure_slug_field(schema: &dyn Schema, path: &str) -> Result<()> {
    let class_name = schema.class_name();

    if !schema.has_field(path) {
        return Err(MappingError::invalid(format!(
            "Unable to find slug [{path}] as mapped property in entity - {class_name}"
        )));
    }

    if !schema.field_type_matches(path, StorageType::is_slug_storage) {
        let found = schema.field_type(path).map(StorageType::as_str).unwrap_or_default();
        return Err(MappingError::invalid(format!(
            "Cannot use field - [{path}] of type [{found}] for slug storage, type must be one of \
             string, text, integer, int, datetime, datetimetz, citext in class - {class_name}"
        )));
    }

    Ok(())
}
