// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class descriptors: the typed declaration registry of one entity.
//!
//! A [`ClassDescriptor`] lists a class's own properties in declaration order,
//! the declarations attached to the class and each property, and the embedded
//! objects the class contains. It is assembled once, either by hand or by
//! [`crate::parse::Catalog`], and then handed to the compilers by reference.
//!
//! ```text
//! ClassDescriptor "Article"
//! ├── declarations: [SoftDeleteable]
//! ├── properties
//! │   ├── id      (private)
//! │   ├── title   (private)
//! │   └── slug    (private, [Slug])
//! └── embedded
//!     └── address -> ClassDescriptor "Address"
//!                    ├── city
//!                    └── city_slug ([Slug])
//! ```

use crate::declaration::Declaration;

/// Visibility of a declared property.
///
/// Only private properties of a mapped superclass are processed on the
/// superclass itself; the others are processed on each subclass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Visible to the declaring class only.
    #[default]
    Private,

    /// Visible to the declaring class and its subclasses.
    Protected,

    /// Visible everywhere.
    Public
}

impl Visibility {
    /// Whether this is [`Visibility::Private`].
    #[must_use]
    pub const fn is_private(&self) -> bool {
        matches!(self, Self::Private)
    }
}

/// A property declared on a class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyDescriptor {
    name:         String,
    visibility:   Visibility,
    declarations: Vec<Declaration>
}

impl PropertyDescriptor {
    /// Private property without declarations.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the visibility.
    #[must_use]
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a declaration.
    #[must_use]
    pub fn declare(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    /// Property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the property is private.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.visibility.is_private()
    }

    /// Declarations in declaration order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

/// An embedded object held by a property of the owning class.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedDescriptor {
    property: String,
    class:    ClassDescriptor
}

impl EmbeddedDescriptor {
    /// Property of the owner holding the embedded object.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Descriptor of the embedded class.
    #[must_use]
    pub fn class(&self) -> &ClassDescriptor {
        &self.class
    }
}

/// Typed description of a class and its declarations.
///
/// # Examples
///
/// ```rust,ignore
/// let article = ClassDescriptor::new("Article")
///     .property(PropertyDescriptor::new("title"))
///     .property(PropertyDescriptor::new("slug").declare(SlugDeclaration::new(["title"])))
///     .embed("address", ClassDescriptor::new("Address").property(PropertyDescriptor::new("city")));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassDescriptor {
    name:         String,
    declarations: Vec<Declaration>,
    properties:   Vec<PropertyDescriptor>,
    embedded:     Vec<EmbeddedDescriptor>
}

impl ClassDescriptor {
    /// Empty descriptor for the class `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attach a class-level declaration.
    #[must_use]
    pub fn declare(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    /// Append a property.
    #[must_use]
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Append an embedded object held by `property`.
    #[must_use]
    pub fn embed(mut self, property: impl Into<String>, class: ClassDescriptor) -> Self {
        self.embedded.push(EmbeddedDescriptor {
            property: property.into(),
            class
        });
        self
    }

    /// Class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class-level declarations in declaration order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Own properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Embedded objects in declaration order of their holding property.
    #[must_use]
    pub fn embedded(&self) -> &[EmbeddedDescriptor] {
        &self.embedded
    }
}
