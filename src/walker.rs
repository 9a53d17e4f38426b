// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Reflection walker.
//!
//! Enumerates the properties a compiler should look at, in the order errors
//! must be reported:
//!
//! 1. Own properties of the class, minus those whose mapping is inherited
//!    and, on a mapped superclass, minus non-private ones (each subclass
//!    processes those itself).
//! 2. For each embedded object, in declaration order of its holding
//!    property, every property of the embedded class addressed as
//!    `<holder>.<inner>`.
//!
//! Embedding is expanded one level deep.

use crate::{
    class::{ClassDescriptor, PropertyDescriptor},
    schema::Schema
};

/// A property to inspect, together with its embedding prefix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target<'a> {
    prefix:   Option<&'a str>,
    property: &'a PropertyDescriptor
}

impl<'a> Target<'a> {
    /// Holding property name for embedded targets.
    #[must_use]
    pub fn prefix(&self) -> Option<&'a str> {
        self.prefix
    }

    /// The property itself.
    #[must_use]
    pub fn property(&self) -> &'a PropertyDescriptor {
        self.property
    }

    /// Qualify `name` with this target's prefix.
    ///
    /// ```rust,ignore
    /// // target `address.city_slug`
    /// assert_eq!(target.qualify("city"), "address.city");
    /// ```
    #[must_use]
    pub fn qualify(&self, name: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.to_string()
        }
    }

    /// Schema path of the property.
    #[must_use]
    pub fn field_path(&self) -> String {
        self.qualify(self.property.name())
    }
}

/// Enumerate the candidate targets of `class`.
pub fn walk<'a>(class: &'a ClassDescriptor, schema: &dyn Schema) -> Vec<Target<'a>> {
    let own = class
        .properties()
        .iter()
        .filter(|property| !skip_own(property, schema))
        .map(|property| Target {
            prefix: None,
            property
        });

    let embedded = class.embedded().iter().flat_map(|embedded| {
        embedded
            .class()
            .properties()
            .iter()
            .map(move |property| Target {
                prefix: Some(embedded.property()),
                property
            })
    });

    own.chain(embedded).collect()
}

fn skip_own(property: &PropertyDescriptor, schema: &dyn Schema) -> bool {
    schema.own_property_is_inherited_mapping(property.name())
        || (schema.is_mapped_superclass() && !property.is_private())
}
