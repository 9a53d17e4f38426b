// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed behaviour declarations and their extraction.
//!
//! Declarations capture developer intent before validation. They are plain,
//! immutable values tagged by behaviour kind, so the compilers never inspect
//! raw attribute syntax.
//!
//! # Data Structures
//!
//! ```text
//! Declaration
//! ├── Slug(SlugDeclaration)
//! │   ├── fields: Vec<String>
//! │   ├── style, unique, unique_base, updatable
//! │   ├── separator, prefix, suffix, date_format
//! │   └── handlers: Vec<HandlerDeclaration>
//! │       └── options: Vec<HandlerOption { name, value }>
//! └── SoftDeleteable(SoftDeleteableDeclaration)
//!     └── field_name, time_aware, hard_delete
//! ```
//!
//! # Extraction Rule
//!
//! A target holds zero or more declarations of each kind. Only the first one
//! of a kind is used; the rest are ignored with a warning.

mod slug;
mod soft_deleteable;

pub use slug::{HandlerDeclaration, HandlerOption, OptionValue, SlugDeclaration, SlugStyle};
pub use soft_deleteable::SoftDeleteableDeclaration;

/// Behaviour kind of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `#[slug(...)]` on a property.
    Slug,
    /// `#[soft_deleteable(...)]` on a class.
    SoftDeleteable
}

impl DeclarationKind {
    /// Attribute name used in source declarations.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::SoftDeleteable => "soft_deleteable"
        }
    }
}

/// A declaration attached to a class or property.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// Sluggable behaviour.
    Slug(SlugDeclaration),
    /// Soft-deleteable behaviour.
    SoftDeleteable(SoftDeleteableDeclaration)
}

impl Declaration {
    /// Behaviour kind of this declaration.
    #[must_use]
    pub const fn kind(&self) -> DeclarationKind {
        match self {
            Self::Slug(_) => DeclarationKind::Slug,
            Self::SoftDeleteable(_) => DeclarationKind::SoftDeleteable
        }
    }
}

impl From<SlugDeclaration> for Declaration {
    fn from(value: SlugDeclaration) -> Self {
        Self::Slug(value)
    }
}

impl From<SoftDeleteableDeclaration> for Declaration {
    fn from(value: SoftDeleteableDeclaration) -> Self {
        Self::SoftDeleteable(value)
    }
}

/// A declaration type that can be picked out of a [`Declaration`] list.
pub trait Declared: Sized {
    /// Kind this type represents.
    const KIND: DeclarationKind;

    /// Borrow `self` out of `declaration` if the kinds match.
    fn from_declaration(declaration: &Declaration) -> Option<&Self>;
}

impl Declared for SlugDeclaration {
    const KIND: DeclarationKind = DeclarationKind::Slug;

    fn from_declaration(declaration: &Declaration) -> Option<&Self> {
        match declaration {
            Declaration::Slug(slug) => Some(slug),
            _ => None
        }
    }
}

impl Declared for SoftDeleteableDeclaration {
    const KIND: DeclarationKind = DeclarationKind::SoftDeleteable;

    fn from_declaration(declaration: &Declaration) -> Option<&Self> {
        match declaration {
            Declaration::SoftDeleteable(decl) => Some(decl),
            _ => None
        }
    }
}

/// Extract the first declaration of kind `D` from `declarations`.
///
/// `target` names the class or property the declarations belong to and is
/// only used for diagnostics. Later declarations of the same kind are ignored.
///
/// # Examples
///
/// ```rust,ignore
/// let slug = extract::<SlugDeclaration>("Article::slug", property.declarations());
/// ```
pub fn extract<'a, D: Declared>(target: &str, declarations: &'a [Declaration]) -> Option<&'a D> {
    let mut found = declarations.iter().filter_map(D::from_declaration);
    let first = found.next()?;

    let ignored = found.count();
    if ignored > 0 {
        tracing::warn!(
            target_name = target,
            kind = D::KIND.attribute(),
            ignored,
            "multiple declarations of the same kind, only the first is used"
        );
    }

    Some(first)
}
