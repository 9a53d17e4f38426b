// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Slug declaration values.
//!
//! # Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | `updatable` | `true` |
//! | `style` | [`SlugStyle::Default`] |
//! | `unique` | `true` |
//! | `unique_base` | none |
//! | `separator` | `"-"` |
//! | `prefix` / `suffix` | `""` |
//! | `handlers` | none |
//! | `date_format` | `"Y-m-d-H:i"` |

use std::fmt;

use darling::FromMeta;

/// Default separator between slug words.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Default format applied when a source field is temporal.
pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d-H:i";

/// Naming style of the generated slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlugStyle {
    /// Lowercase words joined by the separator.
    #[default]
    Default,

    /// camelCase words joined by the separator.
    Camel
}

impl SlugStyle {
    /// Style name as written in declarations.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Camel => "camel"
        }
    }
}

impl fmt::Display for SlugStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromMeta for SlugStyle {
    /// Accepts `"default"` and `"camel"`, case-insensitive.
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "camel" => Ok(Self::Camel),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Literal value of a handler option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OptionValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool)
}

impl OptionValue {
    /// String content, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None
        }
    }

    /// Boolean content, if this is a boolean value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}")
        }
    }
}

/// A named option of a handler declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerOption {
    /// Option name. Must not be empty.
    pub name: String,

    /// Option value.
    pub value: OptionValue
}

impl HandlerOption {
    /// Create an option.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name:  name.into(),
            value: value.into()
        }
    }
}

/// A handler attached to a slug.
///
/// Options are kept as declared, duplicates included. Collapsing them into a
/// map happens during validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandlerDeclaration {
    /// Handler identifier, resolved through the handler registry.
    pub class: String,

    /// Options in declaration order.
    pub options: Vec<HandlerOption>
}

impl HandlerDeclaration {
    /// Create a handler declaration without options.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class:   class.into(),
            options: Vec::new()
        }
    }

    /// Append an option.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.push(HandlerOption::new(name, value));
        self
    }
}

/// Slug declaration on a target property.
///
/// # Examples
///
/// ```rust,ignore
/// let decl = SlugDeclaration::new(["title", "code"])
///     .separator("_")
///     .unique_base("category")
///     .handler(HandlerDeclaration::new("relative").option("relation_field", "category"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlugDeclaration {
    /// Source field names, relative to the target's owner.
    pub fields: Vec<String>,

    /// Regenerate the slug when sources change.
    pub updatable: bool,

    /// Naming style.
    pub style: SlugStyle,

    /// Enforce uniqueness of generated slugs.
    pub unique: bool,

    /// Field or association partitioning the uniqueness check.
    pub unique_base: Option<String>,

    /// Word separator.
    pub separator: String,

    /// Literal prefix.
    pub prefix: String,

    /// Literal suffix.
    pub suffix: String,

    /// Post-processing handlers in chain order.
    pub handlers: Vec<HandlerDeclaration>,

    /// Format for temporal source fields. Copied verbatim.
    pub date_format: String
}

impl SlugDeclaration {
    /// Create a declaration over `fields` with default options.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the updatable flag.
    #[must_use]
    pub fn updatable(mut self, updatable: bool) -> Self {
        self.updatable = updatable;
        self
    }

    /// Set the naming style.
    #[must_use]
    pub fn style(mut self, style: SlugStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the uniqueness flag.
    #[must_use]
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Set the uniqueness scope.
    #[must_use]
    pub fn unique_base(mut self, base: impl Into<String>) -> Self {
        self.unique_base = Some(base.into());
        self
    }

    /// Set the separator.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Append a handler to the chain.
    #[must_use]
    pub fn handler(mut self, handler: HandlerDeclaration) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Set the date format.
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}

impl Default for SlugDeclaration {
    fn default() -> Self {
        Self {
            fields:      Vec::new(),
            updatable:   true,
            style:       SlugStyle::Default,
            unique:      true,
            unique_base: None,
            separator:   DEFAULT_SEPARATOR.to_string(),
            prefix:      String::new(),
            suffix:      String::new(),
            handlers:    Vec::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string()
        }
    }
}
