// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage type tags.
//!
//! # Whitelists
//!
//! | Tag | Slug storage | Temporal |
//! |-----|:---:|:---:|
//! | `string`, `text`, `citext` | yes | |
//! | `integer`, `int` | yes | |
//! | `datetime`, `datetimetz` | yes | yes |
//! | `date`, `time`, `timestamp` | | yes |
//! | `*_immutable` variants | | yes |

use std::{convert::Infallible, fmt, str::FromStr};

use darling::FromMeta;

/// Storage type of a mapped field.
///
/// Parsing never fails: tags outside the known set are kept verbatim as
/// [`StorageType::Other`] so that the whitelists reject them with a proper
/// mapping error instead of a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageType {
    String,
    Text,
    Citext,
    Integer,
    Int,
    SmallInt,
    BigInt,
    Boolean,
    Float,
    Decimal,
    Json,
    Guid,
    Date,
    DateImmutable,
    Time,
    TimeImmutable,
    DateTime,
    DateTimeImmutable,
    DateTimeTz,
    DateTimeTzImmutable,
    Timestamp,
    /// Any tag not known to this crate.
    Other(String)
}

impl StorageType {
    /// Canonical tag as reported by the persistence layer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Citext => "citext",
            Self::Integer => "integer",
            Self::Int => "int",
            Self::SmallInt => "smallint",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Json => "json",
            Self::Guid => "guid",
            Self::Date => "date",
            Self::DateImmutable => "date_immutable",
            Self::Time => "time",
            Self::TimeImmutable => "time_immutable",
            Self::DateTime => "datetime",
            Self::DateTimeImmutable => "datetime_immutable",
            Self::DateTimeTz => "datetimetz",
            Self::DateTimeTzImmutable => "datetimetz_immutable",
            Self::Timestamp => "timestamp",
            Self::Other(tag) => tag
        }
    }

    /// Whether a slug may be stored in, or generated from, this type.
    #[must_use]
    pub fn is_slug_storage(&self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Text
                | Self::Integer
                | Self::Int
                | Self::DateTime
                | Self::DateTimeTz
                | Self::Citext
        )
    }

    /// Whether this type holds a date and/or time.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date
                | Self::DateImmutable
                | Self::Time
                | Self::TimeImmutable
                | Self::DateTime
                | Self::DateTimeImmutable
                | Self::DateTimeTz
                | Self::DateTimeTzImmutable
                | Self::Timestamp
        )
    }
}

impl FromStr for StorageType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "string" => Self::String,
            "text" => Self::Text,
            "citext" => Self::Citext,
            "integer" => Self::Integer,
            "int" => Self::Int,
            "smallint" => Self::SmallInt,
            "bigint" => Self::BigInt,
            "boolean" | "bool" => Self::Boolean,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "json" => Self::Json,
            "guid" => Self::Guid,
            "date" => Self::Date,
            "date_immutable" => Self::DateImmutable,
            "time" => Self::Time,
            "time_immutable" => Self::TimeImmutable,
            "datetime" => Self::DateTime,
            "datetime_immutable" => Self::DateTimeImmutable,
            "datetimetz" => Self::DateTimeTz,
            "datetimetz_immutable" => Self::DateTimeTzImmutable,
            "timestamp" => Self::Timestamp,
            _ => Self::Other(s.to_string())
        })
    }
}

impl From<&str> for StorageType {
    fn from(tag: &str) -> Self {
        match tag.parse() {
            Ok(ty) => ty,
            Err(never) => match never {}
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromMeta for StorageType {
    fn from_string(value: &str) -> darling::Result<Self> {
        Ok(Self::from(value))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StorageType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
