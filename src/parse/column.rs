// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistent mapping attributes: `#[column]` and `#[association]`.
//!
//! # Type Inference
//!
//! When `#[column]` does not name a type, it is derived from the Rust type:
//!
//! | Rust Type | Storage Type |
//! |-----------|--------------|
//! | `String`, `str` | `string` |
//! | `i8`, `i16`, `i32`, `u8`, `u16`, `u32` | `integer` |
//! | `i64`, `u64` | `bigint` |
//! | `f32`, `f64` | `float` |
//! | `bool` | `boolean` |
//! | `Uuid` | `guid` |
//! | `DateTime<Tz>` | `datetimetz` |
//! | `NaiveDateTime` | `datetime` |
//! | `NaiveDate` | `date` |
//! | `NaiveTime` | `time` |
//! | `Decimal` | `decimal` |
//! | `Value`, `Json` | `json` |
//! | `Option<T>` | storage of `T` |
//! | anything else | `text` |

use syn::{Attribute, Meta, Type};

use crate::schema::StorageType;

/// Parsed `#[column(...)]` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnAttr {
    /// Explicit storage type from `type = "..."`.
    pub storage: Option<StorageType>
}

impl ColumnAttr {
    /// Parse `#[column]` or `#[column(type = "...")]`.
    ///
    /// # Errors
    ///
    /// Unknown options or a non-string type.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut column = Self::default();

        if let Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    column.storage = Some(StorageType::from(value.value().as_str()));
                    Ok(())
                } else {
                    Err(meta.error("unknown column option, expected: type"))
                }
            })?;
        }

        Ok(column)
    }

    /// Explicit storage type, or the one inferred from `ty`.
    #[must_use]
    pub fn storage_for(&self, ty: &Type) -> StorageType {
        self.storage.clone().unwrap_or_else(|| infer_storage(ty))
    }
}

/// Parsed `#[association(...)]` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssociationAttr {
    /// `to_many` flag; associations are to-one by default.
    pub to_many: bool,

    /// `inherited` flag.
    pub inherited: bool
}

impl AssociationAttr {
    /// Parse `#[association]` or `#[association(to_many, inherited)]`.
    ///
    /// # Errors
    ///
    /// Unknown flags.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut association = Self::default();

        if let Meta::List(_) = &attr.meta {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("to_many") {
                    association.to_many = true;
                } else if meta.path.is_ident("to_one") {
                    association.to_many = false;
                } else if meta.path.is_ident("inherited") {
                    association.inherited = true;
                } else {
                    return Err(meta.error(
                        "unknown association option, expected: to_one, to_many, inherited"
                    ));
                }
                Ok(())
            })?;
        }

        Ok(association)
    }
}

/// Infer the storage type of a Rust field type.
#[must_use]
pub fn infer_storage(ty: &Type) -> StorageType {
    if let Some(inner) = extract_option_inner(ty) {
        return infer_storage(inner);
    }

    let Type::Path(type_path) = ty else {
        return StorageType::Text;
    };
    let Some(last) = type_path.path.segments.last() else {
        return StorageType::Text;
    };

    match last.ident.to_string().as_str() {
        "String" | "str" => StorageType::String,
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => StorageType::Integer,
        "i64" | "u64" => StorageType::BigInt,
        "f32" | "f64" => StorageType::Float,
        "bool" => StorageType::Boolean,
        "Uuid" => StorageType::Guid,
        "DateTime" => StorageType::DateTimeTz,
        "NaiveDateTime" => StorageType::DateTime,
        "NaiveDate" => StorageType::Date,
        "NaiveTime" => StorageType::Time,
        "Decimal" | "BigDecimal" => StorageType::Decimal,
        "Value" | "Json" => StorageType::Json,
        _ => StorageType::Text
    }
}

/// Extract the inner type from `Option<T>`.
fn extract_option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn infer(ty: Type) -> StorageType {
        infer_storage(&ty)
    }

    #[test]
    fn infer_strings_and_numbers() {
        assert_eq!(infer(parse_quote!(String)), StorageType::String);
        assert_eq!(infer(parse_quote!(i32)), StorageType::Integer);
        assert_eq!(infer(parse_quote!(u16)), StorageType::Integer);
        assert_eq!(infer(parse_quote!(i64)), StorageType::BigInt);
        assert_eq!(infer(parse_quote!(f64)), StorageType::Float);
        assert_eq!(infer(parse_quote!(bool)), StorageType::Boolean);
    }

    #[test]
    fn infer_temporal() {
        assert_eq!(infer(parse_quote!(DateTime<Utc>)), StorageType::DateTimeTz);
        assert_eq!(
            infer(parse_quote!(chrono::NaiveDateTime)),
            StorageType::DateTime
        );
        assert_eq!(infer(parse_quote!(NaiveDate)), StorageType::Date);
        assert_eq!(infer(parse_quote!(NaiveTime)), StorageType::Time);
    }

    #[test]
    fn infer_unwraps_option() {
        assert_eq!(
            infer(parse_quote!(Option<DateTime<Utc>>)),
            StorageType::DateTimeTz
        );
        assert_eq!(infer(parse_quote!(Option<String>)), StorageType::String);
    }

    #[test]
    fn infer_falls_back_to_text() {
        assert_eq!(infer(parse_quote!(Vec<u8>)), StorageType::Text);
        assert_eq!(infer(parse_quote!((i32, i32))), StorageType::Text);
    }

    #[test]
    fn column_explicit_type() {
        let attr: Attribute = parse_quote!(#[column(type = "citext")]);
        let column = ColumnAttr::from_attr(&attr).unwrap();
        assert_eq!(column.storage, Some(StorageType::Citext));
        assert_eq!(column.storage_for(&parse_quote!(String)), StorageType::Citext);
    }

    #[test]
    fn column_word_infers() {
        let attr: Attribute = parse_quote!(#[column]);
        let column = ColumnAttr::from_attr(&attr).unwrap();
        assert_eq!(column.storage, None);
        assert_eq!(column.storage_for(&parse_quote!(i32)), StorageType::Integer);
    }

    #[test]
    fn column_unknown_option() {
        let attr: Attribute = parse_quote!(#[column(length = 10)]);
        assert!(ColumnAttr::from_attr(&attr).is_err());
    }

    #[test]
    fn association_flags() {
        let attr: Attribute = parse_quote!(#[association]);
        assert_eq!(
            AssociationAttr::from_attr(&attr).unwrap(),
            AssociationAttr::default()
        );

        let attr: Attribute = parse_quote!(#[association(to_many, inherited)]);
        let association = AssociationAttr::from_attr(&attr).unwrap();
        assert!(association.to_many);
        assert!(association.inherited);

        let attr: Attribute = parse_quote!(#[association(eager)]);
        assert!(AssociationAttr::from_attr(&attr).is_err());
    }
}
