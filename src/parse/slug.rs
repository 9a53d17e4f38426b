// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[slug(...)]` attribute parsing.
//!
//! # Syntax
//!
//! ```rust,ignore
//! #[slug(
//!     fields = ["title", "code"],
//!     style = "camel",
//!     unique = false,
//!     updatable,
//!     unique_base = "category",
//!     separator = "_",
//!     prefix = "pre-",
//!     suffix = "-suf",
//!     date_format = "Y-m-d",
//!     handlers(
//!         handler(class = "relative", option(name = "relation_field", value = "category")),
//!         handler(class = "tree", option(name = "parent_relation_field", value = "parent"))
//!     )
//! )]
//! slug: String,
//! ```
//!
//! Boolean options accept both `flag` and `flag = bool`. `fields` accepts
//! both `fields = [..]` and `fields(..)`.

use darling::FromMeta;
use syn::{
    Attribute, Expr, ExprArray, ExprLit, Lit, LitStr, Meta, Token, meta::ParseNestedMeta,
    punctuated::Punctuated
};

use crate::declaration::{HandlerDeclaration, HandlerOption, OptionValue, SlugDeclaration, SlugStyle};

/// Parse a `#[slug]` or `#[slug(...)]` attribute.
///
/// The bare word form yields a declaration without source fields, which
/// the slug compiler then rejects.
///
/// # Errors
///
/// Unknown options or malformed values.
pub fn parse_slug(attr: &Attribute) -> syn::Result<SlugDeclaration> {
    let mut declaration = SlugDeclaration::default();

    if let Meta::List(_) = &attr.meta {
        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Err(meta.error("expected slug option name"));
            };

            match ident.to_string().as_str() {
                "fields" => declaration.fields = parse_fields(&meta)?,
                "updatable" => declaration.updatable = parse_flag(&meta)?,
                "unique" => declaration.unique = parse_flag(&meta)?,
                "style" => {
                    let value: LitStr = meta.value()?.parse()?;
                    declaration.style = SlugStyle::from_string(&value.value())
                        .map_err(|e| syn::Error::new(value.span(), e))?;
                }
                "unique_base" => declaration.unique_base = Some(parse_string(&meta)?),
                "separator" => declaration.separator = parse_string(&meta)?,
                "prefix" => declaration.prefix = parse_string(&meta)?,
                "suffix" => declaration.suffix = parse_string(&meta)?,
                "date_format" => declaration.date_format = parse_string(&meta)?,
                "handlers" => {
                    meta.parse_nested_meta(|nested| {
                        if nested.path.is_ident("handler") {
                            declaration.handlers.push(parse_handler(&nested)?);
                            Ok(())
                        } else {
                            Err(nested.error("expected `handler(...)`"))
                        }
                    })?;
                }
                _ => {
                    return Err(meta.error(
                        "unknown slug option, expected: fields, updatable, unique, style, \
                         unique_base, separator, prefix, suffix, date_format, handlers"
                    ));
                }
            }
            Ok(())
        })?;
    }

    Ok(declaration)
}

/// Parse `handler(class = "...", option(name = "...", value = ...))`.
fn parse_handler(meta: &ParseNestedMeta<'_>) -> syn::Result<HandlerDeclaration> {
    let mut class = None;
    let mut options = Vec::new();

    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("class") {
            class = Some(parse_string(&nested)?);
        } else if nested.path.is_ident("option") {
            options.push(parse_option(&nested)?);
        } else {
            return Err(nested.error("unknown handler key, expected: class, option"));
        }
        Ok(())
    })?;

    let Some(class) = class else {
        return Err(meta.error("handler requires `class = \"...\"`"));
    };

    Ok(HandlerDeclaration {
        class,
        options
    })
}

/// Parse `option(name = "...", value = ...)`.
fn parse_option(meta: &ParseNestedMeta<'_>) -> syn::Result<HandlerOption> {
    let mut name = None;
    let mut value = None;

    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("name") {
            name = Some(parse_string(&nested)?);
        } else if nested.path.is_ident("value") {
            let lit: Lit = nested.value()?.parse()?;
            value = Some(option_value(&lit)?);
        } else {
            return Err(nested.error("unknown option key, expected: name, value"));
        }
        Ok(())
    })?;

    match (name, value) {
        (Some(name), Some(value)) => Ok(HandlerOption {
            name,
            value
        }),
        _ => Err(meta.error("option requires both `name` and `value`"))
    }
}

fn option_value(lit: &Lit) -> syn::Result<OptionValue> {
    match lit {
        Lit::Str(s) => Ok(OptionValue::Str(s.value())),
        Lit::Int(i) => Ok(OptionValue::Int(i.base10_parse()?)),
        Lit::Float(f) => Ok(OptionValue::Float(f.base10_parse()?)),
        Lit::Bool(b) => Ok(OptionValue::Bool(b.value)),
        other => Err(syn::Error::new(
            other.span(),
            "option value must be a string, integer, float or bool literal"
        ))
    }
}

fn parse_string(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    let value: LitStr = meta.value()?.parse()?;
    Ok(value.value())
}

/// `flag` or `flag = true|false`.
fn parse_flag(meta: &ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        let value: syn::LitBool = meta.value()?.parse()?;
        Ok(value.value)
    } else {
        Ok(true)
    }
}

/// `fields = ["a", "b"]` or `fields("a", "b")`.
fn parse_fields(meta: &ParseNestedMeta<'_>) -> syn::Result<Vec<String>> {
    if meta.input.peek(Token![=]) {
        let array: ExprArray = meta.value()?.parse()?;
        return array.elems.iter().map(string_element).collect();
    }

    let content;
    syn::parenthesized!(content in meta.input);
    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(list.iter().map(LitStr::value).collect())
}

fn string_element(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal"))
    }
}
