// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tests for slug compilation.
//!
//! # Test Categories
//!
//! | Category | Coverage |
//! |----------|----------|
//! | Resolution | defaults copied, prefixes applied, empty classes |
//! | Target checks | missing target, wrong storage type |
//! | Source checks | empty list, missing source, wrong storage type |
//! | Uniqueness | identifier slugs, `unique_base` consistency and existence |
//! | Handlers | chain order, duplicates, propagation of handler errors |
//! | Ordering | first error wins, own properties before embedded |

use super::*;
use crate::{
    class::{ClassDescriptor, PropertyDescriptor, Visibility},
    declaration::{HandlerDeclaration, OptionValue, SlugDeclaration, SlugStyle},
    error::MappingError,
    schema::{EntitySchema, Schema, StorageType}
};

fn article_schema() -> EntitySchema {
    EntitySchema::new("Article")
        .id("id", StorageType::Integer)
        .field("title", StorageType::String)
        .field("code", StorageType::Text)
        .field("published", StorageType::DateTime)
        .field("slug", StorageType::String)
        .field("flag", StorageType::Boolean)
        .field("address.city", StorageType::String)
        .field("address.city_slug", StorageType::String)
        .to_one("category")
        .to_many("comments")
}

fn article(slug: SlugDeclaration) -> ClassDescriptor {
    ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("id"))
        .property(PropertyDescriptor::new("title"))
        .property(PropertyDescriptor::new("slug").declare(slug))
}

fn compile(class: &ClassDescriptor, schema: &EntitySchema) -> crate::error::Result<SlugMetadata> {
    SlugCompiler::default().compile(class, schema)
}

fn compile_err(class: &ClassDescriptor, schema: &EntitySchema) -> MappingError {
    compile(class, schema).unwrap_err()
}

#[test]
fn class_without_declarations_is_empty() {
    let class = ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("title"))
        .property(PropertyDescriptor::new("slug"));
    let metadata = compile(&class, &article_schema()).unwrap();
    assert!(metadata.is_empty());
}

#[test]
fn resolves_single_field_slug() {
    let class = article(SlugDeclaration::new(["title"]).unique(true));
    let metadata = compile(&class, &article_schema()).unwrap();

    assert_eq!(metadata.len(), 1);
    let config = metadata.get("slug").unwrap();
    assert_eq!(config.slug, "slug");
    assert_eq!(config.fields, ["title"]);
    assert!(config.unique);
    assert!(config.updatable);
    assert_eq!(config.style, SlugStyle::Default);
    assert_eq!(config.separator, "-");
    assert_eq!(config.date_format, "Y-m-d-H:i");
    assert_eq!(config.unique_base, None);
    assert!(config.handlers.is_empty());
}

#[test]
fn copies_declared_options_verbatim() {
    let class = article(
        SlugDeclaration::new(["title", "code", "published"])
            .updatable(false)
            .style(SlugStyle::Camel)
            .separator("_")
            .prefix("pre-")
            .suffix("-suf")
            .unique_base("category")
            .date_format("d/m/Y")
    );
    let config = compile(&class, &article_schema())
        .unwrap()
        .get("slug")
        .cloned()
        .unwrap();

    assert_eq!(config.fields, ["title", "code", "published"]);
    assert!(!config.updatable);
    assert_eq!(config.style, SlugStyle::Camel);
    assert_eq!(config.separator, "_");
    assert_eq!(config.prefix, "pre-");
    assert_eq!(config.suffix, "-suf");
    assert_eq!(config.unique_base.as_deref(), Some("category"));
    assert_eq!(config.date_format, "d/m/Y");
}

#[test]
fn missing_target_field_fails() {
    let class = ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("permalink").declare(SlugDeclaration::new(["title"])));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[permalink]"), "{err}");
    assert!(err.message().contains("Article"), "{err}");
}

#[test]
fn target_with_wrong_storage_type_fails() {
    let class = ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("flag").declare(SlugDeclaration::new(["title"])));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[flag]"), "{err}");
    assert!(err.message().contains("boolean"), "{err}");
}

#[test]
fn every_slug_storage_type_is_accepted() {
    for tag in ["string", "text", "integer", "int", "datetime", "datetimetz", "citext"] {
        let schema = EntitySchema::new("Article")
            .field("title", tag)
            .field("slug", tag);
        let class = article(SlugDeclaration::new(["title"]));
        assert!(compile(&class, &schema).is_ok(), "{tag}");
    }
}

#[test]
fn empty_source_list_fails() {
    let class = article(SlugDeclaration::new(Vec::<String>::new()));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("at least one field"), "{err}");
}

#[test]
fn missing_source_field_fails() {
    let class = article(SlugDeclaration::new(["title", "subtitle"]));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[subtitle]"), "{err}");
}

#[test]
fn source_with_wrong_storage_type_fails() {
    let class = article(SlugDeclaration::new(["flag"]));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[flag]"), "{err}");
}

#[test]
fn association_is_not_a_source_field() {
    let class = article(SlugDeclaration::new(["category"]));
    assert!(compile(&class, &article_schema()).is_err());
}

#[test]
fn non_unique_identifier_slug_fails() {
    let schema = EntitySchema::new("Tag")
        .id("slug", StorageType::String)
        .field("name", StorageType::String);
    let class = ClassDescriptor::new("Tag")
        .property(PropertyDescriptor::new("slug").declare(SlugDeclaration::new(["name"]).unique(false)))
        .property(PropertyDescriptor::new("name"));

    let err = compile(&class, &schema).unwrap_err();
    assert!(err.message().contains("Identifier field - [slug]"), "{err}");
}

#[test]
fn unique_identifier_slug_passes() {
    let schema = EntitySchema::new("Tag")
        .id("slug", StorageType::String)
        .field("name", StorageType::String);
    let class = ClassDescriptor::new("Tag")
        .property(PropertyDescriptor::new("slug").declare(SlugDeclaration::new(["name"])));

    assert!(compile(&class, &schema).unwrap().contains("slug"));
}

#[test]
fn non_unique_slug_off_identifier_passes() {
    let class = article(SlugDeclaration::new(["title"]).unique(false));
    let config = compile(&class, &article_schema()).unwrap();
    assert!(!config.get("slug").unwrap().unique);
}

#[test]
fn unique_base_requires_unique() {
    for base in ["category", "not_mapped"] {
        let class = article(SlugDeclaration::new(["title"]).unique(false).unique_base(base));
        let err = compile_err(&class, &article_schema());
        assert!(err.message().contains("[unique_base]"), "{err}");
    }
}

#[test]
fn unique_base_must_exist() {
    let class = article(SlugDeclaration::new(["title"]).unique_base("owner"));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[owner]"), "{err}");
}

#[test]
fn unique_base_accepts_field_or_association() {
    for base in ["code", "category", "comments"] {
        let class = article(SlugDeclaration::new(["title"]).unique_base(base));
        let metadata = compile(&class, &article_schema()).unwrap();
        assert_eq!(metadata.get("slug").unwrap().unique_base.as_deref(), Some(base));
    }
}

#[test]
fn empty_unique_base_is_absent() {
    let class = article(SlugDeclaration::new(["title"]).unique(false).unique_base(""));
    let metadata = compile(&class, &article_schema()).unwrap();
    assert_eq!(metadata.get("slug").unwrap().unique_base, None);
}

#[test]
fn embedded_slug_is_prefixed() {
    let class = ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("title"))
        .embed(
            "address",
            ClassDescriptor::new("Address")
                .property(PropertyDescriptor::new("city"))
                .property(
                    PropertyDescriptor::new("city_slug").declare(SlugDeclaration::new(["city"]))
                )
        );
    let metadata = compile(&class, &article_schema()).unwrap();

    let config = metadata.get("address.city_slug").unwrap();
    assert_eq!(config.slug, "address.city_slug");
    assert_eq!(config.fields, ["address.city"]);
}

#[test]
fn embedded_source_is_resolved_inside_embedded_object() {
    let class = ClassDescriptor::new("Article").embed(
        "address",
        ClassDescriptor::new("Address")
            .property(PropertyDescriptor::new("city_slug").declare(SlugDeclaration::new(["title"])))
    );
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[address.title]"), "{err}");
}

#[test]
fn several_slugs_keep_declaration_order() {
    let schema = article_schema().field("code_slug", StorageType::String);
    let class = ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("slug").declare(SlugDeclaration::new(["title"])))
        .property(PropertyDescriptor::new("code_slug").declare(SlugDeclaration::new(["code"])))
        .embed(
            "address",
            ClassDescriptor::new("Address").property(
                PropertyDescriptor::new("city_slug").declare(SlugDeclaration::new(["city"]))
            )
        );
    let metadata = compile(&class, &schema).unwrap();
    assert_eq!(
        metadata.fields().collect::<Vec<_>>(),
        ["slug", "code_slug", "address.city_slug"]
    );
}

#[test]
fn first_declaration_wins() {
    let class = ClassDescriptor::new("Article").property(
        PropertyDescriptor::new("slug")
            .declare(SlugDeclaration::new(["title"]))
            .declare(SlugDeclaration::new(["missing"]))
    );
    let metadata = compile(&class, &article_schema()).unwrap();
    assert_eq!(metadata.get("slug").unwrap().fields, ["title"]);
}

#[test]
fn first_invalid_target_is_reported() {
    let class = ClassDescriptor::new("Article")
        .property(PropertyDescriptor::new("flag").declare(SlugDeclaration::new(["title"])))
        .property(PropertyDescriptor::new("slug").declare(SlugDeclaration::new(Vec::<String>::new())));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[flag]"), "{err}");
}

#[test]
fn inherited_and_superclass_properties_are_skipped() {
    let schema = EntitySchema::new("Base")
        .mapped_superclass()
        .field("title", StorageType::String)
        .field("slug", StorageType::String);
    let class = ClassDescriptor::new("Base").property(
        PropertyDescriptor::new("slug")
            .visibility(Visibility::Protected)
            .declare(SlugDeclaration::new(["missing"]))
    );
    assert!(compile(&class, &schema).unwrap().is_empty());

    let schema = EntitySchema::new("Post")
        .field("title", StorageType::String)
        .inherited_field("slug", StorageType::String);
    let class = ClassDescriptor::new("Post").property(
        PropertyDescriptor::new("slug").declare(SlugDeclaration::new(["missing"]))
    );
    assert!(compile(&class, &schema).unwrap().is_empty());
}

#[test]
fn handler_chain_is_resolved_in_order() {
    let class = article(
        SlugDeclaration::new(["title"])
            .handler(HandlerDeclaration::new("tree").option("parent_relation_field", "category"))
            .handler(
                HandlerDeclaration::new("relative")
                    .option("relation_field", "category")
                    .option("separator", "/")
                    .option("separator", "-")
            )
    );
    let config = compile(&class, &article_schema())
        .unwrap()
        .get("slug")
        .cloned()
        .unwrap();

    let classes: Vec<_> = config.handlers.iter().map(|h| h.class.as_str()).collect();
    assert_eq!(classes, ["tree", "relative"]);
    let relative = config.handler("relative").unwrap();
    assert_eq!(relative["separator"], OptionValue::from("-"));
    assert_eq!(relative["relation_field"], OptionValue::from("category"));
}

#[test]
fn repeated_handler_keeps_position_and_last_options() {
    let class = article(
        SlugDeclaration::new(["title"])
            .handler(HandlerDeclaration::new("relative").option("relation_field", "category"))
            .handler(HandlerDeclaration::new("tree").option("parent_relation_field", "category"))
            .handler(
                HandlerDeclaration::new("relative")
                    .option("relation_field", "category")
                    .option("urilize", true)
            )
    );
    let config = compile(&class, &article_schema())
        .unwrap()
        .get("slug")
        .cloned()
        .unwrap();

    assert_eq!(config.handlers.len(), 2);
    assert_eq!(config.handlers[0].class, "relative");
    assert_eq!(
        config.handlers[0].options.get("urilize"),
        Some(&OptionValue::Bool(true))
    );
}

#[test]
fn handler_errors_propagate() {
    let class = article(
        SlugDeclaration::new(["title"])
            .handler(HandlerDeclaration::new("relative").option("relation_field", "comments"))
    );
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("[comments]"), "{err}");

    let class = article(SlugDeclaration::new(["title"]).handler(HandlerDeclaration::new("")));
    let err = compile_err(&class, &article_schema());
    assert!(err.message().contains("non-empty handler name"), "{err}");
}

#[test]
fn custom_registry_is_used() {
    let registry = HandlerRegistry::empty().register(
        "locale",
        |options: &HandlerOptions, schema: &dyn Schema| -> crate::error::Result<()> {
            match options.get("locale") {
                Some(_) => Ok(()),
                None => Err(MappingError::invalid(format!(
                    "locale is required in {}",
                    schema.class_name()
                )))
            }
        }
    );
    let compiler = SlugCompiler::new(registry);
    assert!(compiler.handlers().contains("locale"));

    let ok = article(
        SlugDeclaration::new(["title"]).handler(HandlerDeclaration::new("locale").option("locale", "en"))
    );
    assert!(compiler.compile(&ok, &article_schema()).is_ok());

    let missing = article(SlugDeclaration::new(["title"]).handler(HandlerDeclaration::new("locale")));
    assert_eq!(
        compiler.compile(&missing, &article_schema()).unwrap_err(),
        MappingError::invalid("locale is required in Article")
    );

    let builtin = article(
        SlugDeclaration::new(["title"])
            .handler(HandlerDeclaration::new("tree").option("parent_relation_field", "category"))
    );
    assert!(compiler.compile(&builtin, &article_schema()).is_err());
}

#[test]
fn compilation_is_idempotent() {
    let class = article(
        SlugDeclaration::new(["title", "published"])
            .date_format("Y")
            .handler(HandlerDeclaration::new("relative").option("relation_field", "category"))
    );
    let schema = article_schema();
    assert_eq!(compile(&class, &schema), compile(&class, &schema));
}
