use crate::{
    context::Context,
    ids::{EnumId, StringId, TypeId},
    types::{EnumRecord, TypeRecord},
};
use diagnostics::DatamodelError;
use indexmap::IndexMap;
use schema_ast::ast::{self, WithName, WithSpan};
use std::collections::HashSet;

/// A top level declaration, by kind.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TopRef {
    Type(TypeId),
    Enum(EnumId),
}

/// The names of the top level declarations. Names are unique across all
/// files of a schema.
#[derive(Default)]
pub(crate) struct Names {
    pub(crate) tops: IndexMap<StringId, TopRef>,
}

pub(super) fn resolve_names(ctx: &mut Context<'_>) {
    for (file_id, _, _, ast) in ctx.files.iter() {
        for (top_id, top) in ast.iter_tops() {
            match top {
                ast::Top::Type(decl) => {
                    validate_top_name(decl.name(), "type", decl.name.span, ctx);
                    validate_unique_field_names(decl, ctx);

                    let name = ctx.interner.intern(decl.name());
                    let type_id = TypeId(ctx.types.types.len() as u32);

                    if insert_top(name, TopRef::Type(type_id), decl.name(), decl.name.span, ctx) {
                        ctx.types.types.push(TypeRecord {
                            file_id,
                            top_id,
                            name,
                            db_name: None,
                            is_relation_table: false,
                        });
                    }
                }
                ast::Top::Enum(decl) => {
                    validate_top_name(decl.name(), "enum", decl.name.span, ctx);
                    validate_enum_values(decl, ctx);

                    let name = ctx.interner.intern(decl.name());
                    let enum_id = EnumId(ctx.types.enums.len() as u32);

                    if insert_top(name, TopRef::Enum(enum_id), decl.name(), decl.name.span, ctx) {
                        ctx.types.enums.push(EnumRecord { file_id, top_id, name });
                    }
                }
            }
        }
    }
}

fn insert_top(
    name: StringId,
    top_ref: TopRef,
    name_str: &str,
    span: diagnostics::Span,
    ctx: &mut Context<'_>,
) -> bool {
    if ctx.names.tops.contains_key(&name) {
        ctx.push_error(DatamodelError::new_duplicate_type_error(name_str, span));
        return false;
    }

    ctx.names.tops.insert(name, top_ref);
    true
}

/// Type and enum names are limited to 64 alphanumeric characters and must
/// start with an uppercase letter.
fn validate_top_name(name: &str, container: &str, span: diagnostics::Span, ctx: &mut Context<'_>) {
    if name.len() > 64 {
        ctx.push_error(DatamodelError::new_name_error(
            container,
            name,
            "Type names must be no longer than 64 characters.",
            span,
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        ctx.push_error(DatamodelError::new_name_error(
            container,
            name,
            "Type names may only contain alphanumeric characters.",
            span,
        ));
    }

    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        ctx.push_error(DatamodelError::new_name_error(
            container,
            name,
            "Type names must start with an uppercase letter.",
            span,
        ));
    }
}

fn validate_unique_field_names(decl: &ast::TypeDecl, ctx: &mut Context<'_>) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (_, field) in decl.iter_fields() {
        if !seen.insert(field.name()) {
            ctx.push_error(DatamodelError::new_duplicate_field_error(
                decl.name(),
                field.name(),
                field.name.span,
            ));
        }
    }
}

/// Enum value names are limited to 191 characters, may contain alphanumeric
/// characters and underscores, and must start with an uppercase letter.
fn validate_enum_values(decl: &ast::EnumDecl, ctx: &mut Context<'_>) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (_, value) in decl.iter_values() {
        let name = value.name();

        if !seen.insert(name) {
            ctx.push_error(DatamodelError::new_duplicate_enum_value_error(
                decl.name(),
                name,
                value.span(),
            ));
        }

        if name.len() > 191 {
            ctx.push_error(DatamodelError::new_name_error(
                "enum value",
                name,
                "Enum values must be no longer than 191 characters.",
                value.span(),
            ));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            ctx.push_error(DatamodelError::new_name_error(
                "enum value",
                name,
                "Enum values may only contain alphanumeric characters and underscores.",
                value.span(),
            ));
        }

        if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
            ctx.push_error(DatamodelError::new_name_error(
                "enum value",
                name,
                "Enum values must start with an uppercase letter.",
                value.span(),
            ));
        }
    }
}
