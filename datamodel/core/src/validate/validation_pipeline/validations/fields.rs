use crate::validate::validation_pipeline::context::Context;
use diagnostics::{DatamodelError, DatamodelWarning, Span};
use parser_database::{ScalarFieldType, ScalarType, walkers::ScalarFieldWalker};
use schema_ast::ast;
use storage_schema::{INT4_MAX, INT4_MIN};

/// `@id` fields must be declared as `ID!`.
pub(super) fn id_field_shape(field: ScalarFieldWalker<'_>, ctx: &mut Context<'_>) {
    if !field.is_id() {
        return;
    }

    if field.scalar_type() != Some(ScalarType::Id) || !field.arity().is_required() {
        ctx.push_error(DatamodelError::new_field_validation_error(
            "Fields marked with `@id` must have type `ID!`.",
            field.containing_type().name(),
            field.name(),
            field.ast_field().field_type.span,
        ));
    }
}

/// `@createdAt` and `@updatedAt` fields must be declared as `DateTime!`.
pub(super) fn timestamp_directive_shape(field: ScalarFieldWalker<'_>, ctx: &mut Context<'_>) {
    let directive = if field.is_created_at() {
        "createdAt"
    } else if field.is_updated_at() {
        "updatedAt"
    } else {
        return;
    };

    if field.scalar_type() != Some(ScalarType::DateTime) || !field.arity().is_required() {
        ctx.push_error(DatamodelError::new_directive_validation_error(
            "The field must have type `DateTime!`.",
            directive,
            field.ast_field().field_type.span,
        ));
    }
}

/// Scalar list fields must declare their storage strategy, and the
/// strategy directive only makes sense on lists.
pub(super) fn scalar_list_strategy(field: ScalarFieldWalker<'_>, ctx: &mut Context<'_>) {
    if field.arity().is_list() && !field.is_scalar_list() {
        ctx.push_error(DatamodelError::new_field_validation_error(
            "Scalar list fields must specify `@scalarList(strategy: RELATION)`.",
            field.containing_type().name(),
            field.name(),
            field.ast_field().field_type.span,
        ));
    }

    if field.is_scalar_list() && !field.arity().is_list() {
        ctx.push_error(DatamodelError::new_directive_validation_error(
            "The directive can only be used on list fields.",
            "scalarList",
            field.ast_field().name.span,
        ));
    }
}

/// The `@default` literal must match the field's scalar type.
pub(super) fn default_value_matches_type(field: ScalarFieldWalker<'_>, ctx: &mut Context<'_>) {
    let Some(value) = field.default_value() else { return };

    match field.scalar_field_type() {
        ScalarFieldType::Enum(enum_id) => {
            let r#enum = field.walk(enum_id);
            match value.as_constant_value() {
                Some((constant, _)) if r#enum.values().any(|v| v == constant) => (),
                _ => ctx.push_error(DatamodelError::new_default_value_error(
                    &format!(
                        "The value `{value}` is not a value of enum \"{}\".",
                        r#enum.name()
                    ),
                    value.span(),
                )),
            }
        }
        ScalarFieldType::Scalar(ScalarType::String) => {
            if value.as_string_value().is_none() {
                push_type_mismatch(value, "a string", ctx);
            }
        }
        ScalarFieldType::Scalar(ScalarType::Json) => match value.as_string_value() {
            Some((contents, span)) => {
                if serde_json::from_str::<serde_json::Value>(contents).is_err() {
                    ctx.push_error(DatamodelError::new_default_value_error(
                        "The value is not valid JSON.",
                        span,
                    ));
                }
            }
            None => push_type_mismatch(value, "a JSON string", ctx),
        },
        ScalarFieldType::Scalar(ScalarType::Int) => match value.as_numeric_value() {
            Some((number, span)) => match number.parse::<i64>() {
                Ok(number) if (INT4_MIN..=INT4_MAX).contains(&number) => (),
                _ => ctx.push_error(DatamodelError::new_default_value_error(
                    &format!("The value `{number}` is out of range for Int fields."),
                    span,
                )),
            },
            None => push_type_mismatch(value, "an integer", ctx),
        },
        ScalarFieldType::Scalar(ScalarType::Id) => match value.as_numeric_value() {
            Some((number, span)) => {
                if number.parse::<i64>().is_err() {
                    ctx.push_error(DatamodelError::new_default_value_error(
                        "The default value of an ID field must be an integer.",
                        span,
                    ));
                }
            }
            None => ctx.push_error(DatamodelError::new_default_value_error(
                "The default value of an ID field must be an integer.",
                value.span(),
            )),
        },
        ScalarFieldType::Scalar(ScalarType::Float) => {
            if value.as_numeric_value().is_none() {
                push_type_mismatch(value, "a number", ctx);
            }
        }
        ScalarFieldType::Scalar(ScalarType::Boolean) => match value.as_constant_value() {
            Some(("true" | "false", _)) => (),
            _ => push_type_mismatch(value, "`true` or `false`", ctx),
        },
        ScalarFieldType::Scalar(ScalarType::DateTime) => match value.as_string_value() {
            Some((datetime, span)) => {
                if chrono::DateTime::parse_from_rfc3339(datetime).is_err() {
                    ctx.push_error(DatamodelError::new_default_value_error(
                        &format!("The value `{datetime}` is not a valid ISO-8601 datetime."),
                        span,
                    ));
                }
            }
            None => push_type_mismatch(value, "an ISO-8601 datetime string", ctx),
        },
    }
}

fn push_type_mismatch(value: &ast::Expression, expected: &str, ctx: &mut Context<'_>) {
    ctx.push_error(DatamodelError::new_default_value_error(
        &format!(
            "Expected {expected}, but received {} value `{value}`.",
            value.describe_value_type()
        ),
        value.span(),
    ));
}

/// Lists are always required at the outer level; `[T]` without the outer
/// `!` is accepted but only as a spelling of the same thing.
pub(super) fn list_field_arity_warning(name: &str, arity: ast::FieldArity, span: Span, ctx: &mut Context<'_>) {
    if let ast::FieldArity::List { list_required: false, .. } = arity {
        ctx.push_warning(DatamodelWarning::new_list_field_not_required(name, span));
    }
}
