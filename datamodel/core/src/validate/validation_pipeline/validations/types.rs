use crate::validate::validation_pipeline::context::Context;
use diagnostics::DatamodelError;
use parser_database::walkers::TypeWalker;

/// Every entity type must have exactly one `@id` field.
pub(super) fn has_exactly_one_id_field(ty: TypeWalker<'_>, ctx: &mut Context<'_>) {
    if ty.is_relation_table() {
        return;
    }

    let id_fields: Vec<_> = ty.scalar_fields().filter(|field| field.is_id()).collect();

    match id_fields.len() {
        1 => (),
        0 => ctx.push_error(DatamodelError::new_type_validation_error(
            "One field must be marked with `@id`.",
            ty.name(),
            ty.ast_type().name.span,
        )),
        _ => {
            for field in id_fields {
                ctx.push_error(DatamodelError::new_field_validation_error(
                    "At most one field can be marked with `@id`.",
                    ty.name(),
                    field.name(),
                    field.ast_field().name.span,
                ));
            }
        }
    }
}

/// A `@relationTable` type is a join table: exactly two required,
/// single-valued relation fields and nothing else.
pub(super) fn relation_table_shape(ty: TypeWalker<'_>, ctx: &mut Context<'_>) {
    if !ty.is_relation_table() {
        return;
    }

    if ty.relation_fields().count() != 2 {
        ctx.push_error(DatamodelError::new_type_validation_error(
            "A relation table type must have exactly two relation fields.",
            ty.name(),
            ty.ast_type().name.span,
        ));
    }

    for field in ty.scalar_fields() {
        ctx.push_error(DatamodelError::new_field_validation_error(
            "A relation table type must not have scalar fields.",
            ty.name(),
            field.name(),
            field.ast_field().name.span,
        ));
    }

    for field in ty.relation_fields() {
        if !field.arity().is_required() {
            ctx.push_error(DatamodelError::new_field_validation_error(
                "The fields of a relation table type must be required, single-valued relation fields.",
                ty.name(),
                field.name(),
                field.ast_field().field_type.span,
            ));
        }
    }
}
