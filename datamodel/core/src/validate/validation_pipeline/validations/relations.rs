use crate::validate::validation_pipeline::context::Context;
use diagnostics::{DatamodelError, Span};
use parser_database::{
    Multiplicity, OnDeleteStrategy, RelationLink,
    walkers::{RelationFieldWalker, RelationWalker},
};

/// A one-to-one relation has no default link strategy; the schema must
/// choose one explicitly.
pub(super) fn one_to_one_requires_link(relation: RelationWalker<'_>, ctx: &mut Context<'_>) {
    if relation.multiplicity() != Multiplicity::OneToOne || relation.explicit_link().is_some() {
        return;
    }

    let message = format!(
        "The one-to-one relation between \"{}\" and \"{}\" must specify a link strategy: @relation(link: INLINE) or @relation(link: TABLE).",
        relation.type_a().name(),
        relation.type_b().name(),
    );

    for field in relation.fields() {
        let span = field.ast_field().name.span;
        ctx.push_error(DatamodelError::new_unsupported_link_error(&message, span));
    }
}

/// Inline storage needs a single side to hold the foreign key; it is
/// impossible for many-to-many relations and for relations only visible
/// as a list.
pub(super) fn link_is_supported(relation: RelationWalker<'_>, ctx: &mut Context<'_>) {
    if relation.explicit_link() != Some(RelationLink::Inline) {
        return;
    }

    if relation.multiplicity() == Multiplicity::ManyToMany {
        let message = format!(
            "The many-to-many relation between \"{}\" and \"{}\" cannot be stored inline. Use link: TABLE.",
            relation.type_a().name(),
            relation.type_b().name(),
        );

        for field in relation.fields() {
            ctx.push_error(DatamodelError::new_unsupported_link_error(
                &message,
                link_argument_span(field),
            ));
        }

        return;
    }

    if relation.inline_owner().is_none() {
        let message = format!(
            "The relation between \"{}\" and \"{}\" has no single side to store the foreign key on. Use link: TABLE.",
            relation.type_a().name(),
            relation.type_b().name(),
        );

        for field in relation.fields() {
            ctx.push_error(DatamodelError::new_unsupported_link_error(
                &message,
                link_argument_span(field),
            ));
        }
    }
}

/// When both endpoint fields declare a link strategy, the declarations
/// must agree.
pub(super) fn link_declarations_agree(relation: RelationWalker<'_>, ctx: &mut Context<'_>) {
    let (Some(field_a), Some(field_b)) = (relation.field_a(), relation.field_b()) else {
        return;
    };

    match (field_a.explicit_link(), field_b.explicit_link()) {
        (Some(link_a), Some(link_b)) if link_a != link_b => {
            let message = format!(
                "The relation fields \"{}\" and \"{}\" disagree on the `link` argument.",
                field_a.name(),
                field_b.name(),
            );

            for field in [field_a, field_b] {
                ctx.push_error(DatamodelError::new_validation_error(
                    message.clone(),
                    link_argument_span(field),
                ));
            }
        }
        _ => (),
    }
}

/// Deletes may cascade over a relation in at most one direction.
pub(super) fn cascade_does_not_conflict(relation: RelationWalker<'_>, ctx: &mut Context<'_>) {
    if relation.on_delete_a() != OnDeleteStrategy::Cascade || relation.on_delete_b() != OnDeleteStrategy::Cascade {
        return;
    }

    let message = format!(
        "The relation between \"{}\" and \"{}\" cannot cascade deletes on both ends. Set `onDelete: SET_NULL` on one of the two fields.",
        relation.type_a().name(),
        relation.type_b().name(),
    );

    for field in relation.fields() {
        ctx.push_error(DatamodelError::new_invalid_cascade_error(
            &message,
            on_delete_argument_span(field),
        ));
    }
}

/// Fields binding to a `@relationTable` relation must be lists: the table
/// encodes a many-to-many relation.
pub(super) fn relation_table_fields_are_lists(relation: RelationWalker<'_>, ctx: &mut Context<'_>) {
    if relation.relation_table_type().is_none() {
        return;
    }

    for field in relation.fields() {
        if !field.arity().is_list() {
            ctx.push_error(DatamodelError::new_field_validation_error(
                "Fields attaching to a relation table must be list fields.",
                field.containing_type().name(),
                field.name(),
                field.ast_field().field_type.span,
            ));
        }
    }
}

fn link_argument_span(field: RelationFieldWalker<'_>) -> Span {
    field
        .relation_directive()
        .and_then(|directive| directive.span_for_argument("link"))
        .unwrap_or(field.ast_field().name.span)
}

fn on_delete_argument_span(field: RelationFieldWalker<'_>) -> Span {
    field
        .relation_directive()
        .and_then(|directive| directive.span_for_argument("onDelete"))
        .unwrap_or(field.ast_field().name.span)
}
