mod fields;
mod relations;
mod types;

use super::context::Context;

pub(super) fn validate(ctx: &mut Context<'_>) {
    let db = ctx.db;

    for ty in db.walk_types() {
        types::has_exactly_one_id_field(ty, ctx);
        types::relation_table_shape(ty, ctx);

        for field in ty.scalar_fields() {
            fields::id_field_shape(field, ctx);
            fields::timestamp_directive_shape(field, ctx);
            fields::scalar_list_strategy(field, ctx);
            fields::default_value_matches_type(field, ctx);
            fields::list_field_arity_warning(field.name(), field.arity(), field.ast_field().field_type.span, ctx);
        }

        for field in ty.relation_fields() {
            fields::list_field_arity_warning(field.name(), field.arity(), field.ast_field().field_type.span, ctx);
        }
    }

    for relation in db.walk_relations() {
        relations::one_to_one_requires_link(relation, ctx);
        relations::link_is_supported(relation, ctx);
        relations::link_declarations_agree(relation, ctx);
        relations::cascade_does_not_conflict(relation, ctx);
        relations::relation_table_fields_are_lists(relation, ctx);
    }
}
