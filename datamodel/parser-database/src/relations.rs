//! Relation resolution. A two-pass algorithm: first collect every relation
//! field into candidate groups keyed by the unordered pair of types it
//! connects, then pair fields up into edges, disambiguating through
//! explicit relation names where a pair has more than one correspondence.
//!
//! Resolution is deterministic: edges and diagnostics follow the
//! declaration order of the first participating field.

use crate::{
    context::Context,
    files::Files,
    ids::{RelationFieldId, RelationId, StringId, TypeId},
    types::{RelationField, Types},
};
use diagnostics::{DatamodelError, DatamodelWarning, Span};
use indexmap::IndexMap;
use schema_ast::ast::{self, WithName};

/// The resolved relations of the schema.
#[derive(Default)]
pub(crate) struct Relations {
    pub(crate) relations: Vec<Relation>,
}

/// One resolved relation edge. The `a` endpoint is the type whose name
/// sorts first; for self-relations, both endpoints are the same type and
/// the fields are ordered by declaration.
pub(crate) struct Relation {
    pub(crate) type_a: TypeId,
    pub(crate) type_b: TypeId,
    /// The relation field on `type_a`, if the relation is visible from
    /// that side.
    pub(crate) field_a: Option<RelationFieldId>,
    /// The relation field on `type_b`.
    pub(crate) field_b: Option<RelationFieldId>,
    /// The explicit relation name, or the name of the relation table type.
    pub(crate) name: Option<StringId>,
    pub(crate) multiplicity: Multiplicity,
    /// The `@relationTable` type defining this relation, when the relation
    /// table is user-controlled.
    pub(crate) relation_table: Option<TypeId>,
}

/// How many nodes can sit on each end of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    OneToOne,
    OneToMany,
    ManyToMany,
}

pub(super) fn resolve_relations(ctx: &mut Context<'_>) {
    resolve_relation_table_types(ctx);

    // Pass 1: collect candidates, keyed by the unordered type pair.
    let mut candidates: IndexMap<(TypeId, TypeId), Vec<RelationFieldId>> = IndexMap::new();

    for field_idx in 0..ctx.types.relation_fields.len() {
        let field = ctx.types.relation_fields[field_idx];

        if ctx.types.types[field.type_id.0 as usize].is_relation_table {
            continue;
        }

        if ctx.types.types[field.referenced_type.0 as usize].is_relation_table {
            let (type_name, field_name, referenced_name, span) = {
                let ast_field = ast_field(ctx.files, ctx.types, &field);
                (
                    type_name(ctx, field.type_id).to_owned(),
                    ast_field.name().to_owned(),
                    type_name(ctx, field.referenced_type).to_owned(),
                    ast_field.field_type.span,
                )
            };
            ctx.push_error(DatamodelError::new_field_validation_error(
                &format!("The relation table type \"{referenced_name}\" cannot be used as a field type."),
                &type_name,
                &field_name,
                span,
            ));
            continue;
        }

        let key = ordered_pair(ctx, field.type_id, field.referenced_type);
        candidates.entry(key).or_default().push(RelationFieldId(field_idx as u32));
    }

    // Pass 2: group each pair's fields into edges.
    for ((type_a, type_b), field_ids) in candidates {
        resolve_pair(type_a, type_b, &field_ids, ctx);
    }
}

/// Each `@relationTable` type with two relation fields declares one
/// many-to-many edge with a user-controlled relation table. The shape of
/// such types is validated separately.
fn resolve_relation_table_types(ctx: &mut Context<'_>) {
    for type_idx in 0..ctx.types.types.len() {
        let type_id = TypeId(type_idx as u32);

        if !ctx.types.types[type_idx].is_relation_table {
            continue;
        }

        let fields: Vec<&RelationField> = ctx
            .types
            .relation_fields
            .iter()
            .filter(|field| field.type_id == type_id)
            .collect();

        let (first, second) = match fields[..] {
            [first, second] => (first, second),
            _ => continue,
        };

        let (type_a, type_b) = ordered_pair(ctx, first.referenced_type, second.referenced_type);
        let name = ctx.types.types[type_idx].name;

        ctx.relations.relations.push(Relation {
            type_a,
            type_b,
            field_a: None,
            field_b: None,
            name: Some(name),
            multiplicity: Multiplicity::ManyToMany,
            relation_table: Some(type_id),
        });
    }
}

fn resolve_pair(type_a: TypeId, type_b: TypeId, field_ids: &[RelationFieldId], ctx: &mut Context<'_>) {
    let is_self = type_a == type_b;
    let mut named: IndexMap<StringId, Vec<RelationFieldId>> = IndexMap::new();
    let mut unnamed: Vec<RelationFieldId> = Vec::new();

    for field_id in field_ids {
        match ctx.types.relation_fields[field_id.0 as usize].name {
            Some(name) => named.entry(name).or_default().push(*field_id),
            None => unnamed.push(*field_id),
        }
    }

    let mut edge_count = 0usize;
    let single_named_group = named.len() == 1 && unnamed.is_empty();

    for (name, group) in named {
        edge_count += 1;

        if try_attach_to_relation_table(type_a, type_b, name, &group, ctx) {
            continue;
        }

        match group[..] {
            [field_id] => push_edge(type_a, type_b, Some(field_id), None, Some(name), ctx),
            [first, second] => {
                let first_type = ctx.types.relation_fields[first.0 as usize].type_id;
                let second_type = ctx.types.relation_fields[second.0 as usize].type_id;

                if !is_self && first_type == second_type {
                    let name = ctx.interner.get(name).to_owned();
                    for field_id in [first, second] {
                        let span = field_span(ctx, field_id);
                        ctx.push_error(DatamodelError::new_ambiguous_relation_error(
                            &format!(
                                "The relation fields sharing the relation name \"{name}\" are defined on the same type and cannot be paired up."
                            ),
                            span,
                        ));
                    }
                    continue;
                }

                // For self-relations both fields sit on the same type; keep
                // declaration order. Otherwise the `a` field is the one on
                // the alphabetically first type.
                let (field_a, field_b) = if is_self || first_type == type_a {
                    (first, second)
                } else {
                    (second, first)
                };

                if single_named_group && !is_self {
                    let relation_name = ctx.interner.get(name).to_owned();
                    if let Some(span) = relation_directive_span(ctx, field_a) {
                        ctx.push_warning(DatamodelWarning::new_relation_name_superfluous(&relation_name, span));
                    }
                }

                push_edge(type_a, type_b, Some(field_a), Some(field_b), Some(name), ctx);
            }
            _ => {
                let name = ctx.interner.get(name).to_owned();
                for field_id in &group {
                    let span = field_span(ctx, *field_id);
                    ctx.push_error(DatamodelError::new_ambiguous_relation_error(
                        &format!("The relation name \"{name}\" is used by more than two fields."),
                        span,
                    ));
                }
            }
        }
    }

    if is_self {
        for field_id in unnamed {
            let (type_name, field_name, span) = field_description(ctx, field_id);
            ctx.push_error(DatamodelError::new_ambiguous_relation_error(
                &format!(
                    "The relation field \"{field_name}\" on type \"{type_name}\" is a self-relation and must specify a relation name: @relation(name: \"MyRelation\")."
                ),
                span,
            ));
        }
        return;
    }

    let on_a: Vec<RelationFieldId> = unnamed
        .iter()
        .copied()
        .filter(|field_id| ctx.types.relation_fields[field_id.0 as usize].type_id == type_a)
        .collect();
    let on_b: Vec<RelationFieldId> = unnamed
        .iter()
        .copied()
        .filter(|field_id| ctx.types.relation_fields[field_id.0 as usize].type_id == type_b)
        .collect();

    if edge_count > 0 || on_a.len() > 1 || on_b.len() > 1 {
        let type_a_name = type_name(ctx, type_a).to_owned();
        let type_b_name = type_name(ctx, type_b).to_owned();

        for field_id in unnamed {
            let (type_name, field_name, span) = field_description(ctx, field_id);
            ctx.push_error(DatamodelError::new_ambiguous_relation_error(
                &format!(
                    "Ambiguous relation detected between \"{type_a_name}\" and \"{type_b_name}\". The relation field \"{field_name}\" on type \"{type_name}\" must specify a relation name: @relation(name: \"MyRelation\")."
                ),
                span,
            ));
        }
        return;
    }

    match (on_a.first(), on_b.first()) {
        (Some(field_a), Some(field_b)) => push_edge(type_a, type_b, Some(*field_a), Some(*field_b), None, ctx),
        (Some(field_a), None) => push_edge(type_a, type_b, Some(*field_a), None, None, ctx),
        (None, Some(field_b)) => push_edge(type_a, type_b, None, Some(*field_b), None, ctx),
        (None, None) => (),
    }
}

/// Attach the fields of a named group to the edge declared by a
/// `@relationTable` type of the same name, if there is one between the same
/// two types. Returns whether the group was attached.
fn try_attach_to_relation_table(
    type_a: TypeId,
    type_b: TypeId,
    name: StringId,
    group: &[RelationFieldId],
    ctx: &mut Context<'_>,
) -> bool {
    let relation_idx = match ctx.relations.relations.iter().position(|relation| {
        relation.relation_table.is_some()
            && relation.name == Some(name)
            && relation.type_a == type_a
            && relation.type_b == type_b
    }) {
        Some(idx) => idx,
        None => return false,
    };

    for field_id in group {
        let field_type = ctx.types.relation_fields[field_id.0 as usize].type_id;
        let is_a_side = field_type == type_a;
        let taken = if is_a_side {
            ctx.relations.relations[relation_idx].field_a.is_some()
        } else {
            ctx.relations.relations[relation_idx].field_b.is_some()
        };

        if taken {
            let (type_name, field_name, span) = field_description(ctx, *field_id);
            ctx.push_error(DatamodelError::new_ambiguous_relation_error(
                &format!(
                    "The relation field \"{field_name}\" on type \"{type_name}\" cannot be added to the relation: the side is already defined."
                ),
                span,
            ));
        } else if is_a_side {
            ctx.relations.relations[relation_idx].field_a = Some(*field_id);
        } else {
            ctx.relations.relations[relation_idx].field_b = Some(*field_id);
        }
    }

    true
}

fn push_edge(
    type_a: TypeId,
    type_b: TypeId,
    field_a: Option<RelationFieldId>,
    field_b: Option<RelationFieldId>,
    name: Option<StringId>,
    ctx: &mut Context<'_>,
) {
    let multiplicity = match (arity(ctx, field_a), arity(ctx, field_b)) {
        (Some(a), Some(b)) if a.is_list() && b.is_list() => Multiplicity::ManyToMany,
        (Some(a), Some(b)) if a.is_list() || b.is_list() => Multiplicity::OneToMany,
        (Some(_), Some(_)) => Multiplicity::OneToOne,
        // Unidirectional relations default to one-to-many: a non-list field
        // makes the declaring type the many side, a list field makes the
        // referenced type the many side.
        (Some(_), None) | (None, Some(_)) => Multiplicity::OneToMany,
        (None, None) => Multiplicity::ManyToMany,
    };

    ctx.relations.relations.push(Relation {
        type_a,
        type_b,
        field_a,
        field_b,
        name,
        multiplicity,
        relation_table: None,
    });
}

fn arity(ctx: &Context<'_>, field_id: Option<RelationFieldId>) -> Option<ast::FieldArity> {
    let field_id = field_id?;
    let field = &ctx.types.relation_fields[field_id.0 as usize];
    Some(ast_field(ctx.files, ctx.types, field).field_type.arity)
}

/// Normalizes a type pair: the `a` side is the type whose name sorts first.
fn ordered_pair(ctx: &Context<'_>, first: TypeId, second: TypeId) -> (TypeId, TypeId) {
    let first_name = type_name(ctx, first);
    let second_name = type_name(ctx, second);

    if first_name <= second_name {
        (first, second)
    } else {
        (second, first)
    }
}

fn type_name<'db>(ctx: &'db Context<'_>, type_id: TypeId) -> &'db str {
    ctx.interner.get(ctx.types.types[type_id.0 as usize].name)
}

fn ast_field<'db>(files: &'db Files, types: &Types, field: &RelationField) -> &'db ast::FieldDecl {
    let record = &types.types[field.type_id.0 as usize];
    &files[record.file_id][record.top_id]
        .as_type()
        .expect("relation field on a non-type declaration")[field.field_id]
}

fn field_span(ctx: &Context<'_>, field_id: RelationFieldId) -> Span {
    let field = &ctx.types.relation_fields[field_id.0 as usize];
    ast_field(ctx.files, ctx.types, field).name.span
}

fn relation_directive_span(ctx: &Context<'_>, field_id: RelationFieldId) -> Option<Span> {
    let field = &ctx.types.relation_fields[field_id.0 as usize];
    ast_field(ctx.files, ctx.types, field)
        .directives
        .iter()
        .find(|directive| directive.name() == "relation")
        .map(|directive| directive.span)
}

fn field_description(ctx: &Context<'_>, field_id: RelationFieldId) -> (String, String, Span) {
    let field = ctx.types.relation_fields[field_id.0 as usize];
    let ast_field = ast_field(ctx.files, ctx.types, &field);
    (
        type_name(ctx, field.type_id).to_owned(),
        ast_field.name().to_owned(),
        ast_field.name.span,
    )
}

/// The resolved relation id accessor used by the walkers.
impl Relations {
    pub(crate) fn iter(&self) -> impl Iterator<Item = (RelationId, &Relation)> {
        self.relations
            .iter()
            .enumerate()
            .map(|(idx, relation)| (RelationId(idx as u32), relation))
    }
}
