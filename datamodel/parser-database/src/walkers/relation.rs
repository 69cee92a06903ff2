use super::{RelationFieldWalker, TypeWalker, Walker};
use crate::{
    RelationId,
    relations::{Multiplicity, Relation},
    types::{OnDeleteStrategy, RelationLink},
};

/// A resolved relation edge.
pub type RelationWalker<'db> = Walker<'db, RelationId>;

impl<'db> RelationWalker<'db> {
    fn relation(self) -> &'db Relation {
        &self.db.relations.relations[self.id.0 as usize]
    }

    /// The endpoint type whose name sorts first.
    pub fn type_a(self) -> TypeWalker<'db> {
        self.walk(self.relation().type_a)
    }

    /// The other endpoint type. The same as `type_a` for self-relations.
    pub fn type_b(self) -> TypeWalker<'db> {
        self.walk(self.relation().type_b)
    }

    /// The relation field on the `a` side, if the relation is visible from
    /// there.
    pub fn field_a(self) -> Option<RelationFieldWalker<'db>> {
        self.relation().field_a.map(|id| self.walk(id))
    }

    /// The relation field on the `b` side.
    pub fn field_b(self) -> Option<RelationFieldWalker<'db>> {
        self.relation().field_b.map(|id| self.walk(id))
    }

    /// The fields defining the relation, in endpoint order.
    pub fn fields(self) -> impl Iterator<Item = RelationFieldWalker<'db>> {
        [self.field_a(), self.field_b()].into_iter().flatten()
    }

    pub fn multiplicity(self) -> Multiplicity {
        self.relation().multiplicity
    }

    pub fn is_self_relation(self) -> bool {
        self.relation().type_a == self.relation().type_b
    }

    /// The explicit relation name, or the name of the defining relation
    /// table type.
    pub fn explicit_name(self) -> Option<&'db str> {
        self.relation().name.map(|name| self.db.interner.get(name))
    }

    /// The name of the relation: the explicit name if given, otherwise
    /// derived from the endpoint type names (`AToB`, alphabetic).
    pub fn relation_name(self) -> String {
        match self.explicit_name() {
            Some(name) => name.to_owned(),
            None => format!("{}To{}", self.type_a().name(), self.type_b().name()),
        }
    }

    /// The `@relationTable` type defining this relation, when the relation
    /// table is user-controlled.
    pub fn relation_table_type(self) -> Option<TypeWalker<'db>> {
        self.relation().relation_table.map(|id| self.walk(id))
    }

    /// The link strategy declared with `@relation(link: ...)` on either
    /// endpoint field.
    pub fn explicit_link(self) -> Option<RelationLink> {
        self.field_a()
            .and_then(|field| field.explicit_link())
            .or_else(|| self.field_b().and_then(|field| field.explicit_link()))
    }

    /// The resolved link strategy. Explicit declarations win; one-to-many
    /// relations default to a foreign key when they have a single side to
    /// store it on, many-to-many relations always use a table. One-to-one
    /// relations have no default: `None` means the schema is missing a
    /// `link` argument, which is a validation error.
    pub fn link(self) -> Option<RelationLink> {
        if let Some(link) = self.explicit_link() {
            return Some(link);
        }

        match self.multiplicity() {
            Multiplicity::OneToMany => {
                if self.inline_owner().is_some() {
                    Some(RelationLink::Inline)
                } else {
                    Some(RelationLink::Table)
                }
            }
            Multiplicity::ManyToMany => Some(RelationLink::Table),
            Multiplicity::OneToOne => None,
        }
    }

    /// The field holding the foreign key when the relation is stored
    /// inline: the non-list endpoint for one-to-many relations, the
    /// endpoint annotated with `link: INLINE` for one-to-one relations.
    pub fn inline_owner(self) -> Option<RelationFieldWalker<'db>> {
        match self.multiplicity() {
            Multiplicity::OneToMany => self.fields().find(|field| !field.arity().is_list()),
            Multiplicity::OneToOne => self
                .fields()
                .find(|field| field.explicit_link() == Some(RelationLink::Inline)),
            Multiplicity::ManyToMany => None,
        }
    }

    /// The cascade behavior of the `a` endpoint: what happens to the
    /// related `b` nodes when an `a` node is deleted.
    pub fn on_delete_a(self) -> OnDeleteStrategy {
        self.field_a()
            .and_then(|field| field.explicit_on_delete())
            .unwrap_or(OnDeleteStrategy::SetNull)
    }

    /// The cascade behavior of the `b` endpoint.
    pub fn on_delete_b(self) -> OnDeleteStrategy {
        self.field_b()
            .and_then(|field| field.explicit_on_delete())
            .unwrap_or(OnDeleteStrategy::SetNull)
    }
}
