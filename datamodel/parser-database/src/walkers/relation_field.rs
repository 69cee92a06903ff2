use super::{TypeWalker, Walker};
use crate::{
    RelationFieldId,
    types::{OnDeleteStrategy, RelationField, RelationLink},
};
use schema_ast::ast::{self, WithName};

/// A field resolving to another declared type.
pub type RelationFieldWalker<'db> = Walker<'db, RelationFieldId>;

impl<'db> RelationFieldWalker<'db> {
    fn field(self) -> &'db RelationField {
        &self.db.types.relation_fields[self.id.0 as usize]
    }

    /// The type the field is declared on.
    pub fn containing_type(self) -> TypeWalker<'db> {
        self.walk(self.field().type_id)
    }

    /// The type the field points at.
    pub fn referenced_type(self) -> TypeWalker<'db> {
        self.walk(self.field().referenced_type)
    }

    /// The AST node of the field.
    pub fn ast_field(self) -> &'db ast::FieldDecl {
        &self.containing_type().ast_type()[self.field().field_id]
    }

    /// The name of the field.
    pub fn name(self) -> &'db str {
        &self.ast_field().name.name
    }

    /// The name of the foreign key column when the relation is stored
    /// inline on this side: the `@db(name: ...)` override, or the field
    /// name.
    pub fn database_name(self) -> &'db str {
        match self.field().db_name {
            Some(name) => self.db.interner.get(name),
            None => self.name(),
        }
    }

    /// The arity modifiers of the field.
    pub fn arity(self) -> ast::FieldArity {
        self.ast_field().field_type.arity
    }

    /// The relation name given with `@relation(name: ...)`, if any.
    pub fn explicit_relation_name(self) -> Option<&'db str> {
        self.field().name.map(|name| self.db.interner.get(name))
    }

    /// The link strategy given with `@relation(link: ...)`, if any.
    pub fn explicit_link(self) -> Option<RelationLink> {
        self.field().link
    }

    /// The cascade behavior given with `@relation(onDelete: ...)`, if any.
    pub fn explicit_on_delete(self) -> Option<OnDeleteStrategy> {
        self.field().on_delete
    }

    /// The `@relation` directive on the field, if any.
    pub fn relation_directive(self) -> Option<&'db ast::Directive> {
        self.ast_field()
            .directives
            .iter()
            .find(|directive| directive.name() == "relation")
    }
}
