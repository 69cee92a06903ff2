use super::{RelationFieldWalker, ScalarFieldWalker, Walker};
use crate::{RelationFieldId, ScalarFieldId, TypeId, types::TypeRecord};
use either::Either;
use schema_ast::ast::{self, WithDocumentation};

/// A type declaration in the schema.
pub type TypeWalker<'db> = Walker<'db, TypeId>;

impl<'db> TypeWalker<'db> {
    fn record(self) -> &'db TypeRecord {
        &self.db.types.types[self.id.0 as usize]
    }

    /// The name of the type.
    pub fn name(self) -> &'db str {
        self.db.interner.get(self.record().name)
    }

    /// The AST node of the declaration.
    pub fn ast_type(self) -> &'db ast::TypeDecl {
        let record = self.record();
        self.db.files[record.file_id][record.top_id]
            .as_type()
            .expect("type id pointing to a non-type declaration")
    }

    /// The name of the database table: the `@db(name: ...)` override, or
    /// the type name.
    pub fn database_name(self) -> &'db str {
        match self.record().db_name {
            Some(name) => self.db.interner.get(name),
            None => self.name(),
        }
    }

    /// True if the type is annotated with `@relationTable`.
    pub fn is_relation_table(self) -> bool {
        self.record().is_relation_table
    }

    /// The scalar and enum fields of the type, in declaration order.
    pub fn scalar_fields(self) -> impl Iterator<Item = ScalarFieldWalker<'db>> {
        let type_id = self.id;
        self.db
            .types
            .scalar_fields
            .iter()
            .enumerate()
            .filter(move |(_, field)| field.type_id == type_id)
            .map(move |(idx, _)| self.walk(ScalarFieldId(idx as u32)))
    }

    /// The relation fields of the type, in declaration order.
    pub fn relation_fields(self) -> impl Iterator<Item = RelationFieldWalker<'db>> {
        let type_id = self.id;
        self.db
            .types
            .relation_fields
            .iter()
            .enumerate()
            .filter(move |(_, field)| field.type_id == type_id)
            .map(move |(idx, _)| self.walk(RelationFieldId(idx as u32)))
    }

    /// All fields of the type, in declaration order, scalar or relation.
    pub fn fields(self) -> impl Iterator<Item = Either<ScalarFieldWalker<'db>, RelationFieldWalker<'db>>> {
        let type_id = self.id;
        let db = self.db;
        self.ast_type().iter_fields().filter_map(move |(field_id, _)| {
            if let Some(idx) = db
                .types
                .scalar_fields
                .iter()
                .position(|field| field.type_id == type_id && field.field_id == field_id)
            {
                return Some(Either::Left(db.walk(ScalarFieldId(idx as u32))));
            }

            db.types
                .relation_fields
                .iter()
                .position(|field| field.type_id == type_id && field.field_id == field_id)
                .map(|idx| Either::Right(db.walk(RelationFieldId(idx as u32))))
        })
    }

    /// The field holding the `@id` directive, if any.
    pub fn id_field(self) -> Option<ScalarFieldWalker<'db>> {
        self.scalar_fields().find(|field| field.is_id())
    }

    /// The scalar fields with an `@unique` directive, in declaration order.
    pub fn unique_scalar_fields(self) -> impl Iterator<Item = ScalarFieldWalker<'db>> {
        self.scalar_fields().filter(|field| field.is_unique())
    }

    /// The documentation comments on the declaration.
    pub fn documentation(self) -> Option<&'db str> {
        self.ast_type().documentation()
    }
}
