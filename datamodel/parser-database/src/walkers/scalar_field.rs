use super::{EnumWalker, TypeWalker, Walker};
use crate::{
    ScalarFieldId,
    types::{ScalarField, ScalarFieldType, ScalarType},
};
use schema_ast::ast::{self, WithDocumentation};

/// A field resolving to a scalar or enum type.
pub type ScalarFieldWalker<'db> = Walker<'db, ScalarFieldId>;

impl<'db> ScalarFieldWalker<'db> {
    fn field(self) -> &'db ScalarField {
        &self.db.types.scalar_fields[self.id.0 as usize]
    }

    /// The type the field is declared on.
    pub fn containing_type(self) -> TypeWalker<'db> {
        self.walk(self.field().type_id)
    }

    /// The AST node of the field.
    pub fn ast_field(self) -> &'db ast::FieldDecl {
        &self.containing_type().ast_type()[self.field().field_id]
    }

    /// The name of the field.
    pub fn name(self) -> &'db str {
        &self.ast_field().name.name
    }

    /// The name of the database column: the `@db(name: ...)` override, or
    /// the field name.
    pub fn database_name(self) -> &'db str {
        match self.field().db_name {
            Some(name) => self.db.interner.get(name),
            None => self.name(),
        }
    }

    /// What the field's type reference resolves to.
    pub fn scalar_field_type(self) -> ScalarFieldType {
        self.field().r#type
    }

    /// The built-in scalar type of the field, unless it is an enum field.
    pub fn scalar_type(self) -> Option<ScalarType> {
        match self.field().r#type {
            ScalarFieldType::Scalar(scalar_type) => Some(scalar_type),
            ScalarFieldType::Enum(_) => None,
        }
    }

    /// The enum referenced by the field, if it is an enum field.
    pub fn field_enum(self) -> Option<EnumWalker<'db>> {
        match self.field().r#type {
            ScalarFieldType::Enum(enum_id) => Some(self.walk(enum_id)),
            ScalarFieldType::Scalar(_) => None,
        }
    }

    /// The arity modifiers of the field.
    pub fn arity(self) -> ast::FieldArity {
        self.ast_field().field_type.arity
    }

    /// True if the field is annotated with `@id`.
    pub fn is_id(self) -> bool {
        self.field().is_id
    }

    /// True if the field is annotated with `@unique`.
    pub fn is_unique(self) -> bool {
        self.field().is_unique
    }

    /// True if the field is annotated with `@createdAt`.
    pub fn is_created_at(self) -> bool {
        self.field().is_created_at
    }

    /// True if the field is annotated with `@updatedAt`.
    pub fn is_updated_at(self) -> bool {
        self.field().is_updated_at
    }

    /// True if the field is annotated with `@scalarList`.
    pub fn is_scalar_list(self) -> bool {
        self.field().is_scalar_list
    }

    /// The `@default(value: ...)` literal, if any.
    pub fn default_value(self) -> Option<&'db ast::Expression> {
        self.field().default.as_ref().map(|default| &default.value)
    }

    /// The documentation comments on the field.
    pub fn documentation(self) -> Option<&'db str> {
        self.ast_field().documentation()
    }
}
