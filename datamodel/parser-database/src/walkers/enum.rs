use super::Walker;
use crate::{EnumId, types::EnumRecord};
use schema_ast::ast::{self, WithDocumentation};

/// An enum declaration in the schema.
pub type EnumWalker<'db> = Walker<'db, EnumId>;

impl<'db> EnumWalker<'db> {
    fn record(self) -> &'db EnumRecord {
        &self.db.types.enums[self.id.0 as usize]
    }

    /// The name of the enum.
    pub fn name(self) -> &'db str {
        self.db.interner.get(self.record().name)
    }

    /// The AST node of the declaration.
    pub fn ast_enum(self) -> &'db ast::EnumDecl {
        let record = self.record();
        self.db.files[record.file_id][record.top_id]
            .as_enum()
            .expect("enum id pointing to a non-enum declaration")
    }

    /// The names of the values, in declaration order.
    pub fn values(self) -> impl Iterator<Item = &'db str> {
        self.ast_enum().values.iter().map(|value| value.name.name.as_str())
    }

    /// The documentation comments on the declaration.
    pub fn documentation(self) -> Option<&'db str> {
        self.ast_enum().documentation()
    }
}
