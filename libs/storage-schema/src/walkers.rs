//! Traversal of a StorageSchema by id.

use crate::{
    Column, ColumnId, ColumnType, DefaultValue, ForeignKey, ForeignKeyId, Index, IndexId, IndexType, RelationColumn,
    RelationTable, RelationTableId, StorageSchema, TableId,
};

/// A generic reference to a schema item.
#[derive(Clone, Copy)]
pub struct Walker<'a, I> {
    /// The schema being traversed.
    pub schema: &'a StorageSchema,
    /// The identifier of the focused item.
    pub id: I,
}

impl<'a, I> Walker<'a, I> {
    /// Traverse something else in the same schema.
    pub fn walk<J>(self, other: J) -> Walker<'a, J> {
        self.schema.walk(other)
    }
}

/// A table in the schema.
pub type TableWalker<'a> = Walker<'a, TableId>;

/// A column in the schema.
pub type ColumnWalker<'a> = Walker<'a, ColumnId>;

/// An index in the schema.
pub type IndexWalker<'a> = Walker<'a, IndexId>;

/// A foreign key in the schema.
pub type ForeignKeyWalker<'a> = Walker<'a, ForeignKeyId>;

/// A relation table in the schema.
pub type RelationTableWalker<'a> = Walker<'a, RelationTableId>;

impl<'a> TableWalker<'a> {
    /// The table name.
    pub fn name(self) -> &'a str {
        &self.schema.table(self.id).name
    }

    /// The columns of the table, in declaration order.
    pub fn columns(self) -> impl Iterator<Item = ColumnWalker<'a>> {
        let table_id = self.id;
        self.schema
            .walk_columns()
            .filter(move |column| column.schema.column(column.id).0 == table_id)
    }

    /// Try to find a column by name.
    pub fn column(self, name: &str) -> Option<ColumnWalker<'a>> {
        self.columns().find(|column| column.name() == name)
    }

    /// The indexes on the table.
    pub fn indexes(self) -> impl Iterator<Item = IndexWalker<'a>> {
        let table_id = self.id;
        (0..self.schema.indexes().len())
            .map(move |idx| self.walk(IndexId(idx as u32)))
            .filter(move |index| index.get().table_id == table_id)
    }

    /// The primary key index, if the table has one.
    pub fn primary_key(self) -> Option<IndexWalker<'a>> {
        self.indexes().find(|index| matches!(index.get().tpe, IndexType::PrimaryKey))
    }

    /// The foreign keys defined on the table.
    pub fn foreign_keys(self) -> impl Iterator<Item = ForeignKeyWalker<'a>> {
        let table_id = self.id;
        self.schema
            .walk_foreign_keys()
            .filter(move |foreign_key| foreign_key.get().constrained_table == table_id)
    }
}

impl<'a> ColumnWalker<'a> {
    fn get(self) -> &'a (TableId, Column) {
        self.schema.column(self.id)
    }

    /// The table the column belongs to.
    pub fn table(self) -> TableWalker<'a> {
        self.walk(self.get().0)
    }

    /// The column name.
    pub fn name(self) -> &'a str {
        &self.get().1.name
    }

    /// The column type.
    pub fn column_type(self) -> &'a ColumnType {
        &self.get().1.tpe
    }

    /// Whether NULL is a valid value for the column.
    pub fn nullable(self) -> bool {
        self.get().1.nullable
    }

    /// The column default, if any.
    pub fn default(self) -> Option<&'a DefaultValue> {
        self.get().1.default.as_ref()
    }

    /// True if a unique index covers exactly this column.
    pub fn is_unique(self) -> bool {
        self.schema.indexes().iter().any(|index| {
            matches!(index.tpe, IndexType::Unique | IndexType::PrimaryKey) && index.columns == [self.id]
        })
    }

    /// True if the column is the table's primary key.
    pub fn is_primary_key(self) -> bool {
        self.schema
            .indexes()
            .iter()
            .any(|index| matches!(index.tpe, IndexType::PrimaryKey) && index.columns == [self.id])
    }
}

impl<'a> IndexWalker<'a> {
    pub(crate) fn get(self) -> &'a Index {
        self.schema.index(self.id)
    }

    /// The index name.
    pub fn name(self) -> &'a str {
        &self.get().name
    }

    /// The type of the index.
    pub fn index_type(self) -> IndexType {
        self.get().tpe
    }

    /// The indexed columns, in index order.
    pub fn columns(self) -> impl Iterator<Item = ColumnWalker<'a>> {
        self.get().columns.iter().map(move |column_id| self.walk(*column_id))
    }

    /// Whether the index compares case-insensitively.
    pub fn case_insensitive(self) -> bool {
        self.get().case_insensitive
    }

    /// The covered prefix length, for prefix indexes on text columns.
    pub fn prefix_length(self) -> Option<u32> {
        self.get().prefix_length
    }
}

impl<'a> ForeignKeyWalker<'a> {
    pub(crate) fn get(self) -> &'a ForeignKey {
        self.schema.foreign_key(self.id)
    }

    /// The table the foreign key is defined on.
    pub fn constrained_table(self) -> TableWalker<'a> {
        self.walk(self.get().constrained_table)
    }

    /// The foreign key column.
    pub fn constrained_column(self) -> ColumnWalker<'a> {
        self.walk(self.get().constrained_column)
    }

    /// The referenced table.
    pub fn referenced_table(self) -> TableWalker<'a> {
        self.walk(self.get().referenced_table)
    }

    /// The referenced column.
    pub fn referenced_column(self) -> ColumnWalker<'a> {
        self.walk(self.get().referenced_column)
    }

    /// The ON DELETE action of the constraint.
    pub fn on_delete_action(self) -> crate::ForeignKeyAction {
        self.get().on_delete_action
    }
}

impl<'a> RelationTableWalker<'a> {
    fn get(self) -> &'a RelationTable {
        self.schema.relation_table(self.id)
    }

    /// The relation table name.
    pub fn name(self) -> &'a str {
        &self.get().name
    }

    /// The `a` side column.
    pub fn column_a(self) -> &'a RelationColumn {
        &self.get().column_a
    }

    /// The `b` side column.
    pub fn column_b(self) -> &'a RelationColumn {
        &self.get().column_b
    }

    /// The table referenced by the `a` side column.
    pub fn referenced_table_a(self) -> TableWalker<'a> {
        self.walk(self.get().column_a.references_table)
    }

    /// The table referenced by the `b` side column.
    pub fn referenced_table_b(self) -> TableWalker<'a> {
        self.walk(self.get().column_b.references_table)
    }
}
