//! The derived relational storage schema. This is the stable, diffable
//! contract consumed by migration tooling: tables, columns, indexes,
//! foreign keys and relation tables, in deterministic order.

#![deny(rust_2018_idioms, unsafe_code)]
#![allow(clippy::derive_partial_eq_without_eq)]

mod calculator;
mod ids;

pub mod walkers;

pub use self::{calculator::calculate, ids::*, walkers::*};

use serde::{Deserialize, Serialize};

/// The maximum byte size of a `Text` column value.
pub const TEXT_MAX_BYTES: u32 = 262_144;

/// The maximum byte size of a `Json` column value.
pub const JSON_MAX_BYTES: u32 = 262_144;

/// The value range of an `Int4` column.
pub const INT4_MIN: i64 = -2_147_483_648;
pub const INT4_MAX: i64 = 2_147_483_647;

/// The number of characters of a text column covered by a unique index.
pub const UNIQUE_INDEX_PREFIX: u32 = 191;

/// The result of deriving the storage layout of a datamodel.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct StorageSchema {
    /// The schema's tables, one per type plus one per scalar list field.
    tables: Vec<Table>,
    /// The schema's columns.
    columns: Vec<(TableId, Column)>,
    /// All indexes, unique constraints and primary keys.
    indexes: Vec<Index>,
    /// All foreign keys.
    foreign_keys: Vec<ForeignKey>,
    /// The synthesized relation tables.
    relation_tables: Vec<RelationTable>,
}

impl StorageSchema {
    /// Add a table to the schema.
    pub fn push_table(&mut self, name: String) -> TableId {
        let id = TableId(self.tables.len() as u32);
        self.tables.push(Table { name });
        id
    }

    /// Add a column to the schema.
    pub fn push_column(&mut self, table_id: TableId, column: Column) -> ColumnId {
        let id = ColumnId(self.columns.len() as u32);
        self.columns.push((table_id, column));
        id
    }

    /// Add an index to the schema.
    pub fn push_index(&mut self, index: Index) -> IndexId {
        let id = IndexId(self.indexes.len() as u32);
        self.indexes.push(index);
        id
    }

    /// Add a foreign key to the schema.
    pub fn push_foreign_key(&mut self, foreign_key: ForeignKey) -> ForeignKeyId {
        let id = ForeignKeyId(self.foreign_keys.len() as u32);
        self.foreign_keys.push(foreign_key);
        id
    }

    /// Add a relation table to the schema.
    pub fn push_relation_table(&mut self, relation_table: RelationTable) -> RelationTableId {
        let id = RelationTableId(self.relation_tables.len() as u32);
        self.relation_tables.push(relation_table);
        id
    }

    /// Try to find a table by name.
    pub fn find_table(&self, name: &str) -> Option<TableId> {
        self.tables
            .iter()
            .position(|table| table.name == name)
            .map(|idx| TableId(idx as u32))
    }

    /// Try to find a relation table by name.
    pub fn find_relation_table(&self, name: &str) -> Option<RelationTableId> {
        self.relation_tables
            .iter()
            .position(|table| table.name == name)
            .map(|idx| RelationTableId(idx as u32))
    }

    pub fn tables_count(&self) -> usize {
        self.tables.len()
    }

    /// No tables in the schema.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.relation_tables.is_empty()
    }

    /// Traverse a schema item by id.
    pub fn walk<I>(&self, id: I) -> Walker<'_, I> {
        Walker { schema: self, id }
    }

    /// Traverse all tables in the schema.
    pub fn table_walkers(&self) -> impl ExactSizeIterator<Item = TableWalker<'_>> {
        (0..self.tables.len()).map(move |idx| self.walk(TableId(idx as u32)))
    }

    /// Traverse all relation tables in the schema.
    pub fn relation_table_walkers(&self) -> impl ExactSizeIterator<Item = RelationTableWalker<'_>> {
        (0..self.relation_tables.len()).map(move |idx| self.walk(RelationTableId(idx as u32)))
    }

    /// Traverse all foreign keys in the schema.
    pub fn walk_foreign_keys(&self) -> impl Iterator<Item = ForeignKeyWalker<'_>> {
        (0..self.foreign_keys.len()).map(move |idx| self.walk(ForeignKeyId(idx as u32)))
    }

    /// Traverse all the columns in the schema.
    pub fn walk_columns(&self) -> impl Iterator<Item = ColumnWalker<'_>> {
        (0..self.columns.len()).map(move |idx| self.walk(ColumnId(idx as u32)))
    }

    pub(crate) fn table(&self, id: TableId) -> &Table {
        &self.tables[id.0 as usize]
    }

    pub(crate) fn column(&self, id: ColumnId) -> &(TableId, Column) {
        &self.columns[id.0 as usize]
    }

    pub(crate) fn index(&self, id: IndexId) -> &Index {
        &self.indexes[id.0 as usize]
    }

    pub(crate) fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub(crate) fn foreign_key(&self, id: ForeignKeyId) -> &ForeignKey {
        &self.foreign_keys[id.0 as usize]
    }

    pub(crate) fn relation_table(&self, id: RelationTableId) -> &RelationTable {
        &self.relation_tables[id.0 as usize]
    }
}

/// A table in the storage schema.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Table {
    pub name: String,
}

/// A column of a table.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Column type.
    pub tpe: ColumnType,
    /// Whether NULL is a valid value.
    pub nullable: bool,
    /// Column default.
    pub default: Option<DefaultValue>,
}

/// The storage type of a column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ColumnType {
    /// Variable length text, up to [TEXT_MAX_BYTES] bytes.
    Text,
    /// 32 bit signed integers, [INT4_MIN] to [INT4_MAX].
    Int4,
    /// Arbitrary precision decimals.
    Decimal,
    Boolean,
    /// Timestamps, parsed from ISO-8601 on input.
    Timestamp,
    /// Validated and parsed JSON, up to [JSON_MAX_BYTES] bytes.
    Json,
    /// 25 character cuid strings.
    Char25,
    /// A named enum.
    Enum(String),
}

/// A column default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum DefaultValue {
    String(String),
    /// Numeric defaults of integer columns.
    Int(i64),
    /// Numeric defaults of decimal columns, kept as written.
    Float(String),
    Boolean(bool),
    /// An enum value.
    Enum(String),
    /// An ISO-8601 timestamp, kept as written.
    DateTime(String),
    /// The current timestamp, for `@createdAt` and `@updatedAt` columns.
    Now,
    /// A generated cuid, for id columns.
    Cuid,
}

/// The type of an index.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum IndexType {
    /// The table's primary key.
    PrimaryKey,
    /// Unique constraint.
    Unique,
    /// Normal index.
    Normal,
}

/// An index on a table.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Index {
    pub table_id: TableId,
    pub name: String,
    pub columns: Vec<ColumnId>,
    pub tpe: IndexType,
    /// Unique text indexes compare case-insensitively.
    pub case_insensitive: bool,
    /// Unique text indexes cover a [UNIQUE_INDEX_PREFIX] character prefix.
    pub prefix_length: Option<u32>,
}

/// Foreign key action types (for ON DELETE).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum ForeignKeyAction {
    /// Set the referencing column to null.
    SetNull,
    /// Delete the rows referencing the deleted row.
    Cascade,
}

/// A foreign key constraint.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ForeignKey {
    /// The table the foreign key is defined on.
    pub constrained_table: TableId,
    pub constrained_column: ColumnId,
    /// Referenced table and column.
    pub referenced_table: TableId,
    pub referenced_column: ColumnId,
    pub on_delete_action: ForeignKeyAction,
}

/// A synthesized relation table. The columns reference the id columns of
/// the two endpoint tables; deleting either endpoint node deletes the
/// join rows.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RelationTable {
    /// The table name: `_<name>` for named and derived relations, the
    /// declared type name for `@relationTable` types.
    pub name: String,
    pub column_a: RelationColumn,
    pub column_b: RelationColumn,
    /// What happens to related `b` nodes when an `a` node is deleted.
    pub on_delete_a: ForeignKeyAction,
    /// What happens to related `a` nodes when a `b` node is deleted.
    pub on_delete_b: ForeignKeyAction,
}

/// One side of a relation table.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RelationColumn {
    pub name: String,
    pub references_table: TableId,
}
