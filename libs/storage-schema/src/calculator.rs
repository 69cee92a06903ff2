//! Derives the storage schema from a validated datamodel: one table per
//! type, one column per scalar field, foreign keys for inline relations,
//! relation tables for table-linked relations and scalar lists.

use crate::{
    Column, ColumnId, ColumnType, DefaultValue, ForeignKey, ForeignKeyAction, Index, IndexType, RelationColumn,
    RelationTable, StorageSchema, TableId, UNIQUE_INDEX_PREFIX,
};
use either::Either;
use parser_database::{
    Multiplicity, OnDeleteStrategy, ParserDatabase, RelationLink, ScalarFieldType, ScalarType, ast,
    walkers::{RelationFieldWalker, RelationWalker, ScalarFieldWalker, TypeWalker},
};
use std::collections::HashMap;

/// Maps a validated datamodel to its storage layout. Must only be called
/// when validation produced no errors; the calculator relies on the
/// invariants the validation pipeline established.
pub fn calculate(db: &ParserDatabase) -> StorageSchema {
    let mut schema = StorageSchema::default();

    // Tables first, so foreign keys can point at tables declared later.
    let mut tables: HashMap<parser_database::TypeId, TableId> = HashMap::new();

    for ty in entity_types(db) {
        let table_id = schema.push_table(ty.database_name().to_owned());
        tables.insert(ty.id, table_id);
    }

    // Columns, primary keys and unique indexes, in field declaration
    // order. Foreign keys are deferred until every id column exists.
    let mut id_columns: HashMap<parser_database::TypeId, (ColumnId, ColumnType)> = HashMap::new();
    let mut pending_foreign_keys: Vec<PendingForeignKey> = Vec::new();

    for ty in entity_types(db) {
        let table_id = tables[&ty.id];

        for field in ty.fields() {
            match field {
                Either::Left(scalar) => {
                    if scalar.is_scalar_list() {
                        continue;
                    }

                    let tpe = column_type(scalar);
                    let column_id = schema.push_column(
                        table_id,
                        Column {
                            name: scalar.database_name().to_owned(),
                            tpe: tpe.clone(),
                            nullable: !scalar.arity().is_required(),
                            default: column_default(scalar, &tpe),
                        },
                    );

                    if scalar.is_id() {
                        id_columns.insert(ty.id, (column_id, tpe));
                        schema.push_index(Index {
                            table_id,
                            name: format!("{}_pkey", ty.database_name()),
                            columns: vec![column_id],
                            tpe: IndexType::PrimaryKey,
                            case_insensitive: false,
                            prefix_length: None,
                        });
                    } else if scalar.is_unique() {
                        push_unique_index(
                            &mut schema,
                            table_id,
                            ty.database_name(),
                            column_id,
                            scalar.database_name(),
                            &tpe,
                        );
                    }
                }
                Either::Right(relation_field) => {
                    if let Some(foreign_key) =
                        inline_foreign_key_column(db, relation_field, table_id, ty, &mut schema)
                    {
                        pending_foreign_keys.push(foreign_key);
                    }
                }
            }
        }
    }

    for pending in pending_foreign_keys {
        let referenced_column = id_columns[&pending.referenced_type].0;
        schema.push_foreign_key(ForeignKey {
            constrained_table: pending.constrained_table,
            constrained_column: pending.constrained_column,
            referenced_table: tables[&pending.referenced_type],
            referenced_column,
            on_delete_action: pending.on_delete_action,
        });
    }

    // Scalar lists are stored in dedicated tables: one row per element,
    // addressed by node id and position.
    for ty in entity_types(db) {
        for field in ty.scalar_fields().filter(|field| field.is_scalar_list()) {
            let list_table_name = format!("{}_{}", ty.database_name(), field.database_name());
            let list_table = schema.push_table(list_table_name.clone());
            let (owner_id_column, owner_id_type) = id_columns[&ty.id].clone();

            let node_id = schema.push_column(
                list_table,
                Column {
                    name: "nodeId".to_owned(),
                    tpe: owner_id_type,
                    nullable: false,
                    default: None,
                },
            );
            let position = schema.push_column(
                list_table,
                Column {
                    name: "position".to_owned(),
                    tpe: ColumnType::Int4,
                    nullable: false,
                    default: None,
                },
            );
            schema.push_column(
                list_table,
                Column {
                    name: "value".to_owned(),
                    tpe: column_type(field),
                    nullable: false,
                    default: None,
                },
            );

            schema.push_index(Index {
                table_id: list_table,
                name: format!("{list_table_name}_nodeId_position_key"),
                columns: vec![node_id, position],
                tpe: IndexType::Unique,
                case_insensitive: false,
                prefix_length: None,
            });

            // List entries die with their node.
            schema.push_foreign_key(ForeignKey {
                constrained_table: list_table,
                constrained_column: node_id,
                referenced_table: tables[&ty.id],
                referenced_column: owner_id_column,
                on_delete_action: ForeignKeyAction::Cascade,
            });
        }
    }

    // Relation tables, for every table-linked relation.
    for relation in db
        .walk_relations()
        .filter(|relation| relation.link() == Some(RelationLink::Table))
    {
        let (name, column_a_name, column_b_name) = relation_table_parts(relation);

        schema.push_relation_table(RelationTable {
            name,
            column_a: RelationColumn {
                name: column_a_name,
                references_table: tables[&relation.type_a().id],
            },
            column_b: RelationColumn {
                name: column_b_name,
                references_table: tables[&relation.type_b().id],
            },
            on_delete_a: foreign_key_action(relation.on_delete_a()),
            on_delete_b: foreign_key_action(relation.on_delete_b()),
        });
    }

    schema
}

struct PendingForeignKey {
    constrained_table: TableId,
    constrained_column: ColumnId,
    referenced_type: parser_database::TypeId,
    on_delete_action: ForeignKeyAction,
}

fn entity_types(db: &ParserDatabase) -> impl Iterator<Item = TypeWalker<'_>> {
    db.walk_types().filter(|ty| !ty.is_relation_table())
}

/// Pushes the foreign key column for an inline relation, if this field is
/// the owning side, and returns the constraint to create once all id
/// columns exist.
fn inline_foreign_key_column(
    db: &ParserDatabase,
    relation_field: RelationFieldWalker<'_>,
    table_id: TableId,
    ty: TypeWalker<'_>,
    schema: &mut StorageSchema,
) -> Option<PendingForeignKey> {
    let relation = db
        .walk_relations()
        .find(|relation| relation.fields().any(|field| field.id == relation_field.id))?;

    if relation.link() != Some(RelationLink::Inline) {
        return None;
    }

    if relation.inline_owner().map(|field| field.id) != Some(relation_field.id) {
        return None;
    }

    let referenced = relation_field.referenced_type();
    let tpe = id_column_type(referenced);
    let column_id = schema.push_column(
        table_id,
        Column {
            name: relation_field.database_name().to_owned(),
            tpe: tpe.clone(),
            nullable: !relation_field.arity().is_required(),
            default: None,
        },
    );

    // A one-to-one relation is enforced with a unique constraint on the
    // foreign key column.
    if relation.multiplicity() == Multiplicity::OneToOne {
        push_unique_index(
            schema,
            table_id,
            ty.database_name(),
            column_id,
            relation_field.database_name(),
            &tpe,
        );
    }

    // The ON DELETE action comes from the endpoint on the referenced side:
    // it decides what happens to the rows holding the foreign key when the
    // referenced node is deleted.
    let is_a_side = relation.field_a().map(|field| field.id) == Some(relation_field.id);
    let on_delete = if is_a_side {
        relation.on_delete_b()
    } else {
        relation.on_delete_a()
    };

    Some(PendingForeignKey {
        constrained_table: table_id,
        constrained_column: column_id,
        referenced_type: referenced.id,
        on_delete_action: foreign_key_action(on_delete),
    })
}

/// The name and column names of the relation table: `_<name>` with `A`/`B`
/// role columns for derived and named relations, the declared names for
/// `@relationTable` types.
fn relation_table_parts(relation: RelationWalker<'_>) -> (String, String, String) {
    match relation.relation_table_type() {
        Some(relation_table) => {
            let mut fields = relation_table.relation_fields();
            let (first, second) = (
                fields.next().expect("relation table type with two relation fields"),
                fields.next().expect("relation table type with two relation fields"),
            );

            let (field_a, field_b) = if relation.is_self_relation()
                || first.referenced_type().id == relation.type_a().id
            {
                (first, second)
            } else {
                (second, first)
            };

            (
                relation_table.database_name().to_owned(),
                field_a.database_name().to_owned(),
                field_b.database_name().to_owned(),
            )
        }
        None => (format!("_{}", relation.relation_name()), "A".to_owned(), "B".to_owned()),
    }
}

fn push_unique_index(
    schema: &mut StorageSchema,
    table_id: TableId,
    table_name: &str,
    column_id: ColumnId,
    column_name: &str,
    tpe: &ColumnType,
) {
    let text = matches!(tpe, ColumnType::Text);

    schema.push_index(Index {
        table_id,
        name: format!("{table_name}_{column_name}_key"),
        columns: vec![column_id],
        tpe: IndexType::Unique,
        case_insensitive: text,
        prefix_length: text.then_some(UNIQUE_INDEX_PREFIX),
    });
}

/// The fixed scalar-to-storage mapping. Id columns store cuids unless the
/// id field has a numeric default, in which case they are plain integers.
fn column_type(field: ScalarFieldWalker<'_>) -> ColumnType {
    match field.scalar_field_type() {
        ScalarFieldType::Enum(enum_id) => ColumnType::Enum(field.walk(enum_id).name().to_owned()),
        ScalarFieldType::Scalar(scalar_type) => match scalar_type {
            ScalarType::String => ColumnType::Text,
            ScalarType::Int => ColumnType::Int4,
            ScalarType::Float => ColumnType::Decimal,
            ScalarType::Boolean => ColumnType::Boolean,
            ScalarType::DateTime => ColumnType::Timestamp,
            ScalarType::Json => ColumnType::Json,
            ScalarType::Id => match field.default_value() {
                Some(ast::Expression::NumericValue(value, _)) if !value.contains('.') => ColumnType::Int4,
                _ => ColumnType::Char25,
            },
        },
    }
}

fn id_column_type(ty: TypeWalker<'_>) -> ColumnType {
    column_type(ty.id_field().expect("every entity type has an id field after validation"))
}

fn column_default(field: ScalarFieldWalker<'_>, tpe: &ColumnType) -> Option<DefaultValue> {
    if field.is_created_at() || field.is_updated_at() {
        return Some(DefaultValue::Now);
    }

    if let Some(value) = field.default_value() {
        let default = match (field.scalar_field_type(), value) {
            (ScalarFieldType::Enum(_), ast::Expression::ConstantValue(constant, _)) => {
                DefaultValue::Enum(constant.clone())
            }
            (ScalarFieldType::Scalar(ScalarType::String | ScalarType::Json), ast::Expression::StringValue(s, _)) => {
                DefaultValue::String(s.clone())
            }
            (ScalarFieldType::Scalar(ScalarType::Int | ScalarType::Id), ast::Expression::NumericValue(n, _)) => {
                DefaultValue::Int(n.parse().expect("validated integer default"))
            }
            (ScalarFieldType::Scalar(ScalarType::Float), ast::Expression::NumericValue(n, _)) => {
                DefaultValue::Float(n.clone())
            }
            (ScalarFieldType::Scalar(ScalarType::Boolean), ast::Expression::ConstantValue(constant, _)) => {
                DefaultValue::Boolean(constant == "true")
            }
            (ScalarFieldType::Scalar(ScalarType::DateTime), ast::Expression::StringValue(s, _)) => {
                DefaultValue::DateTime(s.clone())
            }
            // Anything else was rejected by validation.
            _ => return None,
        };

        return Some(default);
    }

    if field.is_id() && matches!(tpe, ColumnType::Char25) {
        return Some(DefaultValue::Cuid);
    }

    None
}

fn foreign_key_action(strategy: OnDeleteStrategy) -> ForeignKeyAction {
    match strategy {
        OnDeleteStrategy::SetNull => ForeignKeyAction::SetNull,
        OnDeleteStrategy::Cascade => ForeignKeyAction::Cascade,
    }
}
