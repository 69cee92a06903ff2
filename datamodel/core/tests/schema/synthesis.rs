use crate::common::*;
use datamodel_core::storage_schema::{ColumnType, DefaultValue, IndexType, UNIQUE_INDEX_PREFIX};

#[test]
fn the_documented_example_synthesizes_the_documented_schema() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User! @relation(link: INLINE)
        }

        type User {
          id: ID! @id
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let post = storage.walk(storage.find_table("Post").unwrap());
    let post_id = post.column("id").unwrap();
    assert!(post_id.is_primary_key());
    assert!(post_id.is_unique());

    let author = post.column("author").unwrap();
    assert_eq!(author.column_type(), &ColumnType::Char25);
    assert!(!author.nullable());

    let foreign_key = storage.walk_foreign_keys().next().unwrap();
    assert_eq!(foreign_key.constrained_table().name(), "Post");
    assert_eq!(foreign_key.constrained_column().name(), "author");
    assert_eq!(foreign_key.referenced_table().name(), "User");
    assert_eq!(foreign_key.referenced_column().name(), "id");

    let user = storage.walk(storage.find_table("User").unwrap());
    assert_eq!(user.columns().count(), 1);
}

#[test]
fn id_columns_default_to_generated_cuids() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let id = storage.walk(storage.find_table("User").unwrap()).column("id").unwrap();

    assert_eq!(id.column_type(), &ColumnType::Char25);
    assert_eq!(id.default(), Some(&DefaultValue::Cuid));
}

#[test]
fn unique_indexes_are_case_insensitive_with_a_prefix() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          email: String @unique
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let user = storage.walk(storage.find_table("User").unwrap());
    let index = user
        .indexes()
        .find(|index| matches!(index.index_type(), IndexType::Unique))
        .unwrap();

    assert_eq!(index.name(), "User_email_key");
    assert!(index.case_insensitive());
    assert_eq!(index.prefix_length(), Some(UNIQUE_INDEX_PREFIX));
}

#[test]
fn timestamps_default_to_now() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          createdAt: DateTime! @createdAt
          updatedAt: DateTime! @updatedAt
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;
    let user = storage.walk(storage.find_table("User").unwrap());

    for name in ["createdAt", "updatedAt"] {
        let column = user.column(name).unwrap();
        assert_eq!(column.column_type(), &ColumnType::Timestamp);
        assert_eq!(column.default(), Some(&DefaultValue::Now));
    }
}

#[test]
fn enum_fields_become_enum_columns() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          role: Role! @default(value: USER)
        }

        enum Role {
          USER
          ADMIN
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;
    let role = storage.walk(storage.find_table("User").unwrap()).column("role").unwrap();

    assert_eq!(role.column_type(), &ColumnType::Enum("Role".to_owned()));
    assert_eq!(role.default(), Some(&DefaultValue::Enum("USER".to_owned())));
}

#[test]
fn scalar_lists_synthesize_a_list_table() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          tags: [String!]! @scalarList(strategy: RELATION)
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let list_table = storage.walk(storage.find_table("User_tags").unwrap());
    let column_names: Vec<&str> = list_table.columns().map(|column| column.name()).collect();
    assert_eq!(column_names, &["nodeId", "position", "value"]);

    assert_eq!(
        list_table.column("value").unwrap().column_type(),
        &ColumnType::Text
    );

    let unique = list_table
        .indexes()
        .find(|index| matches!(index.index_type(), IndexType::Unique))
        .unwrap();
    assert_eq!(unique.columns().count(), 2);

    let foreign_key = list_table.foreign_keys().next().unwrap();
    assert_eq!(foreign_key.referenced_table().name(), "User");
    assert_eq!(
        foreign_key.on_delete_action(),
        datamodel_core::storage_schema::ForeignKeyAction::Cascade
    );
}

#[test]
fn many_to_many_relations_synthesize_a_relation_table() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          categories: [Category!]! @relation(name: "PostCategories")
        }

        type Category {
          id: ID! @id
          posts: [Post!]! @relation(name: "PostCategories")
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let relation_table = storage.walk(storage.find_relation_table("_PostCategories").unwrap());
    assert_eq!(relation_table.column_a().name, "A");
    assert_eq!(relation_table.column_b().name, "B");
    assert_eq!(relation_table.referenced_table_a().name(), "Category");
    assert_eq!(relation_table.referenced_table_b().name(), "Post");
}

#[test]
fn unnamed_many_to_many_relations_derive_the_table_name() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          categories: [Category!]!
        }

        type Category {
          id: ID! @id
          posts: [Post!]!
        }
    "#};

    let compiled = compile(dml);

    assert!(compiled.storage.find_relation_table("_CategoryToPost").is_some());
}
