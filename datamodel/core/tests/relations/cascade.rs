use crate::common::*;
use datamodel_core::diagnostics::ErrorKind;

#[test]
fn fail_on_cascade_on_both_ends() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          posts: [Post!]! @relation(name: "Posts", onDelete: CASCADE)
        }

        type Post {
          id: ID! @id
          author: User! @relation(name: "Posts", onDelete: CASCADE)
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::InvalidCascade, ErrorKind::InvalidCascade]);
}

#[test]
fn cascade_on_one_end_is_valid_and_reaches_the_foreign_key() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          posts: [Post!]! @relation(name: "Posts", onDelete: CASCADE)
        }

        type Post {
          id: ID! @id
          author: User! @relation(name: "Posts")
        }
    "#};

    let compiled = compile(dml);
    let foreign_key = compiled.storage.walk_foreign_keys().next().unwrap();

    assert_eq!(foreign_key.constrained_table().name(), "Post");
    assert_eq!(foreign_key.constrained_column().name(), "author");
    assert_eq!(
        foreign_key.on_delete_action(),
        datamodel_core::storage_schema::ForeignKeyAction::Cascade
    );
}

#[test]
fn set_null_is_the_default_cascade_behavior() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User!
        }

        type User {
          id: ID! @id
          posts: [Post!]!
        }
    "#};

    let compiled = compile(dml);
    let foreign_key = compiled.storage.walk_foreign_keys().next().unwrap();

    assert_eq!(
        foreign_key.on_delete_action(),
        datamodel_core::storage_schema::ForeignKeyAction::SetNull
    );
}
