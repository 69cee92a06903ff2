use crate::common::*;
use datamodel_core::diagnostics::ErrorKind;

#[test]
fn fail_on_one_to_one_relation_without_link() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          profile: Profile
        }

        type Profile {
          id: ID! @id
          user: User
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::UnsupportedLink, ErrorKind::UnsupportedLink]);
}

#[test]
fn one_to_one_with_inline_link_stores_the_key_on_the_annotated_side() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          profile: Profile @relation(link: INLINE)
        }

        type Profile {
          id: ID! @id
          user: User
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let user = storage.walk(storage.find_table("User").unwrap());
    let profile_column = user.column("profile").unwrap();

    assert!(profile_column.nullable());
    assert!(profile_column.is_unique());

    let profile = storage.walk(storage.find_table("Profile").unwrap());
    assert!(profile.column("user").is_none());

    let foreign_key = storage.walk_foreign_keys().next().unwrap();
    assert_eq!(foreign_key.constrained_table().name(), "User");
    assert_eq!(foreign_key.referenced_table().name(), "Profile");
}

#[test]
fn one_to_one_with_table_link_synthesizes_a_relation_table() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          profile: Profile @relation(link: TABLE)
        }

        type Profile {
          id: ID! @id
          user: User
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let relation_table = storage.walk(storage.find_relation_table("_ProfileToUser").unwrap());
    assert_eq!(relation_table.column_a().name, "A");
    assert_eq!(relation_table.column_b().name, "B");
    assert_eq!(relation_table.referenced_table_a().name(), "Profile");
    assert_eq!(relation_table.referenced_table_b().name(), "User");
}

#[test]
fn fail_on_inline_link_for_many_to_many() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          categories: [Category!]! @relation(link: INLINE)
        }

        type Category {
          id: ID! @id
          posts: [Post!]!
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::UnsupportedLink, ErrorKind::UnsupportedLink]);
}

#[test]
fn fail_on_conflicting_link_declarations() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          profile: Profile @relation(link: INLINE)
        }

        type Profile {
          id: ID! @id
          user: User @relation(link: TABLE)
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::Validation, ErrorKind::Validation]);
}

#[test]
fn fail_on_inline_link_for_a_list_only_relation() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          posts: [Post!]! @relation(link: INLINE)
        }

        type Post {
          id: ID! @id
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::UnsupportedLink]);
}

#[test]
fn one_to_many_defaults_to_an_inline_foreign_key() {
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
    let storage = &compiled.storage;

    let post = storage.walk(storage.find_table("Post").unwrap());
    assert!(post.column("author").is_some());
    assert_eq!(storage.relation_table_walkers().len(), 0);
}
