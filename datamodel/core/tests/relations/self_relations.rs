use crate::common::*;
use datamodel_core::{diagnostics::ErrorKind, parser_database::Multiplicity};

#[test]
fn fail_on_self_relation_without_name() {
    let dml = indoc! {r#"
        type Category {
          id: ID! @id
          parent: Category @relation(link: INLINE)
        }
    "#};

    let expectation = expect![[r#"
        error: The relation field "parent" on type "Category" is a self-relation and must specify a relation name: @relation(name: "MyRelation").
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   parent: Category @relation(link: INLINE)
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn named_self_relation_resolves_to_one_many_to_many_edge() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          following: [User!]! @relation(name: "Follow")
          followers: [User!]! @relation(name: "Follow")
        }
    "#};

    let schema = parse_schema(dml);
    assert_eq!(schema.db.walk_relations().len(), 1);

    let relation = schema.db.walk_relations().next().unwrap();
    assert!(relation.is_self_relation());
    assert_eq!(relation.multiplicity(), Multiplicity::ManyToMany);
    assert_eq!(relation.explicit_name(), Some("Follow"));
}

#[test]
fn self_relation_table_is_named_after_the_relation() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          following: [User!]! @relation(name: "Follow")
          followers: [User!]! @relation(name: "Follow")
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let relation_table = storage.walk(storage.find_relation_table("_Follow").unwrap());
    assert_eq!(relation_table.referenced_table_a().name(), "User");
    assert_eq!(relation_table.referenced_table_b().name(), "User");
}

#[test]
fn one_to_many_self_relation_with_inline_link() {
    let dml = indoc! {r#"
        type Category {
          id: ID! @id
          parent: Category @relation(name: "Tree")
          children: [Category!]! @relation(name: "Tree")
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let category = storage.walk(storage.find_table("Category").unwrap());
    assert!(category.column("parent").is_some());

    let foreign_key = storage.walk_foreign_keys().next().unwrap();
    assert_eq!(foreign_key.constrained_table().name(), "Category");
    assert_eq!(foreign_key.referenced_table().name(), "Category");
}

#[test]
fn unnamed_self_relations_fail_per_field() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          bestFriend: User @relation(link: INLINE)
          mentor: User @relation(link: INLINE)
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::AmbiguousRelation, ErrorKind::AmbiguousRelation]);
}
