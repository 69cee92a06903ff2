use crate::common::*;

#[test]
fn scalar_list_with_relation_strategy_is_valid() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          tags: [String!]! @scalarList(strategy: RELATION)
        }
    "#};

    let schema = parse_schema(dml);
    assert!(
        schema
            .assert_has_type("User")
            .assert_has_scalar_field("tags")
            .is_scalar_list()
    );
}

#[test]
fn fail_on_scalar_list_without_strategy() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          tags: [String!]!
        }
    "#};

    let expectation = expect![[r#"
        error: Error validating field "tags" on type "User": Scalar list fields must specify `@scalarList(strategy: RELATION)`.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   tags: [String!]!
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_scalar_list_directive_on_single_value_field() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          tag: String @scalarList(strategy: RELATION)
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@scalarList": The directive can only be used on list fields.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   tag: String @scalarList(strategy: RELATION)
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_unsupported_strategy() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          tags: [String!]! @scalarList(strategy: EMBEDDED)
        }
    "#};

    let kinds = error_kinds(dml);
    assert!(!kinds.is_empty());
    assert!(
        kinds
            .iter()
            .all(|kind| *kind == datamodel_core::diagnostics::ErrorKind::Validation)
    );
}
