use crate::common::*;
use datamodel_core::diagnostics::ErrorKind;

#[test]
fn a_single_id_field_is_valid() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }
    "#};

    let schema = parse_schema(dml);
    schema
        .assert_has_type("User")
        .assert_has_scalar_field("id")
        .assert_is_id();
}

#[test]
fn fail_on_missing_id_field() {
    let dml = indoc! {r#"
        type User {
          name: String
        }
    "#};

    let expectation = expect![[r#"
        error: Error validating type "User": One field must be marked with `@id`.
          -->  datamodel.prisma:1
           |
         1 | type User {
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_multiple_id_fields() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          secondary: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: Error validating field "id" on type "User": At most one field can be marked with `@id`.
          -->  datamodel.prisma:2
           |
         1 | type User {
         2 |   id: ID! @id
           |
        error: Error validating field "secondary" on type "User": At most one field can be marked with `@id`.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   secondary: ID! @id
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_id_field_with_wrong_type() {
    let dml = indoc! {r#"
        type User {
          id: String! @id
        }
    "#};

    let expectation = expect![[r#"
        error: Error validating field "id" on type "User": Fields marked with `@id` must have type `ID!`.
          -->  datamodel.prisma:2
           |
         1 | type User {
         2 |   id: String! @id
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_optional_id_field() {
    let dml = indoc! {r#"
        type User {
          id: ID @id
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::Validation]);
}

#[test]
fn fail_on_duplicate_id_directive_on_one_field() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id @id
        }
    "#};

    let expectation = expect![[r#"
        error: Directive "@id" can only be defined once.
          -->  datamodel.prisma:2
           |
         1 | type User {
         2 |   id: ID! @id @id
           |
    "#]];

    expect_error(dml, &expectation);
}
