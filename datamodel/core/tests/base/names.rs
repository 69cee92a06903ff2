use crate::common::*;

#[test]
fn fail_on_lowercase_type_name() {
    let dml = indoc! {r#"
        type user {
          id: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: The type name "user" is invalid. Type names must start with an uppercase letter.
          -->  datamodel.prisma:1
           |
         1 | type user {
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_uppercase_scalar_field_name() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          Email: String
        }
    "#};

    let expectation = expect![[r#"
        error: The field name "Email" is invalid. Field names must start with a lowercase letter.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   Email: String
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_field_name_with_underscore() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          user_name: String
        }
    "#};

    let expectation = expect![[r#"
        error: The field name "user_name" is invalid. Field names may only contain alphanumeric characters.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   user_name: String
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_lowercase_enum_value() {
    let dml = indoc! {r#"
        enum Role {
          admin
        }
    "#};

    let expectation = expect![[r#"
        error: The enum value name "admin" is invalid. Enum values must start with an uppercase letter.
          -->  datamodel.prisma:2
           |
         1 | enum Role {
         2 |   admin
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_overlong_type_name() {
    let long_name = "A".repeat(65);
    let dml = format!("type {long_name} {{\n  id: ID! @id\n}}\n");

    let kinds = error_kinds(&dml);
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0], datamodel_core::diagnostics::ErrorKind::Validation);
}

#[test]
fn uppercase_relation_field_names_are_not_an_error() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          Author: User!
        }

        type User {
          id: ID! @id
        }
    "#};

    assert_valid(dml);
}

#[test]
fn enum_values_may_contain_underscores() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          role: Role
        }

        enum Role {
          SUPER_ADMIN
          USER
        }
    "#};

    assert_valid(dml);
}
