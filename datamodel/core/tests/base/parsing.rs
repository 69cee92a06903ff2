use crate::common::*;

#[test]
fn fail_on_unknown_top_level_line() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }

        notakeyword
    "#};

    let expectation = expect![[r#"
        error: This line is invalid. It does not start with any known datamodel keyword.
          -->  datamodel.prisma:5
           |
         4 |
         5 | notakeyword
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_unknown_block_keyword() {
    let dml = indoc! {r#"
        model User {
          id: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: This block is invalid. It does not start with any known datamodel keyword. Valid keywords are 'type' and 'enum'.
          -->  datamodel.prisma:1
           |
         1 | model User {
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_field_without_colon() {
    let dml = indoc! {r#"
        type User {
          id ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: This line is not a valid field or directive definition.
          -->  datamodel.prisma:2
           |
         1 | type User {
         2 |   id ID! @id
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn syntax_errors_are_fatal_for_the_run() {
    let dml = indoc! {r#"
        type User {
          id ID! @id
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[datamodel_core::diagnostics::ErrorKind::Syntax]);
}

#[test]
fn comments_attach_to_declarations() {
    let dml = indoc! {r#"
        # A person with an account.
        type User {
          id: ID! @id
          # The login email.
          email: String @unique
        }
    "#};

    let schema = parse_schema(dml);
    let user = schema.assert_has_type("User").assert_field_count(2);

    assert_eq!(user.documentation(), Some("A person with an account."));

    let email = user.assert_has_scalar_field("email");
    email
        .assert_scalar_type(datamodel_core::parser_database::ScalarType::String)
        .assert_is_unique();
    assert_eq!(email.documentation(), Some("The login email."));
}

#[test]
fn trailing_commas_in_directive_arguments_parse() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User! @relation(name: "PostAuthor", link: INLINE,)
        }

        type User {
          id: ID! @id
          posts: [Post!]! @relation(name: "PostAuthor")
        }
    "#};

    assert_valid(dml);
}

#[test]
fn string_escapes_are_resolved() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          greeting: String @default(value: "hello\nworld")
        }
    "#};

    let schema = parse_schema(dml);
    let greeting = schema.assert_has_type("User").assert_has_scalar_field("greeting");

    match greeting.default_value() {
        Some(datamodel_core::schema_ast::ast::Expression::StringValue(value, _)) => {
            assert_eq!(value, "hello\nworld")
        }
        other => panic!("unexpected default value: {other:?}"),
    }
}
