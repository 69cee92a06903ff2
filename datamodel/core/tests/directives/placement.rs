use crate::common::*;

#[test]
fn fail_on_unknown_directive() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          email: String @foo
        }
    "#};

    let expectation = expect![[r#"
        error: Directive "@foo" is unknown.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   email: String @foo
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_unique_on_relation_field() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User @unique
        }

        type User {
          id: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@unique": This directive is not allowed on relation fields.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   author: User @unique
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_relation_directive_on_scalar_field() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          email: String @relation(name: "Email")
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@relation": This directive is not allowed on scalar fields.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   email: String @relation(name: "Email")
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_relation_table_directive_on_field() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          email: String @relationTable
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@relationTable": This directive is not allowed on scalar fields.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   email: String @relationTable
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_directives_on_enums() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }

        enum Role @db(name: "roles") {
          ADMIN
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@db": This directive is not allowed on enums.
          -->  datamodel.prisma:5
           |
         4 |
         5 | enum Role @db(name: "roles") {
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_unknown_directive_argument() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User! @relation(mode: INLINE)
        }

        type User {
          id: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@relation": Argument "mode" is unknown.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   author: User! @relation(mode: INLINE)
           |
    "#]];

    expect_error(dml, &expectation);
}

#[test]
fn fail_on_wrong_link_constant() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User! @relation(link: FOREIGN)
        }

        type User {
          id: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@relation": Expected one of INLINE, TABLE, but received `FOREIGN`.
          -->  datamodel.prisma:3
           |
         2 |   id: ID! @id
         3 |   author: User! @relation(link: FOREIGN)
           |
    "#]];

    expect_error(dml, &expectation);
}
