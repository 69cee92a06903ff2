use crate::common::*;

#[test]
fn db_directives_rename_tables_and_columns() {
    let dml = indoc! {r#"
        type User @db(name: "users") {
          id: ID! @id
          email: String @unique @db(name: "email_address")
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    assert!(storage.find_table("User").is_none());

    let table = storage.walk(storage.find_table("users").unwrap());
    assert!(table.column("email_address").is_some());
    assert!(table.column("email").is_none());
}

#[test]
fn db_directives_rename_foreign_key_columns() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User! @db(name: "author_id")
        }

        type User {
          id: ID! @id
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    let post = storage.walk(storage.find_table("Post").unwrap());
    assert!(post.column("author_id").is_some());
    assert!(post.column("author").is_none());

    let foreign_key = storage.walk_foreign_keys().next().unwrap();
    assert_eq!(foreign_key.constrained_column().name(), "author_id");
    assert_eq!(foreign_key.referenced_table().name(), "User");
    assert_eq!(foreign_key.referenced_column().name(), "id");
}

#[test]
fn fail_on_db_directive_without_name() {
    let dml = indoc! {r#"
        type User @db {
          id: ID! @id
        }
    "#};

    let expectation = expect![[r#"
        error: Error parsing directive "@db": Argument "name" is missing.
          -->  datamodel.prisma:1
           |
         1 | type User @db {
           |
    "#]];

    expect_error(dml, &expectation);
}
