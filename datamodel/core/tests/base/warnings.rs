use crate::common::*;

#[test]
fn warn_on_list_field_without_outer_required_marker() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          tags: [String!] @scalarList(strategy: RELATION)
        }
    "#};

    let schema = parse_schema(dml);
    let warnings = schema.diagnostics.warnings();

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message().contains("\"tags\""));
}

#[test]
fn warn_on_superfluous_relation_name() {
    let dml = indoc! {r#"
        type Post {
          id: ID! @id
          author: User! @relation(name: "PostAuthor")
        }

        type User {
          id: ID! @id
          posts: [Post!]! @relation(name: "PostAuthor")
        }
    "#};

    let schema = parse_schema(dml);
    let warnings = schema.diagnostics.warnings();

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message().contains("superfluous"));
}

#[test]
fn no_warnings_on_a_clean_schema() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          posts: [Post!]!
        }

        type Post {
          id: ID! @id
          author: User!
        }
    "#};

    let schema = parse_schema(dml);

    assert!(schema.diagnostics.warnings().is_empty());
}
