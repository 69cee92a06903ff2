use crate::common::*;
use datamodel_core::diagnostics::ErrorKind;

#[test]
fn relation_table_types_become_user_controlled_tables() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }

        type Team {
          id: ID! @id
        }

        type Membership @relationTable {
          user: User!
          team: Team!
        }
    "#};

    let compiled = compile(dml);
    let storage = &compiled.storage;

    // The relation table is not an entity table.
    assert!(storage.find_table("Membership").is_none());

    let membership = storage.walk(storage.find_relation_table("Membership").unwrap());
    assert_eq!(membership.column_a().name, "team");
    assert_eq!(membership.column_b().name, "user");
    assert_eq!(membership.referenced_table_a().name(), "Team");
    assert_eq!(membership.referenced_table_b().name(), "User");
}

#[test]
fn endpoint_list_fields_attach_to_the_relation_table() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          teams: [Team!]! @relation(name: "Membership")
        }

        type Team {
          id: ID! @id
          members: [User!]! @relation(name: "Membership")
        }

        type Membership @relationTable {
          user: User!
          team: Team!
        }
    "#};

    let schema = parse_schema(dml);
    assert_eq!(schema.db.walk_relations().len(), 1);

    let relation = schema.db.walk_relations().next().unwrap();
    assert!(relation.relation_table_type().is_some());
    assert_eq!(relation.field_a().unwrap().name(), "members");
    assert_eq!(relation.field_b().unwrap().name(), "teams");
}

#[test]
fn fail_on_relation_table_with_wrong_field_count() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }

        type Membership @relationTable {
          user: User!
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::Validation]);
}

#[test]
fn fail_on_relation_table_with_scalar_fields() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
        }

        type Team {
          id: ID! @id
        }

        type Membership @relationTable {
          user: User!
          team: Team!
          role: String
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::Validation]);
}

#[test]
fn fail_on_fields_referencing_a_relation_table_type() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          memberships: [Membership!]!
        }

        type Team {
          id: ID! @id
        }

        type Membership @relationTable {
          user: User!
          team: Team!
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::Validation]);
}

#[test]
fn fail_on_single_valued_fields_attaching_to_a_relation_table() {
    let dml = indoc! {r#"
        type User {
          id: ID! @id
          team: Team! @relation(name: "Membership")
        }

        type Team {
          id: ID! @id
        }

        type Membership @relationTable {
          user: User!
          team: Team!
        }
    "#};

    let kinds = error_kinds(dml);
    assert_eq!(kinds, &[ErrorKind::Validation]);
}
