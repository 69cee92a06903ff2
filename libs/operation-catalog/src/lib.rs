//! The derived API surface of a datamodel: the operations the generated
//! API exposes for each type, with their client-facing names. A pure
//! derivation with no failure modes of its own.

#![deny(rust_2018_idioms, unsafe_code)]
#![allow(clippy::derive_partial_eq_without_eq)]

mod build;
mod pluralize;

pub use build::build;
pub use pluralize::pluralize;

use serde::{Deserialize, Serialize};

/// The operations a schema entails, one fixed set per type, in type
/// declaration order.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct OperationCatalog {
    operations: Vec<Operation>,
}

impl OperationCatalog {
    pub fn push_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// All operations, in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.operations.iter()
    }

    /// The operations derived for one type.
    pub fn for_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Operation> {
        self.operations.iter().filter(move |op| op.type_name == type_name)
    }

    /// Find an operation by type and kind. For `Get`, this returns the
    /// primary (by id) variant.
    pub fn find(&self, type_name: &str, kind: OperationKind) -> Option<&Operation> {
        self.operations
            .iter()
            .find(|op| op.type_name == type_name && op.kind == kind && op.unique_field.is_none())
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// One operation of the generated API.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Operation {
    /// The type the operation works on.
    pub type_name: String,
    pub kind: OperationKind,
    /// The client-facing field name, e.g. `createUser`.
    pub field_name: String,
    /// For get-by-unique-field variants, the unique field driving the
    /// lookup.
    pub unique_field: Option<String>,
    /// For list operations, what the query surface lets callers do.
    pub list_features: Option<ListFeatures>,
}

/// The query arguments a list operation accepts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFeatures {
    pub filtering: bool,
    pub ordering: bool,
    pub pagination: bool,
}

impl Default for ListFeatures {
    fn default() -> Self {
        ListFeatures {
            filtering: true,
            ordering: true,
            pagination: true,
        }
    }
}

/// The fixed operation set of a type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Fetch a single node by id, or by a unique field.
    Get,
    /// Fetch a filtered, ordered, paginated list of nodes.
    List,
    Create,
    Update,
    Delete,
    /// Check whether a node matching a filter exists.
    Exists,
    /// Subscribe to create, update and delete events.
    Subscribe,
}
