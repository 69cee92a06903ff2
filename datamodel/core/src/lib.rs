#![doc = include_str!("../README.md")]
#![deny(rust_2018_idioms, unsafe_code)]
#![allow(clippy::derive_partial_eq_without_eq)]

pub mod id;

mod validate;

pub use diagnostics;
pub use operation_catalog::{self, OperationCatalog};
pub use parser_database::{self, ParserDatabase, SourceFile};
pub use schema_ast;
pub use storage_schema::{self, StorageSchema};

use diagnostics::Diagnostics;
use serde::Serialize;

/// A parsed and validated datamodel, together with the diagnostics the
/// run produced.
pub struct ValidatedDatamodel {
    pub db: ParserDatabase,
    pub diagnostics: Diagnostics,
}

impl std::fmt::Debug for ValidatedDatamodel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<Validated datamodel>")
    }
}

impl ValidatedDatamodel {
    /// True if the datamodel cannot be compiled.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Render this schema's own diagnostics with source context.
    pub fn render_own_diagnostics(&self) -> String {
        self.db.render_diagnostics(&self.diagnostics)
    }
}

/// The derived outputs of one compilation run. A pure function of the
/// validated datamodel; compiling the same sources twice yields identical
/// serialized output.
#[derive(Debug, Serialize)]
pub struct CompiledDatamodel {
    pub storage: StorageSchema,
    pub operations: OperationCatalog,
}

/// The most general API for dealing with datamodels. It accumulates what
/// analysis and validation information it can, and returns it along with
/// any error and warning diagnostics.
pub fn validate(files: &[(String, SourceFile)]) -> ValidatedDatamodel {
    let mut diagnostics = Diagnostics::new();
    let db = ParserDatabase::new(files, &mut diagnostics);

    validate::validate(&db, &mut diagnostics);

    tracing::debug!(
        errors = diagnostics.errors().len(),
        warnings = diagnostics.warnings().len(),
        "validated datamodel"
    );

    ValidatedDatamodel { db, diagnostics }
}

/// Validate a single-file datamodel.
pub fn validate_single(file: SourceFile) -> ValidatedDatamodel {
    validate(&[("datamodel.prisma".to_owned(), file)])
}

/// Parse and validate a single-file datamodel, rendering any errors into
/// a human-readable report.
pub fn parse_datamodel(input: &str) -> Result<ValidatedDatamodel, String> {
    let schema = validate_single(input.into());

    if schema.has_errors() {
        Err(schema.render_own_diagnostics())
    } else {
        Ok(schema)
    }
}

/// Run the whole pipeline: parse, validate, and derive the storage schema
/// and the operation catalog. Returns the rendered diagnostics when the
/// datamodel does not validate.
pub fn compile(files: &[(String, SourceFile)]) -> Result<CompiledDatamodel, String> {
    tracing::debug!(files = files.len(), "compiling datamodel");

    let schema = validate(files);

    if schema.has_errors() {
        return Err(schema.render_own_diagnostics());
    }

    let storage = storage_schema::calculate(&schema.db);
    let operations = operation_catalog::build(&schema.db);

    tracing::debug!(
        tables = storage.tables_count(),
        operations = operations.len(),
        "derived storage schema and operation catalog"
    );

    Ok(CompiledDatamodel { storage, operations })
}

/// Compile a single-file datamodel.
pub fn compile_single(input: &str) -> Result<CompiledDatamodel, String> {
    compile(&[("datamodel.prisma".to_owned(), input.into())])
}
