//! The datamodel as understood by the compiler: parsed files, resolved
//! names, validated directives and resolved relations, addressable by id
//! and traversable through walkers.
//!
//! The resolution steps, in order:
//!
//! 1. Parse every source file into a syntax tree (syntax errors are fatal
//!    for the whole set).
//! 2. Resolve top level names: global uniqueness, naming conventions.
//! 3. Resolve field types and validate directives against the rule table.
//! 4. Resolve relations: pair up relation fields into edges.
//!
//! Later phases only run when the earlier ones did not produce errors, so
//! they can rely on the invariants those phases established.

#![deny(rust_2018_idioms, unsafe_code)]
#![allow(clippy::derive_partial_eq_without_eq)]

pub mod walkers;

mod attributes;
mod context;
mod files;
mod ids;
mod interner;
mod names;
mod relations;
mod types;

pub use diagnostics;
pub use files::Files;
pub use ids::{EnumId, RelationFieldId, RelationId, ScalarFieldId, TypeId};
pub use relations::Multiplicity;
pub use schema_ast::{self, SourceFile, ast};
pub use types::{OnDeleteStrategy, RelationLink, ScalarFieldType, ScalarType};

use diagnostics::Diagnostics;

/// See the docs on [ParserDatabase::new].
pub struct ParserDatabase {
    files: Files,
    interner: interner::StringInterner,
    names: names::Names,
    types: types::Types,
    relations: relations::Relations,
}

impl ParserDatabase {
    /// See the module docs. Errors are collected in `diagnostics`; when it
    /// contains errors after construction, the database is incomplete and
    /// no derived output should be produced from it.
    pub fn new(files: &[(String, SourceFile)], diagnostics: &mut Diagnostics) -> Self {
        let asts = Files::new(files, diagnostics);

        let mut interner = interner::StringInterner::default();
        let mut names = names::Names::default();
        let mut types = types::Types::default();
        let mut relations = relations::Relations::default();

        // Syntax errors: the trees are incomplete, later phases would only
        // produce noise.
        if !diagnostics.has_errors() {
            let mut ctx = context::Context {
                files: &asts,
                interner: &mut interner,
                names: &mut names,
                types: &mut types,
                relations: &mut relations,
                diagnostics,
            };

            names::resolve_names(&mut ctx);
            types::resolve_types(&mut ctx);

            if !ctx.diagnostics.has_errors() {
                relations::resolve_relations(&mut ctx);
            }
        }

        ParserDatabase {
            files: asts,
            interner,
            names,
            types,
            relations,
        }
    }

    /// Compile a single source file.
    pub fn new_single_file(file: SourceFile, diagnostics: &mut Diagnostics) -> Self {
        Self::new(&[("datamodel.prisma".to_owned(), file)], diagnostics)
    }

    /// The source files of the schema.
    pub fn files(&self) -> &Files {
        &self.files
    }

    /// Render the given diagnostics against the schema's source files.
    pub fn render_diagnostics(&self, diagnostics: &Diagnostics) -> String {
        self.files.render_diagnostics(diagnostics)
    }
}

impl std::fmt::Debug for ParserDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<ParserDatabase>")
    }
}
