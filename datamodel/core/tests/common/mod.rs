mod asserts;

pub(crate) use asserts::*;
pub(crate) use expect_test::expect;
pub(crate) use indoc::indoc;

use datamodel_core::{CompiledDatamodel, ValidatedDatamodel, diagnostics::ErrorKind};

fn disable_colors() {
    colored::control::set_override(false);
}

#[track_caller]
pub(crate) fn parse_schema(datamodel_string: &str) -> ValidatedDatamodel {
    match datamodel_core::parse_datamodel(datamodel_string) {
        Ok(schema) => schema,
        Err(err) => panic!("Datamodel parsing failed\n\n{err}"),
    }
}

pub(crate) fn parse_unwrap_err(schema: &str) -> String {
    disable_colors();
    datamodel_core::parse_datamodel(schema).map(drop).unwrap_err()
}

#[track_caller]
pub(crate) fn expect_error(schema: &str, expectation: &expect_test::Expect) {
    expectation.assert_eq(&parse_unwrap_err(schema))
}

#[track_caller]
pub(crate) fn assert_valid(schema: &str) {
    match datamodel_core::parse_datamodel(schema) {
        Ok(_) => (),
        Err(err) => panic!("{err}"),
    }
}

/// The error kinds of a failing schema, in diagnostic order.
pub(crate) fn error_kinds(schema: &str) -> Vec<ErrorKind> {
    datamodel_core::validate_single(schema.into())
        .diagnostics
        .errors()
        .iter()
        .map(|error| error.kind())
        .collect()
}

#[track_caller]
pub(crate) fn compile(schema: &str) -> CompiledDatamodel {
    match datamodel_core::compile_single(schema) {
        Ok(compiled) => compiled,
        Err(err) => panic!("Compilation failed\n\n{err}"),
    }
}
