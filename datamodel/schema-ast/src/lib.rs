//! The abstract syntax tree and parser for the schema definition language.

#![deny(rust_2018_idioms, unsafe_code)]

pub mod ast;

mod parser;
mod source_file;

pub use parser::parse_schema;
pub use source_file::SourceFile;
