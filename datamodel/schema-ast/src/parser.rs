mod helpers;
mod parse_comments;
mod parse_directive;
mod parse_enum;
mod parse_expression;
mod parse_field;
mod parse_schema;
mod parse_type;

pub use parse_schema::parse_schema;

use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/datamodel.pest"]
pub(crate) struct DatamodelParser;
