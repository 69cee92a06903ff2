use super::{
    DatamodelParser, Rule,
    helpers::to_span,
    parse_enum::parse_enum,
    parse_type::parse_type_declaration,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};
use pest::Parser;

/// Parse an SDL string and return its AST.
pub fn parse_schema(datamodel_string: &str, file_id: FileId, diagnostics: &mut Diagnostics) -> SchemaAst {
    let datamodel_result = DatamodelParser::parse(Rule::schema, datamodel_string);

    match datamodel_result {
        Ok(mut datamodel_wrapped) => {
            let datamodel = datamodel_wrapped.next().unwrap();
            let mut top_level_definitions: Vec<Top> = vec![];
            let mut pending_block_comment = None;
            let mut pairs = datamodel.into_inner().peekable();

            while let Some(current) = pairs.next() {
                match current.as_rule() {
                    Rule::type_declaration => top_level_definitions.push(Top::Type(parse_type_declaration(
                        current,
                        pending_block_comment.take(),
                        file_id,
                        diagnostics,
                    ))),
                    Rule::enum_declaration => top_level_definitions.push(Top::Enum(parse_enum(
                        current,
                        pending_block_comment.take(),
                        file_id,
                        diagnostics,
                    ))),
                    Rule::comment_block => {
                        match pairs.peek().map(|b| b.as_rule()) {
                            Some(Rule::empty_lines) => {
                                // free floating
                            }
                            Some(Rule::type_declaration) | Some(Rule::enum_declaration) => {
                                pending_block_comment = Some(current);
                            }
                            _ => (),
                        }
                    }
                    Rule::EOI => {}
                    Rule::CATCH_ALL => diagnostics.push_error(DatamodelError::new_syntax_error(
                        "This line is invalid. It does not start with any known datamodel keyword.",
                        to_span(current.as_span(), file_id),
                    )),
                    Rule::arbitrary_block => diagnostics.push_error(DatamodelError::new_syntax_error(
                        "This block is invalid. It does not start with any known datamodel keyword. Valid keywords are 'type' and 'enum'.",
                        to_span(current.as_span(), file_id),
                    )),
                    Rule::empty_lines => (),
                    _ => unreachable!(),
                }
            }

            SchemaAst {
                tops: top_level_definitions,
            }
        }
        Err(err) => {
            let location: pest::Span<'_> = match err.location {
                pest::error::InputLocation::Pos(pos) => pest::Span::new(datamodel_string, pos, pos).unwrap(),
                pest::error::InputLocation::Span((from, to)) => pest::Span::new(datamodel_string, from, to).unwrap(),
            };

            let expected = match err.variant {
                pest::error::ErrorVariant::ParsingError { positives, .. } => get_expected_from_error(&positives),
                _ => panic!("Could not construct parsing error. This should never happend."),
            };

            diagnostics.push_error(DatamodelError::new_parser_error(expected, to_span(location, file_id)));

            SchemaAst { tops: Vec::new() }
        }
    }
}

fn get_expected_from_error(positives: &[Rule]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(positives.len() * 6);

    for positive in positives {
        write!(out, "{positive:?}").unwrap();
    }

    out
}
