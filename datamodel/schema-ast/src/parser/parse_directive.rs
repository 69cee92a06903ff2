use super::{
    Rule,
    helpers::{Pair, parsing_catch_all, to_span},
    parse_expression::parse_expression,
};
use crate::ast::*;
use diagnostics::{Diagnostics, FileId};

pub(crate) fn parse_directive(pair: Pair<'_>, file_id: FileId, diagnostics: &mut Diagnostics) -> Directive {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut arguments: Vec<Argument> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::directive_name => name = Some(Identifier::new(&current, file_id)),
            Rule::directive_arguments => parse_directive_arguments(current, &mut arguments, file_id, diagnostics),
            _ => parsing_catch_all(&current, "directive"),
        }
    }

    match name {
        Some(name) => Directive {
            name,
            arguments,
            span: to_span(pair_span, file_id),
        },
        _ => panic!("Encountered impossible directive during parsing, name is missing."),
    }
}

fn parse_directive_arguments(
    pair: Pair<'_>,
    arguments: &mut Vec<Argument>,
    file_id: FileId,
    diagnostics: &mut Diagnostics,
) {
    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::argument => {
                let argument_span = current.as_span();
                let mut name: Option<Identifier> = None;
                let mut value: Option<Expression> = None;

                for item in current.into_inner() {
                    match item.as_rule() {
                        Rule::COLON => {}
                        Rule::identifier => name = Some(Identifier::new(&item, file_id)),
                        Rule::expression => value = Some(parse_expression(item, file_id, diagnostics)),
                        _ => parsing_catch_all(&item, "directive argument"),
                    }
                }

                match (name, value) {
                    (Some(name), Some(value)) => arguments.push(Argument {
                        name,
                        value,
                        span: to_span(argument_span, file_id),
                    }),
                    _ => panic!("Encountered impossible directive argument during parsing."),
                }
            }
            _ => parsing_catch_all(&current, "directive arguments"),
        }
    }
}
