use super::{
    Rule,
    helpers::{Pair, parsing_catch_all, to_span},
    parse_comments::{parse_comment_block, parse_trailing_comment},
    parse_directive::parse_directive,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_enum(
    pair: Pair<'_>,
    doc_comment: Option<Pair<'_>>,
    file_id: FileId,
    diagnostics: &mut Diagnostics,
) -> EnumDecl {
    let comment: Option<Comment> = doc_comment.and_then(parse_comment_block);
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut directives: Vec<Directive> = Vec::new();
    let mut values: Vec<EnumValue> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::ENUM_KEYWORD | Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE => {}
            Rule::identifier => name = Some(Identifier::new(&current, file_id)),
            Rule::directive => directives.push(parse_directive(current, file_id, diagnostics)),
            Rule::enum_contents => {
                let mut pending_value_comment: Option<Pair<'_>> = None;

                for item in current.into_inner() {
                    match item.as_rule() {
                        Rule::enum_value_declaration => {
                            values.push(parse_enum_value(item, pending_value_comment.take(), file_id))
                        }
                        Rule::comment_block => pending_value_comment = Some(item),
                        Rule::BLOCK_LEVEL_CATCH_ALL => diagnostics.push_error(DatamodelError::new_syntax_error(
                            "This line is not an enum value definition.",
                            to_span(item.as_span(), file_id),
                        )),
                        _ => parsing_catch_all(&item, "enum"),
                    }
                }
            }
            _ => parsing_catch_all(&current, "enum"),
        }
    }

    match name {
        Some(name) => EnumDecl {
            name,
            values,
            directives,
            documentation: comment,
            span: to_span(pair_span, file_id),
        },
        _ => panic!("Encountered impossible enum declaration during parsing, name is missing."),
    }
}

fn parse_enum_value(pair: Pair<'_>, doc_comment: Option<Pair<'_>>, file_id: FileId) -> EnumValue {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut comment: Option<Comment> = doc_comment.and_then(parse_comment_block);

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::identifier => name = Some(Identifier::new(&current, file_id)),
            Rule::trailing_comment => {
                comment = match (comment, parse_trailing_comment(current)) {
                    (None, a) | (a, None) => a,
                    (Some(a), Some(b)) => Some(Comment {
                        text: [a.text, b.text].join("\n"),
                    }),
                };
            }
            Rule::EOI => {}
            _ => parsing_catch_all(&current, "enum value"),
        }
    }

    match name {
        Some(name) => EnumValue {
            name,
            documentation: comment,
            span: to_span(pair_span, file_id),
        },
        _ => panic!("Encountered impossible enum value declaration during parsing, name is missing."),
    }
}
