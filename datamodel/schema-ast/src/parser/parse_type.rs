use super::{
    Rule,
    helpers::{Pair, parsing_catch_all, to_span},
    parse_comments::parse_comment_block,
    parse_directive::parse_directive,
    parse_field::parse_field,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_type_declaration(
    pair: Pair<'_>,
    doc_comment: Option<Pair<'_>>,
    file_id: FileId,
    diagnostics: &mut Diagnostics,
) -> TypeDecl {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut directives: Vec<Directive> = Vec::new();
    let mut fields: Vec<FieldDecl> = Vec::new();

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::TYPE_KEYWORD | Rule::BLOCK_OPEN | Rule::BLOCK_CLOSE => {}
            Rule::identifier => name = Some(Identifier::new(&current, file_id)),
            Rule::directive => directives.push(parse_directive(current, file_id, diagnostics)),
            Rule::type_contents => {
                let mut pending_field_comment: Option<Pair<'_>> = None;

                for item in current.into_inner() {
                    match item.as_rule() {
                        Rule::field_declaration => match parse_field(
                            &name.as_ref().unwrap().name,
                            item,
                            pending_field_comment.take(),
                            file_id,
                            diagnostics,
                        ) {
                            Ok(field) => fields.push(field),
                            Err(err) => diagnostics.push_error(err),
                        },
                        Rule::comment_block => pending_field_comment = Some(item),
                        Rule::BLOCK_LEVEL_CATCH_ALL => diagnostics.push_error(DatamodelError::new_syntax_error(
                            "This line is not a valid field or directive definition.",
                            to_span(item.as_span(), file_id),
                        )),
                        _ => parsing_catch_all(&item, "type"),
                    }
                }
            }
            _ => parsing_catch_all(&current, "type"),
        }
    }

    match name {
        Some(name) => TypeDecl {
            name,
            fields,
            directives,
            documentation: doc_comment.and_then(parse_comment_block),
            span: to_span(pair_span, file_id),
        },
        _ => panic!("Encountered impossible type declaration during parsing"),
    }
}
