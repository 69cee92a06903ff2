use super::{
    Rule,
    helpers::{Pair, parsing_catch_all, to_span},
    parse_comments::{parse_comment_block, parse_trailing_comment},
    parse_directive::parse_directive,
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_field(
    container_name: &str,
    pair: Pair<'_>,
    block_comment: Option<Pair<'_>>,
    file_id: FileId,
    diagnostics: &mut Diagnostics,
) -> Result<FieldDecl, DatamodelError> {
    let pair_span = pair.as_span();
    let mut name: Option<Identifier> = None;
    let mut directives: Vec<Directive> = Vec::new();
    let mut field_type: Option<FieldType> = None;
    let mut comment: Option<Comment> = block_comment.and_then(parse_comment_block);

    for current in pair.into_inner() {
        match current.as_rule() {
            Rule::COLON => {}
            Rule::identifier => name = Some(Identifier::new(&current, file_id)),
            Rule::field_type => field_type = Some(parse_field_type(current, file_id)),
            Rule::directive => directives.push(parse_directive(current, file_id, diagnostics)),
            Rule::trailing_comment => {
                comment = match (comment, parse_trailing_comment(current)) {
                    (None, a) | (a, None) => a,
                    (Some(a), Some(b)) => Some(Comment {
                        text: [a.text, b.text].join("\n"),
                    }),
                };
            }
            Rule::EOI => {}
            _ => parsing_catch_all(&current, "field"),
        }
    }

    match (name, field_type) {
        (Some(name), Some(field_type)) => Ok(FieldDecl {
            field_type,
            name,
            directives,
            documentation: comment,
            span: to_span(pair_span, file_id),
        }),
        _ => Err(DatamodelError::new_syntax_error(
            format!("The field declaration in type \"{container_name}\" is malformed."),
            to_span(pair_span, file_id),
        )),
    }
}

fn parse_field_type(pair: Pair<'_>, file_id: FileId) -> FieldType {
    let span = to_span(pair.as_span(), file_id);
    let current = pair.into_inner().next().unwrap();

    match current.as_rule() {
        Rule::optional_type => FieldType {
            name: type_name(current, file_id),
            arity: FieldArity::Optional,
            span,
        },
        Rule::required_type => FieldType {
            name: type_name(current, file_id),
            arity: FieldArity::Required,
            span,
        },
        Rule::list_type => {
            let mut name: Option<Identifier> = None;
            let mut element_required = false;
            let mut list_required = false;

            for item in current.into_inner() {
                match item.as_rule() {
                    Rule::type_name => name = Some(Identifier::new(&item, file_id)),
                    Rule::element_required => element_required = true,
                    Rule::list_required => list_required = true,
                    _ => unreachable!("Encountered impossible list type member during parsing: {:?}", item),
                }
            }

            FieldType {
                name: name.expect("list type without a type name"),
                arity: FieldArity::List {
                    list_required,
                    element_required,
                },
                span,
            }
        }
        _ => unreachable!("Encountered impossible field type during parsing: {:?}", current),
    }
}

fn type_name(pair: Pair<'_>, file_id: FileId) -> Identifier {
    let current = pair
        .into_inner()
        .next()
        .expect("type reference without a type name");
    debug_assert_eq!(current.as_rule(), Rule::type_name);
    Identifier::new(&current, file_id)
}
