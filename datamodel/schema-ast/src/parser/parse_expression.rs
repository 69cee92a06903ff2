use super::{
    Rule,
    helpers::{Pair, to_span},
};
use crate::ast::*;
use diagnostics::{DatamodelError, Diagnostics, FileId};

pub(crate) fn parse_expression(token: Pair<'_>, file_id: FileId, diagnostics: &mut Diagnostics) -> Expression {
    let first_child = token.into_inner().next().unwrap();
    let span = to_span(first_child.as_span(), file_id);

    match first_child.as_rule() {
        Rule::numeric_literal => Expression::NumericValue(first_child.as_str().to_string(), span),
        Rule::string_literal => Expression::StringValue(parse_string_literal(first_child, file_id, diagnostics), span),
        Rule::constant_literal => Expression::ConstantValue(first_child.as_str().to_string(), span),
        _ => unreachable!(
            "Encountered impossible literal during parsing: {:?}",
            first_child.tokens()
        ),
    }
}

fn parse_string_literal(token: Pair<'_>, file_id: FileId, diagnostics: &mut Diagnostics) -> String {
    assert!(token.as_rule() == Rule::string_literal);
    let contents = token.clone().into_inner().next().unwrap();
    let contents_str = contents.as_str();

    // This will overallocate a bit for strings with escaped characters, but
    // it shouldn't make a dramatic difference.
    let mut out = String::with_capacity(contents_str.len());
    let mut chars = contents_str.char_indices();

    while let Some((start, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, '"')) => out.push('"'),
                Some((_, '\\')) => out.push('\\'),
                Some((_, '/')) => out.push('/'),
                Some((_, 'b')) => out.push('\u{0008}'),
                Some((_, 'f')) => out.push('\u{000C}'),
                Some((_, 'n')) => out.push('\n'),
                Some((_, 'r')) => out.push('\r'),
                Some((_, 't')) => out.push('\t'),
                Some((_, 'u')) => {
                    if let Some(char) = parse_unicode_codepoint(&contents_str[start..], &mut chars) {
                        out.push(char);
                    } else {
                        let span = diagnostics::Span::new(
                            contents.as_span().start() + start,
                            contents.as_span().start() + start + 2,
                            file_id,
                        );
                        diagnostics.push_error(DatamodelError::new_static("Invalid unicode escape sequence.", span));
                    }
                }
                Some((escape_start, c)) => {
                    let span = diagnostics::Span::new(
                        contents.as_span().start() + start,
                        contents.as_span().start() + escape_start + c.len_utf8(),
                        file_id,
                    );
                    diagnostics.push_error(DatamodelError::new_static(
                        r#"Unknown escape sequence. If the value is a windows-style path, `\` must be escaped as `\\`."#,
                        span,
                    ));
                }
                None => (),
            },
            other => out.push(other),
        }
    }

    out
}

/// Parses the four hex digits of a `\uXXXX` escape. The iterator is advanced
/// past the digits that could be consumed.
fn parse_unicode_codepoint(slice: &str, chars: &mut std::str::CharIndices<'_>) -> Option<char> {
    if slice.len() < 6 || !slice.starts_with("\\u") {
        return None;
    }

    let mut codepoint = 0u32;

    for _ in 0..4 {
        let nibble = chars.next().and_then(|(_, c)| c.to_digit(16))?;
        codepoint = (codepoint << 4) + nibble;
    }

    char::from_u32(codepoint)
}
