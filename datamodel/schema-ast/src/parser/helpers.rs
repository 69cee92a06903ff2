use super::Rule;
use diagnostics::{FileId, Span};

pub(crate) type Pair<'a> = pest::iterators::Pair<'a, Rule>;

#[track_caller]
pub(crate) fn parsing_catch_all(pair: &Pair<'_>, kind: &str) {
    match pair.as_rule() {
        Rule::empty_lines | Rule::trailing_comment | Rule::comment_block => {}
        x => unreachable!(
            "Encountered impossible {} during parsing: {:?} {:?}",
            kind,
            &x,
            pair.clone().tokens()
        ),
    }
}

/// Attach the file id to a pest span.
pub(crate) fn to_span(span: pest::Span<'_>, file_id: FileId) -> Span {
    Span::new(span.start(), span.end(), file_id)
}
