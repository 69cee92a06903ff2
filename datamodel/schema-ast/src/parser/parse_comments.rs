use super::{Rule, helpers::Pair};
use crate::ast::Comment;

pub(crate) fn parse_comment_block(token: Pair<'_>) -> Option<Comment> {
    debug_assert!(token.as_rule() == Rule::comment_block);
    let mut lines: Vec<String> = Vec::new();

    for comment in token.into_inner() {
        if let Rule::comment = comment.as_rule() {
            if let Some(text) = comment_text(comment) {
                lines.push(text);
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(Comment {
            text: lines.join("\n"),
        })
    }
}

pub(crate) fn parse_trailing_comment(pair: Pair<'_>) -> Option<Comment> {
    debug_assert!(pair.as_rule() == Rule::trailing_comment);

    pair.into_inner()
        .find(|current| current.as_rule() == Rule::comment)
        .and_then(comment_text)
        .map(|text| Comment { text })
}

fn comment_text(pair: Pair<'_>) -> Option<String> {
    pair.into_inner()
        .find(|current| current.as_rule() == Rule::comment_content)
        .map(|content| content.as_str().trim().to_owned())
}
