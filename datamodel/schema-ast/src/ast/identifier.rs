use diagnostics::{FileId, Span};

/// An identifier with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier contents.
    pub name: String,
    /// The span of the identifier in the source.
    pub span: Span,
}

impl Identifier {
    pub(crate) fn new<R: pest::RuleType>(pair: &pest::iterators::Pair<'_, R>, file_id: FileId) -> Self {
        let span = pair.as_span();

        Identifier {
            name: pair.as_str().to_owned(),
            span: Span::new(span.start(), span.end(), file_id),
        }
    }
}

impl super::WithSpan for Identifier {
    fn span(&self) -> Span {
        self.span
    }
}

impl super::WithName for Identifier {
    fn name(&self) -> &str {
        &self.name
    }
}
