use super::Span;

/// A literal in a directive argument position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A numeric literal, e.g. `42` or `1.5`. Kept as source text; callers
    /// coerce to the expected numeric type.
    NumericValue(String, Span),
    /// A quoted string literal, e.g. `"PostAuthor"`, with escapes resolved.
    StringValue(String, Span),
    /// A bare constant, e.g. `CASCADE`, `INLINE` or `true`.
    ConstantValue(String, Span),
}

impl Expression {
    pub fn as_string_value(&self) -> Option<(&str, Span)> {
        match self {
            Expression::StringValue(s, span) => Some((s, *span)),
            _ => None,
        }
    }

    pub fn as_constant_value(&self) -> Option<(&str, Span)> {
        match self {
            Expression::ConstantValue(s, span) => Some((s, *span)),
            _ => None,
        }
    }

    pub fn as_numeric_value(&self) -> Option<(&str, Span)> {
        match self {
            Expression::NumericValue(s, span) => Some((s, *span)),
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expression::NumericValue(_, span) => *span,
            Expression::StringValue(_, span) => *span,
            Expression::ConstantValue(_, span) => *span,
        }
    }

    /// The kind of value, for error messages.
    pub fn describe_value_type(&self) -> &'static str {
        match self {
            Expression::NumericValue(_, _) => "numeric",
            Expression::StringValue(_, _) => "string",
            Expression::ConstantValue(_, _) => "literal",
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::NumericValue(val, _) => f.write_str(val),
            Expression::StringValue(val, _) => write!(f, "\"{val}\""),
            Expression::ConstantValue(val, _) => f.write_str(val),
        }
    }
}
