use crate::{
    Span,
    pretty_print::{DiagnosticColorer, pretty_print},
};
use colored::{ColoredString, Colorize};
use std::borrow::Cow;

/// The closed taxonomy of compiler errors. Every error is one of these
/// kinds; the kind is what external tooling matches on, the message is what
/// humans read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed source. Fatal: no AST is produced for the file.
    Syntax,
    /// Naming, casing, length or directive placement violations. Collected
    /// in batch over the whole schema.
    Validation,
    /// A relation grouping that cannot be resolved without a disambiguating
    /// relation name.
    AmbiguousRelation,
    /// Both endpoints of one relation resolve to `CASCADE`.
    InvalidCascade,
    /// A link strategy that is missing where required, or impossible for
    /// the relation's multiplicity.
    UnsupportedLink,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::AmbiguousRelation => "AmbiguousRelationError",
            ErrorKind::InvalidCascade => "InvalidCascadeError",
            ErrorKind::UnsupportedLink => "UnsupportedLinkError",
        };
        f.write_str(name)
    }
}

/// A fatal datamodel compiler error, with a source span for rendering.
/// For fancy printing, please use the `pretty_print` function.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DatamodelError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    span: Span,
}

impl DatamodelError {
    fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>, span: Span) -> Self {
        DatamodelError {
            kind,
            message: message.into(),
            span,
        }
    }

    pub fn new_static(message: &'static str, span: Span) -> Self {
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_parser_error(expected: String, span: Span) -> Self {
        Self::new(
            ErrorKind::Syntax,
            format!("Unexpected token. Expected one of: {expected}"),
            span,
        )
    }

    pub fn new_syntax_error(message: impl Into<Cow<'static, str>>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn new_validation_error(message: impl Into<Cow<'static, str>>, span: Span) -> Self {
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_duplicate_type_error(type_name: &str, span: Span) -> Self {
        let message =
            format!("The type \"{type_name}\" cannot be defined because a type or enum with that name already exists.");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_duplicate_field_error(type_name: &str, field_name: &str, span: Span) -> Self {
        let message = format!("Field \"{field_name}\" is already defined on type \"{type_name}\".");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_duplicate_enum_value_error(enum_name: &str, value_name: &str, span: Span) -> Self {
        let message = format!("Value \"{value_name}\" is already defined on enum \"{enum_name}\".");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_name_error(container: &str, name: &str, rule: &str, span: Span) -> Self {
        let message = format!("The {container} name \"{name}\" is invalid. {rule}");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_unknown_directive_error(directive_name: &str, span: Span) -> Self {
        let message = format!("Directive \"@{directive_name}\" is unknown.");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_duplicate_directive_error(directive_name: &str, span: Span) -> Self {
        let message = format!("Directive \"@{directive_name}\" can only be defined once.");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_directive_validation_error(message: &str, directive_name: &str, span: Span) -> Self {
        let message = format!("Error parsing directive \"@{directive_name}\": {message}");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_type_validation_error(message: &str, type_name: &str, span: Span) -> Self {
        let message = format!("Error validating type \"{type_name}\": {message}");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_field_validation_error(message: &str, type_name: &str, field_name: &str, span: Span) -> Self {
        let message = format!("Error validating field \"{field_name}\" on type \"{type_name}\": {message}");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_default_value_error(message: &str, span: Span) -> Self {
        let message = format!("Error validating default value: {message}");
        Self::new(ErrorKind::Validation, message, span)
    }

    pub fn new_ambiguous_relation_error(message: &str, span: Span) -> Self {
        Self::new(ErrorKind::AmbiguousRelation, message.to_owned(), span)
    }

    pub fn new_invalid_cascade_error(message: &str, span: Span) -> Self {
        Self::new(ErrorKind::InvalidCascade, message.to_owned(), span)
    }

    pub fn new_unsupported_link_error(message: &str, span: Span) -> Self {
        Self::new(ErrorKind::UnsupportedLink, message.to_owned(), span)
    }

    /// Which of the five error kinds this is.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The user-facing error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source span the error applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn pretty_print(&self, f: &mut dyn std::io::Write, file_name: &str, text: &str) -> std::io::Result<()> {
        pretty_print(
            f,
            file_name,
            text,
            self.span(),
            self.message.as_ref(),
            &DatamodelErrorColorer {},
        )
    }
}

struct DatamodelErrorColorer {}

impl DiagnosticColorer for DatamodelErrorColorer {
    fn title(&self) -> &'static str {
        "error"
    }

    fn primary_color(&self, token: &'_ str) -> ColoredString {
        token.bright_red()
    }
}
