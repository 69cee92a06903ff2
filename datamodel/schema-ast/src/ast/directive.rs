use super::{Expression, Identifier, Span, WithName, WithSpan};

/// A directive instance: `@name` or `@name(arg: value, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// The name of the directive, without the `@`.
    ///
    /// ```ignore
    /// @relation(name: "PostAuthor")
    ///  ^^^^^^^^
    /// ```
    pub name: Identifier,
    /// The arguments, in declaration order.
    pub arguments: Vec<Argument>,
    /// The span of the whole directive.
    pub span: Span,
}

impl Directive {
    /// Try to find an argument by name.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name.name == name)
    }

    /// The span of the argument with the given name, if present.
    pub fn span_for_argument(&self, name: &str) -> Option<Span> {
        self.argument(name).map(|arg| arg.span)
    }
}

/// A named directive argument: `name: value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

impl WithName for Directive {
    fn name(&self) -> &str {
        &self.name.name
    }
}

impl WithSpan for Directive {
    fn span(&self) -> Span {
        self.span
    }
}

impl WithSpan for Argument {
    fn span(&self) -> Span {
        self.span
    }
}
