use crate::{
    Span,
    pretty_print::{DiagnosticColorer, pretty_print},
};
use colored::{ColoredString, Colorize};

/// A non-fatal warning emitted by the datamodel compiler.
/// For fancy printing, please use the `pretty_print` function.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DatamodelWarning {
    message: String,
    span: Span,
}

impl DatamodelWarning {
    fn new(message: String, span: Span) -> DatamodelWarning {
        DatamodelWarning { message, span }
    }

    pub fn new_list_field_not_required(field_name: &str, span: Span) -> DatamodelWarning {
        let message = format!(
            "The list field \"{field_name}\" is not marked required at the outer level. List fields are always treated as required; write `[T!]!` to make this explicit."
        );
        Self::new(message, span)
    }

    pub fn new_relation_name_superfluous(relation_name: &str, span: Span) -> DatamodelWarning {
        let message = format!(
            "The relation name \"{relation_name}\" is superfluous. There is only one relation between these types, so the name can be omitted."
        );
        Self::new(message, span)
    }

    /// The user-facing warning message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source span the warning applies to.
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
            &DatamodelWarningColorer {},
        )
    }
}

struct DatamodelWarningColorer {}

impl DiagnosticColorer for DatamodelWarningColorer {
    fn title(&self) -> &'static str {
        "warning"
    }

    fn primary_color(&self, token: &'_ str) -> ColoredString {
        token.bright_yellow()
    }
}
