use diagnostics::{DatamodelError, DatamodelWarning, Diagnostics};
use parser_database::ParserDatabase;

/// The state the validation functions operate on.
pub(crate) struct Context<'db> {
    pub(crate) db: &'db ParserDatabase,
    pub(crate) diagnostics: &'db mut Diagnostics,
}

impl Context<'_> {
    pub(crate) fn push_error(&mut self, error: DatamodelError) {
        self.diagnostics.push_error(error)
    }

    pub(crate) fn push_warning(&mut self, warning: DatamodelWarning) {
        self.diagnostics.push_warning(warning)
    }
}
