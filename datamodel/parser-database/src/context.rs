use crate::{files::Files, interner::StringInterner, names::Names, relations::Relations, types::Types};
use diagnostics::{DatamodelError, DatamodelWarning, Diagnostics};

/// The state shared between the resolution phases.
pub(crate) struct Context<'db> {
    pub(crate) files: &'db Files,
    pub(crate) interner: &'db mut StringInterner,
    pub(crate) names: &'db mut Names,
    pub(crate) types: &'db mut Types,
    pub(crate) relations: &'db mut Relations,
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
