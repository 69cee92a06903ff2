mod context;
mod validations;

use diagnostics::Diagnostics;
use parser_database::ParserDatabase;

/// Validate a parsed datamodel.
pub(crate) fn validate(db: &ParserDatabase, diagnostics: &mut Diagnostics) {
    // Early return so that the validator does not have to deal with
    // invalid schemas.
    if !diagnostics.errors().is_empty() {
        return;
    }

    let mut context = context::Context { db, diagnostics };

    validations::validate(&mut context);
}
