//! Pluggable id generation. The compiler core never creates nodes itself;
//! the serving component is handed a generator for the primary keys of id
//! columns that default to generated cuids.

/// The length of a generated id.
pub const CUID_LENGTH: usize = 25;

#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("could not generate an id: {0}")]
    Generation(String),
}

/// A source of primary key values for created nodes.
pub trait IdGenerator {
    /// Produce a fresh identifier in cuid shape: [CUID_LENGTH] lowercase
    /// alphanumeric characters, starting with `c`.
    fn generate(&self) -> Result<String, IdError>;
}

/// The default generator, producing cuids.
#[derive(Debug, Default, Clone, Copy)]
pub struct CuidGenerator;

impl IdGenerator for CuidGenerator {
    fn generate(&self) -> Result<String, IdError> {
        cuid::cuid().map_err(|err| IdError::Generation(err.to_string()))
    }
}

/// Whether a string has the shape of a generated id.
pub fn is_cuid_shaped(s: &str) -> bool {
    s.len() == CUID_LENGTH
        && s.starts_with('c')
        && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}
