use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `${` with no matching `}` before the end of input
    #[error("unexpected EOF while looking for matching }}")]
    UnterminatedToken { position: usize },
    /// Raised by `${NAME:?}` when NAME is unset or empty
    #[error("{name}: {message}")]
    RequiredVariableUnset { name: String, message: String },
    /// A mapping key rendered to something other than a string
    #[error("cannot resolve key `{key}` to string")]
    KeyNotString { key: String },
}

impl Error {
    /// Byte offset where the scan step that hit the error began, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnterminatedToken { position } => Some(*position),
            _ => None,
        }
    }
}
