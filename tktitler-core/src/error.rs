//! Error types for title parsing and formatting

use thiserror::Error;

/// Coarse classification of a [`TitleError`]
///
/// Callers that only care about the kind of failure (for example a UI that
/// prompts for manual disambiguation on [`ErrorKind::AmbiguousAlias`]) can
/// match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value of the wrong type was supplied
    InvalidArgumentType,
    /// A value had the right type but the wrong shape
    InvalidFormat,
    /// An alias has more than one valid reading
    AmbiguousAlias,
    /// No reference year was given and none is set in the current scope
    ContextUnset,
}

/// Errors raised by the title codecs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleError {
    /// Externally supplied value could not be read as the expected type
    #[error("{found} is not a valid type for {name}.")]
    InvalidArgumentType {
        /// Name of the parameter
        name: &'static str,
        /// Type that was found instead
        found: String,
    },

    /// Period does not have exactly four digits
    #[error("'{0}' is not a valid period")]
    InvalidPeriod(i32),

    /// Reference year does not have exactly four digits
    #[error("'{0}' is not a valid gfyear")]
    InvalidReferenceYear(i32),

    /// Unrecognized style keyword
    #[error("'{keyword}' is not a valid {parameter} type")]
    UnknownStyle {
        /// Which selector the keyword was given for
        parameter: &'static str,
        /// The keyword as given
        keyword: String,
    },

    /// Prefix text does not match the step grammar
    #[error("invalid prefix: {0:?}")]
    InvalidPrefix(String),

    /// Postfix text does not match any year grammar
    #[error("invalid postfix: {0:?}")]
    InvalidPostfix(String),

    /// Root cannot be re-derived uniquely from its digraphs
    #[error("alias {alias:?} is ambiguous: the letters of {root:?} can be read in more than one way")]
    AmbiguousAlias {
        /// The alias as given by the caller
        alias: String,
        /// The ambiguous root
        root: String,
    },

    /// No explicit reference year and no scoped override
    #[error("no gfyear given and none is set in the current scope")]
    ContextUnset,

    /// Grammar configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl TitleError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TitleError::InvalidArgumentType { .. } => ErrorKind::InvalidArgumentType,
            TitleError::InvalidPeriod(_)
            | TitleError::InvalidReferenceYear(_)
            | TitleError::UnknownStyle { .. }
            | TitleError::InvalidPrefix(_)
            | TitleError::InvalidPostfix(_)
            | TitleError::Config(_) => ErrorKind::InvalidFormat,
            TitleError::AmbiguousAlias { .. } => ErrorKind::AmbiguousAlias,
            TitleError::ContextUnset => ErrorKind::ContextUnset,
        }
    }
}

/// Result type for title operations
pub type Result<T> = std::result::Result<T, TitleError>;
