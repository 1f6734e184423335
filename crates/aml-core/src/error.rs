use std::fmt;
use std::path::PathBuf;

use aml_model::ModelError;
use aml_xml::XmlError;

/// Broad classification of an [`AmlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The host program misused the API or shipped a bad application file.
    Programmer,
    /// The end user supplied bad or incomplete input.
    User,
    /// The application file could not be read or parsed.
    XmlParse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Programmer => "PROGRAMMER ERROR",
            ErrorKind::User => "USER ERROR",
            ErrorKind::XmlParse => "XML PARSE ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AmlError {
    #[error("{message}")]
    Programmer { message: String },

    #[error("{message}")]
    User { message: String },

    #[error("Unknown parameter [{name}].")]
    UnknownParameter { name: String },

    #[error("Parameter [{name}] is not unique.")]
    AmbiguousParameter { name: String },

    #[error(transparent)]
    Xml(#[from] XmlError),

    #[error("failed to load user preferences {path}: {message}")]
    Preferences { path: PathBuf, message: String },
}

impl AmlError {
    pub fn programmer(message: impl Into<String>) -> Self {
        Self::Programmer {
            message: message.into(),
        }
    }

    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Programmer { .. } => ErrorKind::Programmer,
            Self::User { .. }
            | Self::UnknownParameter { .. }
            | Self::AmbiguousParameter { .. }
            | Self::Preferences { .. } => ErrorKind::User,
            Self::Xml(_) => ErrorKind::XmlParse,
        }
    }
}

/// Bad boolean spellings surfacing through getters are host-side defects.
impl From<ModelError> for AmlError {
    fn from(err: ModelError) -> Self {
        Self::programmer(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AmlError>;
