use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Invalid boolean value [{value}].")]
    InvalidBoolean { value: String },
    #[error("Unknown parameter type [{value}].")]
    UnknownParamType { value: String },
    #[error("Unknown file mode [{value}].")]
    UnknownFileMode { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
