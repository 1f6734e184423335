//! Type-safe enumerations for application parameter metadata.
//!
//! These enums provide compile-time type safety for concepts that are
//! represented as strings in application XML files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Declared type of a parameter.
///
/// `Combo` behaves like `String` but always carries an option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Integer,
    Double,
    Boolean,
    Filename,
    Cube,
    Combo,
}

impl ParamType {
    /// Returns the name as it appears in application XML files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Double => "double",
            ParamType::Boolean => "boolean",
            ParamType::Filename => "filename",
            ParamType::Cube => "cube",
            ParamType::Combo => "combo",
        }
    }

    /// Returns true for types whose values are free text (`string`, `combo`).
    pub fn is_textual(&self) -> bool {
        matches!(self, ParamType::String | ParamType::Combo)
    }

    /// Returns true for types whose values name files (`filename`, `cube`).
    pub fn is_file(&self) -> bool {
        matches!(self, ParamType::Filename | ParamType::Cube)
    }

    /// Returns true for `integer` and `double`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ParamType::Integer | ParamType::Double)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();

        match normalized.as_str() {
            "string" => Ok(ParamType::String),
            "integer" => Ok(ParamType::Integer),
            "double" => Ok(ParamType::Double),
            "boolean" => Ok(ParamType::Boolean),
            "filename" => Ok(ParamType::Filename),
            "cube" => Ok(ParamType::Cube),
            "combo" => Ok(ParamType::Combo),
            _ => Err(ModelError::UnknownParamType {
                value: s.to_string(),
            }),
        }
    }
}

/// Direction of a file parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    /// No `fileMode` element was given.
    #[default]
    Unspecified,
    Input,
    Output,
}

impl FileMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileMode::Unspecified => "",
            FileMode::Input => "input",
            FileMode::Output => "output",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();

        match normalized.as_str() {
            "" => Ok(FileMode::Unspecified),
            "input" => Ok(FileMode::Input),
            "output" => Ok(FileMode::Output),
            _ => Err(ModelError::UnknownFileMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Numeric relation a parameter declares against other parameters.
///
/// The relation reads "this parameter is `<relation>` the referenced one".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    NotEqual,
}

impl Comparison {
    /// All relations, in the order they are checked.
    pub const ALL: [Comparison; 5] = [
        Comparison::GreaterThan,
        Comparison::GreaterThanOrEqual,
        Comparison::LessThan,
        Comparison::LessThanOrEqual,
        Comparison::NotEqual,
    ];

    /// Element name used for the relation's link list in XML.
    pub fn element_name(&self) -> &'static str {
        match self {
            Comparison::GreaterThan => "greaterThan",
            Comparison::GreaterThanOrEqual => "greaterThanOrEqual",
            Comparison::LessThan => "lessThan",
            Comparison::LessThanOrEqual => "lessThanOrEqual",
            Comparison::NotEqual => "notEqual",
        }
    }

    /// Human wording used in diagnostics, read after "must".
    pub fn phrase(&self) -> &'static str {
        match self {
            Comparison::GreaterThan => "be greater than",
            Comparison::GreaterThanOrEqual => "be greater than or equal to",
            Comparison::LessThan => "be less than",
            Comparison::LessThanOrEqual => "be less than or equal to",
            Comparison::NotEqual => "NOT be equal to",
        }
    }

    /// Returns true when `lhs <relation> rhs` holds.
    pub fn holds(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::GreaterThan => lhs > rhs,
            Comparison::GreaterThanOrEqual => lhs >= rhs,
            Comparison::LessThan => lhs < rhs,
            Comparison::LessThanOrEqual => lhs <= rhs,
            Comparison::NotEqual => lhs != rhs,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element_name())
    }
}
