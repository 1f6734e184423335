use serde::{Deserialize, Serialize};

use crate::boolean::parse_bool;
use crate::enums::{Comparison, FileMode, ParamType};
use crate::error::Result;

/// A numeric bound as declared in XML. The value is parsed on demand
/// according to the owning parameter's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub value: String,
    pub inclusive: bool,
}

/// One choice in a parameter's option list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOption {
    /// Upper-cased when read.
    pub value: String,
    pub brief: String,
    pub description: String,
    /// Parameters that must not be entered while this option is selected.
    pub exclude: Vec<String>,
    /// Parameters that must have a value while this option is selected.
    pub include: Vec<String>,
}

/// A GUI helper button attached to a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helper {
    pub name: String,
    pub icon: String,
    pub brief: String,
    pub description: String,
    pub function: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Declared name; compared case-insensitively.
    pub name: String,
    pub brief: String,
    pub description: String,
    pub param_type: ParamType,
    pub default_values: Vec<String>,
    /// Sentinel marking the parameter valid when empty.
    pub internal_default: String,
    pub count: String,
    pub minimum: Option<Limit>,
    pub maximum: Option<Limit>,
    pub odd: bool,
    pub list_options: Vec<ListOption>,
    pub greater_than: Vec<String>,
    pub greater_than_or_equal: Vec<String>,
    pub less_than: Vec<String>,
    pub less_than_or_equal: Vec<String>,
    pub not_equal: Vec<String>,
    pub exclude: Vec<String>,
    pub include: Vec<String>,
    pub filter: String,
    pub path: String,
    pub file_mode: FileMode,
    pub pixel_type: String,
    pub helpers: Vec<Helper>,
    /// Current user values; empty means "not yet entered".
    #[serde(default)]
    pub values: Vec<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            ..Self::default()
        }
    }

    pub fn has_values(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn has_defaults(&self) -> bool {
        !self.default_values.is_empty()
    }

    pub fn has_internal_default(&self) -> bool {
        !self.internal_default.is_empty()
    }

    /// True when the parameter holds user values, defaults, or an internal default.
    pub fn is_active(&self) -> bool {
        self.has_values() || self.has_defaults() || self.has_internal_default()
    }

    /// User values when entered, otherwise the declared defaults.
    pub fn effective_values(&self) -> &[String] {
        if self.has_values() {
            &self.values
        } else {
            &self.default_values
        }
    }

    /// First user value, falling back to the first default.
    pub fn first_value(&self) -> Option<&str> {
        self.effective_values().first().map(String::as_str)
    }

    /// First default, or the empty string.
    pub fn default_value(&self) -> &str {
        self.default_values
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Truth of the first value (or first default).
    ///
    /// Returns `Ok(None)` when there is nothing to evaluate. Callers decide
    /// whether the parameter's type makes the question meaningful.
    pub fn truth(&self) -> Result<Option<bool>> {
        self.first_value().map(parse_bool).transpose()
    }

    /// True when this is a boolean whose current value is true.
    pub fn is_true_boolean(&self) -> Result<bool> {
        if self.param_type != ParamType::Boolean {
            return Ok(false);
        }
        Ok(self.truth()? == Some(true))
    }

    /// True when this is a boolean whose current value is false.
    pub fn is_false_boolean(&self) -> Result<bool> {
        if self.param_type != ParamType::Boolean {
            return Ok(false);
        }
        Ok(self.truth()? == Some(false))
    }

    /// Link list for a numeric relation.
    pub fn comparisons(&self, comparison: Comparison) -> &[String] {
        match comparison {
            Comparison::GreaterThan => &self.greater_than,
            Comparison::GreaterThanOrEqual => &self.greater_than_or_equal,
            Comparison::LessThan => &self.less_than,
            Comparison::LessThanOrEqual => &self.less_than_or_equal,
            Comparison::NotEqual => &self.not_equal,
        }
    }

    pub fn comparisons_mut(&mut self, comparison: Comparison) -> &mut Vec<String> {
        match comparison {
            Comparison::GreaterThan => &mut self.greater_than,
            Comparison::GreaterThanOrEqual => &mut self.greater_than_or_equal,
            Comparison::LessThan => &mut self.less_than,
            Comparison::LessThanOrEqual => &mut self.less_than_or_equal,
            Comparison::NotEqual => &mut self.not_equal,
        }
    }

    /// Every parameter name this parameter refers to, in declaration order.
    pub fn referenced_names(&self) -> impl Iterator<Item = &str> {
        Comparison::ALL
            .iter()
            .flat_map(|comparison| self.comparisons(*comparison).iter())
            .chain(self.exclude.iter())
            .chain(self.include.iter())
            .chain(
                self.list_options
                    .iter()
                    .flat_map(|option| option.exclude.iter().chain(option.include.iter())),
            )
            .map(String::as_str)
    }
}
