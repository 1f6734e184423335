use serde::{Deserialize, Serialize};

use crate::names::same_name;
use crate::parameter::Parameter;

/// Date reported by [`Application::version`] when there is no history.
pub const NO_VERSION: &str = "000-00-00";

/// Position of a parameter: group index and index within the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParamIndex {
    pub group: usize,
    pub param: usize,
}

/// A dated history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Author.
    pub name: String,
    /// `YYYY-MM-DD`, so lexical order is chronological.
    pub date: String,
    pub description: String,
}

/// Display cluster of parameters. Does not affect lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Lower-cased program name.
    pub name: String,
    pub brief: String,
    pub description: String,
    pub categories: Vec<String>,
    pub groups: Vec<Group>,
    pub changes: Vec<Change>,
}

impl Application {
    /// Most recent change date, or [`NO_VERSION`].
    pub fn version(&self) -> &str {
        self.changes
            .iter()
            .map(|change| change.date.as_str())
            .filter(|date| *date > NO_VERSION)
            .max()
            .unwrap_or(NO_VERSION)
    }

    /// Index of the first group whose name matches ignoring case.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| same_name(&group.name, name))
    }

    /// All parameters in declaration order with their positions.
    pub fn parameters(&self) -> impl Iterator<Item = (ParamIndex, &Parameter)> {
        self.groups.iter().enumerate().flat_map(|(g, group)| {
            group
                .parameters
                .iter()
                .enumerate()
                .map(move |(p, param)| (ParamIndex { group: g, param: p }, param))
        })
    }

    /// Number of parameters across all groups.
    pub fn parameter_count(&self) -> usize {
        self.groups.iter().map(|group| group.parameters.len()).sum()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn parameter(&self, index: ParamIndex) -> &Parameter {
        &self.groups[index.group].parameters[index.param]
    }

    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn parameter_mut(&mut self, index: ParamIndex) -> &mut Parameter {
        &mut self.groups[index.group].parameters[index.param]
    }
}
