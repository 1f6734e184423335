//! Data model for application parameter files.
//!
//! The tree is Application -> Groups -> Parameters -> (ListOptions, Helpers),
//! plus the application's dated change history.

pub mod application;
pub mod boolean;
pub mod enums;
pub mod error;
pub mod names;
pub mod parameter;

pub use application::{Application, Change, Group, NO_VERSION, ParamIndex};
pub use boolean::{bool_str, parse_bool};
pub use enums::{Comparison, FileMode, ParamType};
pub use error::{ModelError, Result};
pub use names::{CaseInsensitiveSet, canonical, same_name, starts_with_name};
pub use parameter::{Helper, Limit, ListOption, Parameter};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_serializes() {
        let mut group = Group::new("Files");
        group
            .parameters
            .push(Parameter::new("FROM", ParamType::Cube));
        let app = Application {
            name: "stretch".to_string(),
            groups: vec![group],
            ..Application::default()
        };
        let json = serde_json::to_string(&app).expect("serialize application");
        let round: Application = serde_json::from_str(&json).expect("deserialize application");
        assert_eq!(round, app);
    }
}
