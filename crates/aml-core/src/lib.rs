//! Application parameter manager.
//!
//! [`ParameterManager`] loads an application's parameter definitions, takes
//! user values by full or abbreviated name, verifies them alone and against
//! each other, and produces the realized command line.

mod access;
pub mod assign;
pub mod attributes;
pub mod command_line;
pub mod error;
pub mod filename;
pub mod lint;
mod manager;
mod options;
pub mod preferences;
pub mod resolver;
mod verify;
mod verify_all;

pub use assign::{Assignment, parse_assignment};
pub use attributes::CubeAttribute;
pub use command_line::CommandLine;
pub use error::{AmlError, ErrorKind, Result};
pub use lint::ReferenceIssue;
pub use manager::ParameterManager;
pub use preferences::{OverwritePolicy, PREFERENCES_ENV, PreferenceStore, Preferences};
pub use resolver::resolve;
pub use verify::verify_parameter;
