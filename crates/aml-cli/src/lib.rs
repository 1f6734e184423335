//! Library side of the `aml` command-line tool.

pub mod check;
pub mod logging;
pub mod summary;
