//! Applying command-line assignments and rendering the result.

use aml_core::{AmlError, CommandLine, ParameterManager, parse_assignment};
use tracing::debug;

/// How the realized command line is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// PVL `UserParameters` group.
    #[default]
    Pvl,
    Json,
    /// `program NAME=value ...`
    Invocation,
}

/// Store each `NAME=VALUE` token as raw text, in order.
pub fn apply_assignments<S: AsRef<str>>(
    apm: &mut ParameterManager,
    tokens: &[S],
) -> Result<(), AmlError> {
    for token in tokens {
        let assignment = parse_assignment(token.as_ref())?;
        debug!(
            parameter = %assignment.name,
            values = ?assignment.values,
            "applying assignment"
        );
        apm.put_as_strings(&assignment.name, &assignment.values)?;
    }
    Ok(())
}

pub fn render(line: &CommandLine, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Pvl => Ok(line.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&line.to_json()),
        OutputFormat::Invocation => Ok(line.to_invocation()),
    }
}
