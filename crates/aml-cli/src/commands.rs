use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use aml_cli::check::{OutputFormat, apply_assignments, render};
use aml_cli::summary::{print_description, print_issues};
use aml_core::{ParameterManager, Preferences};

use crate::cli::{CheckArgs, DescribeArgs, OutputFormatArg};

/// Print the application overview; returns the number of reference problems.
pub fn run_describe(args: &DescribeArgs) -> Result<usize> {
    let apm = load(&args.xml)?;
    print_description(&apm);
    if !args.check {
        return Ok(0);
    }
    let issues = apm.check_references();
    print_issues(&issues);
    Ok(issues.len())
}

/// Apply the assignments, verify and return the rendered command line.
pub fn run_check(args: &CheckArgs) -> Result<String> {
    let span = info_span!("check", xml = %args.xml.display());
    let _guard = span.enter();

    let preferences =
        Preferences::load(args.preferences.as_deref()).context("load user preferences")?;
    let mut apm = load(&args.xml)?.with_preferences(preferences);

    apply_assignments(&mut apm, &args.assignments)?;
    apm.verify_all()?;
    let line = apm.command_line()?;
    info!(
        program = apm.program_name(),
        entries = line.len(),
        "parameters verified"
    );

    render(&line, output_format(args.format)).context("render command line")
}

fn load(path: &Path) -> Result<ParameterManager> {
    ParameterManager::from_file(path)
        .with_context(|| format!("load application {}", path.display()))
}

fn output_format(format: OutputFormatArg) -> OutputFormat {
    match format {
        OutputFormatArg::Pvl => OutputFormat::Pvl,
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Invocation => OutputFormat::Invocation,
    }
}
