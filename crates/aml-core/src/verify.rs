//! Per-value verification of a single parameter.
//!
//! Checks run over the user values, or over the defaults when nothing was
//! entered. Bad user values are user errors; bad defaults are defects in the
//! application file and are reported as programmer errors.

use std::cmp::Ordering;
use std::path::Path;

use aml_model::{FileMode, Limit, ParamType, Parameter, parse_bool};
use tracing::{trace, warn};

use crate::error::{AmlError, Result};
use crate::filename;
use crate::options::{OptionMatch, match_option, option_values};
use crate::preferences::{OverwritePolicy, PreferenceStore};

/// Where a value being checked came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Value,
    Default,
}

impl Origin {
    fn conversion_error(self, param: &Parameter, value: &str, target: &str) -> AmlError {
        match self {
            Origin::Value => AmlError::user(format!(
                "Unable to convert [{value}] to {target}, parameter [{}].",
                param.name
            )),
            Origin::Default => AmlError::programmer(format!(
                "Unable to convert default [{value}] to {target}, parameter [{}].",
                param.name
            )),
        }
    }
}

pub(crate) fn parse_integer(param: &Parameter, value: &str, origin: Origin) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| origin.conversion_error(param, value, "an integer"))
}

pub(crate) fn parse_double(param: &Parameter, value: &str, origin: Origin) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| origin.conversion_error(param, value, "a double"))
}

fn parse_boolean(param: &Parameter, value: &str, origin: Origin) -> Result<bool> {
    parse_bool(value).map_err(|_| match origin {
        Origin::Value => AmlError::user(format!("Illegal value for [{}], [{value}].", param.name)),
        Origin::Default => AmlError::programmer(format!(
            "Illegal default value for [{}], [{value}].",
            param.name
        )),
    })
}

/// Run every single-parameter check against `param`.
pub fn verify_parameter(param: &Parameter, preferences: &dyn PreferenceStore) -> Result<()> {
    trace!(parameter = %param.name, "verifying parameter");
    let (values, origin) = if param.has_values() {
        (param.values.as_slice(), Origin::Value)
    } else {
        (param.default_values.as_slice(), Origin::Default)
    };

    for value in values {
        check_conversion(param, value, origin)?;
        check_overwrite(param, value, preferences)?;
    }
    check_options(param)?;
    for value in values {
        check_bounds(param, value, origin)?;
    }
    check_odd(param)
}

fn check_conversion(param: &Parameter, value: &str, origin: Origin) -> Result<()> {
    match param.param_type {
        ParamType::Integer => parse_integer(param, value, origin).map(drop),
        ParamType::Double => parse_double(param, value, origin).map(drop),
        ParamType::Boolean => parse_boolean(param, value, origin).map(drop),
        _ => Ok(()),
    }
}

/// Existing output files are only accepted when the user allows overwrites.
fn check_overwrite(param: &Parameter, value: &str, preferences: &dyn PreferenceStore) -> Result<()> {
    if !param.param_type.is_file() || param.file_mode != FileMode::Output {
        return Ok(());
    }
    let file = if param.param_type == ParamType::Cube {
        filename::strip_attributes(value)
    } else {
        value
    };
    let path = filename::expand(file.trim());
    if path.is_empty() || !Path::new(&path).exists() {
        return Ok(());
    }

    match OverwritePolicy::parse(preferences.overwrite()) {
        Some(OverwritePolicy::Allow) => Ok(()),
        Some(OverwritePolicy::Error) => Err(AmlError::user(format!(
            "Invalid output filename for [{}]. The file [{path}] already exists and \
             the user preference FileCustomization Overwrite is set to [Error].",
            param.name
        ))),
        None => {
            warn!(
                overwrite = preferences.overwrite(),
                "invalid FileCustomization Overwrite preference"
            );
            Err(AmlError::user(format!(
                "Invalid entry in user preference file FileCustomization group. \
                 Overwrite = [{}]. Valid values: [Allow] or [Error].",
                preferences.overwrite()
            )))
        }
    }
}

fn check_options(param: &Parameter) -> Result<()> {
    if param.list_options.is_empty() {
        return Ok(());
    }
    for value in &param.values {
        match match_option(&param.list_options, value) {
            OptionMatch::Exact(_) | OptionMatch::Prefix(_) => {}
            OptionMatch::DuplicateExact(indices) => {
                return Err(AmlError::programmer(format!(
                    "Duplicate list options [{}] in parameter [{}].",
                    param.list_options[indices[0]].value, param.name
                )));
            }
            OptionMatch::AmbiguousPrefix => {
                return Err(AmlError::programmer(format!(
                    "Value of [{}] does not match a list option uniquely.",
                    param.name
                )));
            }
            OptionMatch::None => {
                return Err(AmlError::user(format!(
                    "Value of [{}] must be one of [{}].",
                    param.name,
                    option_values(&param.list_options)
                )));
            }
        }
    }
    Ok(())
}

/// Order of `value` relative to `limit`; `None` for non-numeric types.
fn compare_to_limit(
    param: &Parameter,
    value: &str,
    limit: &Limit,
    origin: Origin,
    bound: &str,
) -> Result<Option<Ordering>> {
    let bad_limit = || {
        AmlError::programmer(format!(
            "Invalid {bound} [{}] for parameter [{}].",
            limit.value, param.name
        ))
    };
    match param.param_type {
        ParamType::Integer => {
            let value = parse_integer(param, value, origin)?;
            let limit: i64 = limit.value.trim().parse().map_err(|_| bad_limit())?;
            Ok(Some(value.cmp(&limit)))
        }
        ParamType::Double => {
            let value = parse_double(param, value, origin)?;
            let limit: f64 = limit.value.trim().parse().map_err(|_| bad_limit())?;
            Ok(value.partial_cmp(&limit))
        }
        _ => Ok(None),
    }
}

fn check_bounds(param: &Parameter, value: &str, origin: Origin) -> Result<()> {
    if let Some(minimum) = &param.minimum {
        let ordering = compare_to_limit(param, value, minimum, origin, "minimum")?;
        let violated = match ordering {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !minimum.inclusive,
            _ => false,
        };
        if violated {
            let relation = if minimum.inclusive {
                "greater than or equal to"
            } else {
                "greater than"
            };
            return Err(AmlError::user(format!(
                "Parameter [{}] must be {relation} [{}].",
                param.name, minimum.value
            )));
        }
    }

    if let Some(maximum) = &param.maximum {
        let ordering = compare_to_limit(param, value, maximum, origin, "maximum")?;
        let violated = match ordering {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => !maximum.inclusive,
            _ => false,
        };
        if violated {
            let relation = if maximum.inclusive {
                "less than or equal to"
            } else {
                "less than"
            };
            return Err(AmlError::user(format!(
                "Parameter [{}] must be {relation} [{}].",
                param.name, maximum.value
            )));
        }
    }
    Ok(())
}

fn check_odd(param: &Parameter) -> Result<()> {
    if !param.odd {
        return Ok(());
    }
    if param.param_type != ParamType::Integer {
        return Err(AmlError::programmer(format!(
            "Parameter [{}] must be of type integer to have an [odd] test.",
            param.name
        )));
    }
    for value in &param.values {
        if parse_integer(param, value, Origin::Value)?.rem_euclid(2) != 1 {
            return Err(AmlError::user(format!(
                "Value for [{}] must be odd.",
                param.name
            )));
        }
    }
    Ok(())
}
