//! Whole-application verification.
//!
//! Runs once after every value is in. For each parameter, in declaration
//! order: inclusion and exclusion links, single-parameter checks, numeric
//! relations, option-triggered clauses, and finally the rule that a
//! parameter without values, defaults or internal default must be excluded
//! by something. The first violation is returned.

use aml_model::{Comparison, ParamIndex, ParamType, Parameter};
use tracing::{debug, trace};

use crate::error::{AmlError, Result};
use crate::manager::ParameterManager;
use crate::options::active_options;
use crate::verify::{Origin, parse_double, parse_integer, verify_parameter};

fn is_boolean(param: &Parameter) -> bool {
    param.param_type == ParamType::Boolean
}

impl ParameterManager {
    pub fn verify_all(&self) -> Result<()> {
        debug!(
            application = %self.app.name,
            parameters = self.app.parameter_count(),
            "verifying all parameters"
        );
        for (index, param) in self.app.parameters() {
            self.check_inclusions(param)?;
            self.check_exclusions(param)?;
            verify_parameter(param, self.preferences.as_ref())?;
            self.check_comparisons(param)?;
            self.check_option_clauses(param)?;
            self.check_mandatory(index, param)?;
        }
        Ok(())
    }

    fn check_inclusions(&self, param: &Parameter) -> Result<()> {
        for name in &param.include {
            let other = self.lookup(name)?;
            if is_boolean(param) {
                if param.is_true_boolean()? && !other.is_active() {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] must be used if parameter [{}] equates to true.",
                        other.name, param.name
                    )));
                }
            } else if is_boolean(other) {
                if other.is_true_boolean()? && !param.is_active() {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] must be used if parameter [{}] is used.",
                        other.name, param.name
                    )));
                }
            } else if param.has_values() && !other.is_active() {
                return Err(AmlError::user(format!(
                    "Parameter [{}] must be used if parameter [{}] is used.",
                    other.name, param.name
                )));
            }
        }
        Ok(())
    }

    fn check_exclusions(&self, param: &Parameter) -> Result<()> {
        for name in &param.exclude {
            let other = self.lookup(name)?;
            if is_boolean(param) {
                if param.is_true_boolean()? && other.has_values() {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] must NOT be used if parameter [{}] equates to true.",
                        other.name, param.name
                    )));
                }
            } else if is_boolean(other) {
                // A true boolean on the other side rejects any entered value here.
                if other.is_true_boolean()? && param.has_values() {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] must be used if parameter [{}] is used.",
                        other.name, param.name
                    )));
                }
            } else if param.has_values() && other.has_values() {
                return Err(AmlError::user(format!(
                    "Parameter [{}] must NOT be used if parameter [{}] is used.",
                    other.name, param.name
                )));
            }
        }
        Ok(())
    }

    fn check_comparisons(&self, param: &Parameter) -> Result<()> {
        if !param.has_values() {
            return Ok(());
        }
        for comparison in Comparison::ALL {
            for name in param.comparisons(comparison) {
                let other = self.lookup(name)?;
                if !other.has_values() {
                    continue;
                }
                let lhs = numeric_value(param)?;
                let rhs = numeric_value(other)?;
                if !comparison.holds(lhs, rhs) {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] must {} parameter [{}].",
                        param.name,
                        comparison.phrase(),
                        other.name
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_option_clauses(&self, param: &Parameter) -> Result<()> {
        let (value, selected) = active_options(param);
        for index in selected {
            let option = &param.list_options[index];
            for name in &option.exclude {
                let other = self.lookup(name)?;
                if other.has_values() {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] can not be entered if parameter [{}] is equal to [{value}]",
                        other.name, param.name
                    )));
                }
            }
            for name in &option.include {
                let other = self.lookup(name)?;
                if !other.has_values() && !other.has_defaults() {
                    return Err(AmlError::user(format!(
                        "Parameter [{}] must be entered if parameter [{}] is equal to [{value}]",
                        other.name, param.name
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_mandatory(&self, index: ParamIndex, param: &Parameter) -> Result<()> {
        if param.is_active() {
            return Ok(());
        }
        if self.is_excluded(index, param)? {
            trace!(parameter = %param.name, "no value needed, excluded");
            return Ok(());
        }
        Err(AmlError::user(format!(
            "Parameter [{}] must be entered.",
            param.name
        )))
    }

    /// True when some rule makes a value for `param` unnecessary.
    fn is_excluded(&self, index: ParamIndex, param: &Parameter) -> Result<bool> {
        for (_, other) in self.app.parameters() {
            let (_, selected) = active_options(other);
            for option in selected {
                if self.refers_to(&other.list_options[option].exclude, index)? {
                    return Ok(true);
                }
            }
            if other.is_false_boolean()? && self.refers_to(&other.include, index)? {
                return Ok(true);
            }
            if other.is_true_boolean()? && self.refers_to(&other.exclude, index)? {
                return Ok(true);
            }
        }

        for name in &param.exclude {
            let other = self.lookup(name)?;
            if other.is_active() && (!is_boolean(other) || other.is_false_boolean()?) {
                return Ok(true);
            }
        }
        for name in &param.include {
            let other = self.lookup(name)?;
            if other.is_false_boolean()? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn refers_to(&self, names: &[String], target: ParamIndex) -> Result<bool> {
        for name in names {
            if self.resolve(name)? == target {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// First entered value of a numeric parameter.
fn numeric_value(param: &Parameter) -> Result<f64> {
    let value = param.values.first().map(String::as_str).unwrap_or_default();
    match param.param_type {
        ParamType::Integer => Ok(parse_integer(param, value, Origin::Value)? as f64),
        ParamType::Double => parse_double(param, value, Origin::Value),
        _ => Err(AmlError::programmer(format!(
            "Parameter is not INTEGER or DOUBLE type [{}]",
            param.name
        ))),
    }
}
