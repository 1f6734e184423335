//! Typed mutators and accessors.
//!
//! Typed `put_*` calls check the declared type, store the string form and
//! verify the parameter; a rejected value is not kept. `put_as_string*`
//! stores raw text without any checks. Getters return the entered values,
//! or the defaults when nothing was entered.

use aml_model::{ParamType, Parameter, bool_str, parse_bool};
use tracing::trace;

use crate::error::{AmlError, Result};
use crate::filename::{add_extension, expand};
use crate::manager::ParameterManager;
use crate::options::{OptionMatch, match_option, option_values};
use crate::verify::{Origin, parse_double, parse_integer, verify_parameter};

const STRING_TYPES: &[ParamType] = &[ParamType::String, ParamType::Combo];
const FILE_TYPES: &[ParamType] = &[ParamType::Filename, ParamType::Cube];

impl ParameterManager {
    // Raw

    /// Store `value` without type checks or verification.
    pub fn put_as_string(&mut self, name: &str, value: &str) -> Result<()> {
        self.put_as_strings(name, &[value])
    }

    pub fn put_as_strings<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Result<()> {
        let index = self.resolve(name)?;
        let param = self.app.parameter_mut(index);
        if param.has_values() {
            return Err(AmlError::user(format!(
                "A value for this parameter [{name}] has already been entered."
            )));
        }
        param.values = values.iter().map(|v| v.as_ref().to_string()).collect();
        trace!(parameter = %param.name, values = ?param.values, "stored raw values");
        Ok(())
    }

    // Typed puts

    pub fn put_string(&mut self, name: &str, value: &str) -> Result<()> {
        self.put_strings(name, &[value])
    }

    pub fn put_strings<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Result<()> {
        let values = values.iter().map(|v| v.as_ref().to_string()).collect();
        self.put_typed(name, STRING_TYPES, "a string", values)
    }

    pub fn put_integer(&mut self, name: &str, value: i64) -> Result<()> {
        self.put_integers(name, &[value])
    }

    pub fn put_integers(&mut self, name: &str, values: &[i64]) -> Result<()> {
        let values = values.iter().map(i64::to_string).collect();
        self.put_typed(name, &[ParamType::Integer], "an integer", values)
    }

    pub fn put_double(&mut self, name: &str, value: f64) -> Result<()> {
        self.put_doubles(name, &[value])
    }

    pub fn put_doubles(&mut self, name: &str, values: &[f64]) -> Result<()> {
        let values = values.iter().map(f64::to_string).collect();
        self.put_typed(name, &[ParamType::Double], "a double", values)
    }

    /// Stored as `YES` / `NO`.
    pub fn put_boolean(&mut self, name: &str, value: bool) -> Result<()> {
        self.put_booleans(name, &[value])
    }

    pub fn put_booleans(&mut self, name: &str, values: &[bool]) -> Result<()> {
        let values = values.iter().map(|v| bool_str(*v).to_string()).collect();
        self.put_typed(name, &[ParamType::Boolean], "a boolean", values)
    }

    /// Accepts `filename` and `cube` parameters.
    pub fn put_file_name(&mut self, name: &str, value: &str) -> Result<()> {
        self.put_file_names(name, &[value])
    }

    pub fn put_file_names<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Result<()> {
        let values = values.iter().map(|v| v.as_ref().to_string()).collect();
        self.put_typed(name, FILE_TYPES, "a filename", values)
    }

    pub fn put_cube_name(&mut self, name: &str, value: &str) -> Result<()> {
        self.put_cube_names(name, &[value])
    }

    pub fn put_cube_names<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Result<()> {
        let values = values.iter().map(|v| v.as_ref().to_string()).collect();
        self.put_typed(name, &[ParamType::Cube], "a cube", values)
    }

    fn put_typed(
        &mut self,
        name: &str,
        accepted: &[ParamType],
        expected: &str,
        values: Vec<String>,
    ) -> Result<()> {
        let index = self.resolve(name)?;
        let param = self.app.parameter(index);
        if !accepted.contains(&param.param_type) {
            return Err(AmlError::programmer(format!(
                "Parameter [{name}] is not {expected}."
            )));
        }
        if param.has_values() {
            return Err(AmlError::programmer(format!(
                "A value for this parameter [{name}] has already been saved (possibly by \
                 IsisGui). If you need to change the value use \"Clear\" before the Put."
            )));
        }

        self.app.parameter_mut(index).values = values;
        if let Err(err) = verify_parameter(self.app.parameter(index), self.preferences.as_ref()) {
            self.app.parameter_mut(index).values.clear();
            return Err(err);
        }
        Ok(())
    }

    // Getters

    /// First value, or first default.
    pub fn get_as_string(&self, name: &str) -> Result<String> {
        let param = self.lookup(name)?;
        Ok(current(param, name)?[0].clone())
    }

    /// All values, or all defaults.
    pub fn get_as_strings(&self, name: &str) -> Result<Vec<String>> {
        let param = self.lookup(name)?;
        Ok(current(param, name)?.to_vec())
    }

    /// First value; with an option list, the option it selects.
    pub fn get_string(&self, name: &str) -> Result<String> {
        let param = self.typed(name, STRING_TYPES, "a string")?;
        normalize_option(param, name, &current(param, name)?[0])
    }

    pub fn get_strings(&self, name: &str) -> Result<Vec<String>> {
        let param = self.typed(name, STRING_TYPES, "a string")?;
        current(param, name)?
            .iter()
            .map(|value| normalize_option(param, name, value))
            .collect()
    }

    pub fn get_integer(&self, name: &str) -> Result<i64> {
        let param = self.typed(name, &[ParamType::Integer], "an integer")?;
        parse_integer(param, &current(param, name)?[0], origin(param))
    }

    pub fn get_integers(&self, name: &str) -> Result<Vec<i64>> {
        let param = self.typed(name, &[ParamType::Integer], "an integer")?;
        current(param, name)?
            .iter()
            .map(|value| parse_integer(param, value, origin(param)))
            .collect()
    }

    pub fn get_double(&self, name: &str) -> Result<f64> {
        let param = self.typed(name, &[ParamType::Double], "a double")?;
        parse_double(param, &current(param, name)?[0], origin(param))
    }

    pub fn get_doubles(&self, name: &str) -> Result<Vec<f64>> {
        let param = self.typed(name, &[ParamType::Double], "a double")?;
        current(param, name)?
            .iter()
            .map(|value| parse_double(param, value, origin(param)))
            .collect()
    }

    pub fn get_boolean(&self, name: &str) -> Result<bool> {
        let param = self.typed(name, &[ParamType::Boolean], "a boolean")?;
        Ok(parse_bool(&current(param, name)?[0])?)
    }

    pub fn get_booleans(&self, name: &str) -> Result<Vec<bool>> {
        let param = self.typed(name, &[ParamType::Boolean], "a boolean")?;
        current(param, name)?
            .iter()
            .map(|value| parse_bool(value).map_err(AmlError::from))
            .collect()
    }

    /// First file name with variables expanded and `extension` added when
    /// the name has none.
    pub fn get_file_name(&self, name: &str, extension: Option<&str>) -> Result<String> {
        let param = self.typed(name, FILE_TYPES, "a filename")?;
        Ok(file_name(&current(param, name)?[0], extension))
    }

    pub fn get_file_names(&self, name: &str) -> Result<Vec<String>> {
        let param = self.typed(name, FILE_TYPES, "a filename")?;
        Ok(current(param, name)?
            .iter()
            .map(|value| file_name(value, None))
            .collect())
    }

    pub fn get_cube_name(&self, name: &str, extension: Option<&str>) -> Result<String> {
        let param = self.typed(name, &[ParamType::Cube], "a cube")?;
        Ok(file_name(&current(param, name)?[0], extension))
    }

    pub fn get_cube_names(&self, name: &str) -> Result<Vec<String>> {
        let param = self.typed(name, &[ParamType::Cube], "a cube")?;
        Ok(current(param, name)?
            .iter()
            .map(|value| file_name(value, None))
            .collect())
    }

    fn typed(&self, name: &str, accepted: &[ParamType], expected: &str) -> Result<&Parameter> {
        let param = self.lookup(name)?;
        if accepted.contains(&param.param_type) {
            Ok(param)
        } else {
            Err(AmlError::programmer(format!(
                "Parameter [{name}] is not {expected}."
            )))
        }
    }
}

/// Entered values or defaults; never empty on success.
fn current<'a>(param: &'a Parameter, name: &str) -> Result<&'a [String]> {
    let values = param.effective_values();
    if values.is_empty() {
        return Err(AmlError::user(format!("Parameter [{name}] has no value.")));
    }
    Ok(values)
}

fn origin(param: &Parameter) -> Origin {
    if param.has_values() {
        Origin::Value
    } else {
        Origin::Default
    }
}

fn file_name(value: &str, extension: Option<&str>) -> String {
    let value = match extension {
        Some(extension) => add_extension(value, extension),
        None => value.to_string(),
    };
    expand(&value)
}

/// Replace `value` with the option it selects, when an option list exists.
fn normalize_option(param: &Parameter, name: &str, value: &str) -> Result<String> {
    if param.list_options.is_empty() {
        return Ok(value.to_string());
    }
    match match_option(&param.list_options, value) {
        OptionMatch::Exact(index) | OptionMatch::Prefix(index) => {
            Ok(param.list_options[index].value.clone())
        }
        OptionMatch::DuplicateExact(indices) => Ok(param.list_options[indices[0]].value.clone()),
        OptionMatch::AmbiguousPrefix => Err(AmlError::user(format!(
            "Value [{value}] for parameter [{name}] is not unique."
        ))),
        OptionMatch::None => Err(AmlError::user(format!(
            "Value [{value}] for parameter [{name}] must be one of [{}].",
            option_values(&param.list_options)
        ))),
    }
}
