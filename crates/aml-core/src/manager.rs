use std::path::Path;

use aml_model::{Application, FileMode, Helper, ListOption, ParamIndex, ParamType, Parameter};
use serde_json::Value;
use tracing::{debug, trace};

use crate::attributes::CubeAttribute;
use crate::command_line::CommandLine;
use crate::error::{AmlError, Result};
use crate::options::active_options;
use crate::preferences::{PreferenceStore, Preferences};
use crate::resolver::resolve;

/// Owns an application's parameter definitions and current values.
///
/// Every by-name operation accepts a full name or a unique abbreviation,
/// compared ignoring case.
#[derive(Debug)]
pub struct ParameterManager {
    pub(crate) app: Application,
    pub(crate) preferences: Box<dyn PreferenceStore>,
}

impl ParameterManager {
    /// Load the application file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let app = aml_xml::load_application(path)?;
        Ok(Self::from_application(app))
    }

    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let app = aml_xml::parse_application(xml)?;
        Ok(Self::from_application(app))
    }

    pub fn from_application(app: Application) -> Self {
        Self {
            app,
            preferences: Box::new(Preferences::default()),
        }
    }

    /// Replace the user preference store.
    pub fn with_preferences(mut self, preferences: impl PreferenceStore + 'static) -> Self {
        self.preferences = Box::new(preferences);
        self
    }

    pub fn application(&self) -> &Application {
        &self.app
    }

    // Introspection

    pub fn program_name(&self) -> &str {
        &self.app.name
    }

    pub fn brief(&self) -> &str {
        &self.app.brief
    }

    pub fn description(&self) -> &str {
        &self.app.description
    }

    pub fn categories(&self) -> &[String] {
        &self.app.categories
    }

    /// Most recent change date, `000-00-00` without history.
    pub fn version(&self) -> &str {
        self.app.version()
    }

    pub fn num_groups(&self) -> usize {
        self.app.groups.len()
    }

    /// # Panics
    ///
    /// Panics if `group` is out of range.
    pub fn group_name(&self, group: usize) -> &str {
        &self.app.groups[group].name
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.app.group_index(name)
    }

    /// # Panics
    ///
    /// Panics if `group` is out of range.
    pub fn num_params(&self, group: usize) -> usize {
        self.app.groups[group].parameters.len()
    }

    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn param(&self, group: usize, param: usize) -> &Parameter {
        self.app.parameter(ParamIndex { group, param })
    }

    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn param_name(&self, group: usize, param: usize) -> &str {
        &self.param(group, param).name
    }

    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn list_option(&self, group: usize, param: usize, option: usize) -> &ListOption {
        &self.param(group, param).list_options[option]
    }

    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn helper(&self, group: usize, param: usize, helper: usize) -> &Helper {
        &self.param(group, param).helpers[helper]
    }

    // Lookup

    pub(crate) fn resolve(&self, name: &str) -> Result<ParamIndex> {
        resolve(&self.app, name)
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<&Parameter> {
        Ok(self.app.parameter(self.resolve(name)?))
    }

    /// The parameter `name` resolves to.
    pub fn parameter(&self, name: &str) -> Result<&Parameter> {
        self.lookup(name)
    }

    // Value state

    /// True when the user entered a value for `name`.
    pub fn was_entered(&self, name: &str) -> Result<bool> {
        Ok(self.lookup(name)?.has_values())
    }

    /// Forget the entered values; accessors fall back to defaults.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let index = self.resolve(name)?;
        let param = self.app.parameter_mut(index);
        trace!(parameter = %param.name, "clearing values");
        param.values.clear();
        Ok(())
    }

    /// Attributes of an input cube parameter.
    pub fn input_attribute(&self, name: &str) -> Result<CubeAttribute> {
        let param = self.cube_parameter(name, FileMode::Input)?;
        Ok(CubeAttribute::from_value(param))
    }

    /// Attributes of an output cube parameter, led by its pixel type.
    pub fn output_attribute(&self, name: &str) -> Result<CubeAttribute> {
        let param = self.cube_parameter(name, FileMode::Output)?;
        Ok(CubeAttribute::output(param))
    }

    fn cube_parameter(&self, name: &str, mode: FileMode) -> Result<&Parameter> {
        let param = self.lookup(name)?;
        if param.param_type != ParamType::Cube {
            return Err(AmlError::programmer(format!(
                "Parameter [{name}] is not a cube."
            )));
        }
        if param.file_mode != mode {
            return Err(AmlError::programmer(format!(
                "Parameter [{name}] does not contain an [{mode}] file"
            )));
        }
        Ok(param)
    }

    // Output

    /// Every parameter with values (or, failing that, defaults), minus the
    /// parameters excluded by a selected list option.
    pub fn command_line(&self) -> Result<CommandLine> {
        let mut line = CommandLine::new(self.app.name.clone());
        for (_, param) in self.app.parameters() {
            let values = param.effective_values();
            if !values.is_empty() {
                line.insert(param.name.clone(), values.to_vec());
            }
        }

        for (_, param) in self.app.parameters() {
            if param.list_options.is_empty() || !(param.has_values() || param.has_defaults()) {
                continue;
            }
            let (value, selected) = active_options(param);
            for option in selected {
                for excluded in &param.list_options[option].exclude {
                    let target = self.lookup(excluded)?;
                    if line.remove(&target.name) {
                        trace!(
                            parameter = %target.name,
                            by = %param.name,
                            %value,
                            "dropped from command line by option"
                        );
                    }
                }
            }
        }

        debug!(entries = line.len(), "built command line");
        Ok(line)
    }

    /// The command line as a JSON object.
    pub fn params_json(&self) -> Result<Value> {
        Ok(self.command_line()?.to_json())
    }
}
