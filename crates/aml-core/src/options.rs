//! Matching values against a parameter's option list.

use aml_model::{ListOption, ParamType, Parameter, same_name, starts_with_name};

/// Outcome of matching one value against an option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OptionMatch {
    /// Exactly one option equals the value.
    Exact(usize),
    /// No option equals the value; exactly one starts with it.
    Prefix(usize),
    /// Several options equal the value.
    DuplicateExact(Vec<usize>),
    /// No exact match and several options start with the value.
    AmbiguousPrefix,
    None,
}

pub(crate) fn match_option(options: &[ListOption], value: &str) -> OptionMatch {
    let mut exact = Vec::new();
    let mut prefixes = Vec::new();
    for (index, option) in options.iter().enumerate() {
        if same_name(&option.value, value) {
            exact.push(index);
        } else if starts_with_name(&option.value, value) {
            prefixes.push(index);
        }
    }

    match (exact.len(), prefixes.len()) {
        (1, _) => OptionMatch::Exact(exact[0]),
        (0, 1) => OptionMatch::Prefix(prefixes[0]),
        (0, 0) => OptionMatch::None,
        (0, _) => OptionMatch::AmbiguousPrefix,
        _ => OptionMatch::DuplicateExact(exact),
    }
}

/// Comma separated option values, as shown in diagnostics.
pub(crate) fn option_values(options: &[ListOption]) -> String {
    options
        .iter()
        .map(|option| option.value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Options selected by the parameter's current value (or first default),
/// together with the normalized value that selected them.
///
/// Only `string`, `combo` and `integer` parameters select options. Text
/// values go through exact-then-unique-prefix matching; integers compare
/// trimmed text. Nothing is selected when the value is ambiguous.
pub(crate) fn active_options(param: &Parameter) -> (String, Vec<usize>) {
    let Some(value) = param.first_value() else {
        return (String::new(), Vec::new());
    };

    match param.param_type {
        ParamType::String | ParamType::Combo => match match_option(&param.list_options, value) {
            OptionMatch::Exact(index) | OptionMatch::Prefix(index) => {
                (param.list_options[index].value.clone(), vec![index])
            }
            OptionMatch::DuplicateExact(indices) => {
                (param.list_options[indices[0]].value.clone(), indices)
            }
            OptionMatch::AmbiguousPrefix | OptionMatch::None => (value.to_string(), Vec::new()),
        },
        ParamType::Integer => {
            let value = value.trim();
            let selected = param
                .list_options
                .iter()
                .enumerate()
                .filter(|(_, option)| option.value.trim() == value)
                .map(|(index, _)| index)
                .collect();
            (value.to_string(), selected)
        }
        _ => (value.to_string(), Vec::new()),
    }
}
