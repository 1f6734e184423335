//! Parameter name resolution.
//!
//! Names match case-insensitively across all groups. An exact match wins
//! over any number of prefix matches; otherwise the prefix must be unique.

use aml_model::{Application, ParamIndex, same_name, starts_with_name};

use crate::error::{AmlError, Result};

/// Resolve a full or abbreviated parameter name to its position.
pub fn resolve(app: &Application, token: &str) -> Result<ParamIndex> {
    let mut exact: Option<ParamIndex> = None;
    let mut prefix: Option<ParamIndex> = None;
    let mut prefix_count = 0usize;

    for (index, param) in app.parameters() {
        if !starts_with_name(&param.name, token) {
            continue;
        }
        if same_name(&param.name, token) {
            if exact.is_some() {
                return Err(AmlError::AmbiguousParameter {
                    name: token.to_string(),
                });
            }
            exact = Some(index);
        } else {
            prefix_count += 1;
            prefix = Some(index);
        }
    }

    match (exact, prefix) {
        (Some(index), _) => Ok(index),
        (None, Some(index)) if prefix_count == 1 => Ok(index),
        (None, Some(_)) => Err(AmlError::AmbiguousParameter {
            name: token.to_string(),
        }),
        (None, None) => Err(AmlError::UnknownParameter {
            name: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aml_model::{Group, ParamType, Parameter};

    fn app(names: &[&str]) -> Application {
        let mut group = Group::new("All");
        for name in names {
            group.parameters.push(Parameter::new(*name, ParamType::String));
        }
        Application {
            groups: vec![group],
            ..Application::default()
        }
    }

    fn name_of(app: &Application, token: &str) -> Result<String> {
        resolve(app, token).map(|index| app.parameter(index).name.clone())
    }

    #[test]
    fn exact_match_beats_prefixes() {
        let app = app(&["FROM", "FROM1", "FR"]);
        assert_eq!(name_of(&app, "fr").unwrap(), "FR");
        assert_eq!(name_of(&app, "FROM").unwrap(), "FROM");
        assert_eq!(name_of(&app, "from1").unwrap(), "FROM1");
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        let app = app(&["FROM", "FROM1", "FR"]);
        let err = name_of(&app, "F").unwrap_err();
        assert!(matches!(err, AmlError::AmbiguousParameter { .. }));
    }

    #[test]
    fn unique_prefix_resolves() {
        let app = app(&["FROM", "TO", "WIDTH"]);
        assert_eq!(name_of(&app, "w").unwrap(), "WIDTH");
    }

    #[test]
    fn unknown_name_is_rejected() {
        let app = app(&["FROM"]);
        let err = name_of(&app, "TO").unwrap_err();
        assert_eq!(err.to_string(), "Unknown parameter [TO].");
    }

    #[test]
    fn duplicate_exact_names_are_ambiguous() {
        let app = app(&["FROM", "from"]);
        let err = name_of(&app, "From").unwrap_err();
        assert!(matches!(err, AmlError::AmbiguousParameter { .. }));
    }
}
