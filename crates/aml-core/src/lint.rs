//! Static checks over an application's cross-parameter links.
//!
//! The reader accepts any link names; these checks report the ones that
//! would fail at verification time, without needing values.

use std::fmt;

use aml_model::CaseInsensitiveSet;
use tracing::debug;

use crate::error::AmlError;
use crate::manager::ParameterManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceIssue {
    /// `parameter` links to a name that matches nothing.
    Unresolved { parameter: String, target: String },
    /// `parameter` links to a name that matches several parameters.
    Ambiguous { parameter: String, target: String },
    /// Two parameters share a name ignoring case.
    DuplicateName { name: String },
}

impl fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved { parameter, target } => write!(
                f,
                "Parameter [{parameter}] refers to unknown parameter [{target}]."
            ),
            Self::Ambiguous { parameter, target } => write!(
                f,
                "Parameter [{parameter}] refers to [{target}], which is not unique."
            ),
            Self::DuplicateName { name } => {
                write!(f, "Parameter name [{name}] is declared more than once.")
            }
        }
    }
}

impl ParameterManager {
    /// Every link that does not resolve to exactly one parameter, and every
    /// parameter name declared twice.
    pub fn check_references(&self) -> Vec<ReferenceIssue> {
        let mut issues = Vec::new();

        let mut seen = CaseInsensitiveSet::default();
        for (_, param) in self.app.parameters() {
            if !seen.insert(&param.name) {
                issues.push(ReferenceIssue::DuplicateName {
                    name: param.name.clone(),
                });
            }
        }

        for (_, param) in self.app.parameters() {
            for target in param.referenced_names() {
                let issue = match self.resolve(target) {
                    Ok(_) => continue,
                    Err(AmlError::AmbiguousParameter { .. }) => ReferenceIssue::Ambiguous {
                        parameter: param.name.clone(),
                        target: target.to_string(),
                    },
                    Err(_) => ReferenceIssue::Unresolved {
                        parameter: param.name.clone(),
                        target: target.to_string(),
                    },
                };
                issues.push(issue);
            }
        }

        debug!(issues = issues.len(), "checked parameter references");
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_application_has_no_issues() {
        let apm = ParameterManager::from_xml_str(
            r#"<application name="t"><groups><group name="g">
                 <parameter name="FROM"><type>cube</type></parameter>
                 <parameter name="TO"><type>cube</type>
                   <exclusions><item>fr</item></exclusions></parameter>
               </group></groups></application>"#,
        )
        .unwrap();
        assert!(apm.check_references().is_empty());
    }

    #[test]
    fn reports_bad_links_and_duplicates() {
        let apm = ParameterManager::from_xml_str(
            r#"<application name="t"><groups>
                 <group name="a">
                   <parameter name="LINE"><type>integer</type>
                     <greaterThan><item>LI</item></greaterThan>
                     <inclusions><item>SAMPLE</item></inclusions>
                   </parameter>
                   <parameter name="LINES"><type>integer</type></parameter>
                 </group>
                 <group name="b">
                   <parameter name="lines"><type>integer</type></parameter>
                 </group>
               </groups></application>"#,
        )
        .unwrap();
        let issues = apm.check_references();
        assert_eq!(
            issues,
            vec![
                ReferenceIssue::DuplicateName {
                    name: "lines".to_string()
                },
                ReferenceIssue::Ambiguous {
                    parameter: "LINE".to_string(),
                    target: "LI".to_string()
                },
                ReferenceIssue::Unresolved {
                    parameter: "LINE".to_string(),
                    target: "SAMPLE".to_string()
                },
            ]
        );
        assert_eq!(
            issues[2].to_string(),
            "Parameter [LINE] refers to unknown parameter [SAMPLE]."
        );
    }
}
