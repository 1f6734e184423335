//! The realized command line: every parameter that has a value or default.

use std::fmt;

use aml_model::same_name;
use serde_json::{Map, Value};

/// Ordered `parameter name -> values` record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    entries: Vec<(String, Vec<String>)>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            entries: Vec::new(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Append an entry, replacing any entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| same_name(key, &name)) {
            Some(entry) => entry.1 = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Remove the entry named `name` (ignoring case); true when one existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(key, _)| !same_name(key, name));
        self.entries.len() != before
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| same_name(key, name))
            .map(|(_, values)| values.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// JSON object; single values become strings, sequences arrays.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, values) in &self.entries {
            let value = match values.as_slice() {
                [single] => Value::String(single.clone()),
                many => Value::Array(many.iter().cloned().map(Value::String).collect()),
            };
            map.insert(name.clone(), value);
        }
        Value::Object(map)
    }

    /// Shell-style rendering: `program NAME=value NAME=(a,b)`.
    pub fn to_invocation(&self) -> String {
        let mut out = self.program.clone();
        for (name, values) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push('=');
            match values.as_slice() {
                [single] => out.push_str(&quote(single)),
                many => {
                    let items: Vec<String> = many.iter().map(|value| quote(value)).collect();
                    out.push('(');
                    out.push_str(&items.join(","));
                    out.push(')');
                }
            }
        }
        out
    }
}

fn quote(value: &str) -> String {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// PVL `UserParameters` group.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Group = UserParameters")?;
        for (name, values) in &self.entries {
            match values.as_slice() {
                [single] => writeln!(f, "  {name} = {}", quote(single))?,
                many => {
                    let items: Vec<String> = many.iter().map(|value| quote(value)).collect();
                    writeln!(f, "  {name} = ({})", items.join(", "))?;
                }
            }
        }
        write!(f, "End_Group")
    }
}
