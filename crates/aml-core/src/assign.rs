//! Parsing `NAME=value` command-line tokens.

use crate::error::{AmlError, Result};

/// One parsed command-line assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub values: Vec<String>,
}

/// Split `NAME=value` into a name and its values.
///
/// `NAME=(a, b)` yields a sequence. Surrounding single or double quotes are
/// removed from each value.
pub fn parse_assignment(token: &str) -> Result<Assignment> {
    let Some((name, value)) = token.split_once('=') else {
        return Err(invalid(token));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid(token));
    }

    let value = value.trim();
    let values = match value
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) if inner.trim().is_empty() => Vec::new(),
        Some(inner) => split_sequence(inner).into_iter().map(unquote).collect(),
        None => vec![unquote(value)],
    };

    Ok(Assignment {
        name: name.to_string(),
        values,
    })
}

fn invalid(token: &str) -> AmlError {
    AmlError::user(format!(
        "Invalid command line token [{token}]. Expected NAME=VALUE."
    ))
}

/// Split on commas that are not inside quotes.
fn split_sequence(inner: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (offset, ch) in inner.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            (None, ',') => {
                items.push(inner[start..offset].trim());
                start = offset + 1;
            }
            _ => {}
        }
    }
    items.push(inner[start..].trim());
    items
}

fn unquote(value: &str) -> String {
    let value = value.trim();
    for mark in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(mark)
            .and_then(|rest| rest.strip_suffix(mark))
        {
            return inner.to_string();
        }
    }
    value.to_string()
}
