//! File name handling for `filename` and `cube` parameters.
//!
//! Values may reference environment variables as `$VAR` or `${VAR}` and cube
//! values may carry `+attribute` suffixes (`in.cub+1,3-5`).

/// Expand `$VAR` and `${VAR}` using the process environment.
///
/// Unset variables and malformed references are left as written.
pub fn expand(value: &str) -> String {
    expand_with(value, |name| std::env::var(name).ok())
}

/// Expand variable references using `lookup`.
pub fn expand_with(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        match (name.is_empty(), lookup(name)) {
            (false, Some(expanded)) => out.push_str(&expanded),
            _ => out.push_str(&rest[dollar..dollar + 1 + consumed]),
        }
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

/// Append `.extension` when the final path component has no extension.
pub fn add_extension(name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        return name.to_string();
    }
    let file = name.rsplit('/').next().unwrap_or(name);
    if file.contains('.') {
        name.to_string()
    } else {
        format!("{name}.{extension}")
    }
}

/// File part of a cube value, without attribute suffixes.
pub fn strip_attributes(value: &str) -> &str {
    value.split('+').next().unwrap_or(value)
}

/// Attribute suffixes of a cube value, in order, without the `+`.
pub fn attribute_suffixes(value: &str) -> Vec<String> {
    value
        .split('+')
        .skip(1)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "HOME" => Some("/home/user".to_string()),
            "base" => Some("/opt/data".to_string()),
            _ => None,
        }
    }

    #[test]
    fn expands_plain_and_braced_variables() {
        assert_eq!(expand_with("$HOME/a.cub", lookup), "/home/user/a.cub");
        assert_eq!(expand_with("${base}/x_${HOME}", lookup), "/opt/data/x_/home/user");
    }

    #[test]
    fn leaves_unknown_references_alone() {
        assert_eq!(expand_with("$NOPE/a", lookup), "$NOPE/a");
        assert_eq!(expand_with("${unterminated", lookup), "${unterminated");
        assert_eq!(expand_with("cost$", lookup), "cost$");
        assert_eq!(expand_with("a$/b", lookup), "a$/b");
    }

    #[test]
    fn adds_extension_only_when_missing() {
        assert_eq!(add_extension("out", "cub"), "out.cub");
        assert_eq!(add_extension("out.lbl", "cub"), "out.lbl");
        assert_eq!(add_extension("dir.d/out", ".cub"), "dir.d/out.cub");
        assert_eq!(add_extension("out", ""), "out");
    }

    #[test]
    fn splits_attribute_suffixes() {
        assert_eq!(strip_attributes("in.cub+1,3-5+lsb"), "in.cub");
        assert_eq!(attribute_suffixes("in.cub+1,3-5+lsb"), ["1,3-5", "lsb"]);
        assert!(attribute_suffixes("in.cub").is_empty());
    }
}
