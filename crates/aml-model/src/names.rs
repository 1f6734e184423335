//! Case-insensitive name handling.
//!
//! Parameter names keep their declared case but are compared ignoring ASCII
//! case everywhere. All comparisons funnel through these helpers.

use std::collections::HashMap;

/// Canonical (upper case) form of a name or option value.
pub fn canonical(name: &str) -> String {
    name.to_ascii_uppercase()
}

/// Returns true when two names are equal ignoring ASCII case.
pub fn same_name(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Returns true when `name` starts with `prefix`, ignoring ASCII case.
pub fn starts_with_name(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}

#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for name in names {
            set.insert(name.as_ref());
        }
        set
    }

    /// Insert a name; returns false when a name equal ignoring case is present.
    pub fn insert(&mut self, name: &str) -> bool {
        let key = canonical(name);
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, name.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&canonical(name)).map(|value| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&canonical(name))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_ignores_case() {
        assert!(starts_with_name("FROM1", "fr"));
        assert!(starts_with_name("from", "FROM"));
        assert!(!starts_with_name("FR", "FROM"));
        assert!(starts_with_name("anything", ""));
    }

    #[test]
    fn set_keeps_first_spelling() {
        let mut set = CaseInsensitiveSet::new(["From", "TO"]);
        assert!(!set.insert("FROM"));
        assert!(set.insert("width"));
        assert_eq!(set.get("from"), Some("From"));
        assert!(set.contains("Width"));
        assert_eq!(set.len(), 3);
    }
}
