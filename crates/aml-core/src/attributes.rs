use std::fmt;

use aml_model::Parameter;

use crate::filename::attribute_suffixes;

/// Attribute list attached to a cube file name (`in.cub+1,3-5+lsb`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubeAttribute {
    items: Vec<String>,
}

impl CubeAttribute {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Attributes in the order they were written, without `+`.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Attributes parsed from the first value (or first default).
    pub(crate) fn from_value(param: &Parameter) -> Self {
        Self::new(param.first_value().map(attribute_suffixes).unwrap_or_default())
    }

    /// Output attributes: the declared pixel type, then any written suffixes.
    pub(crate) fn output(param: &Parameter) -> Self {
        let mut items = Vec::new();
        if !param.pixel_type.is_empty() {
            items.push(param.pixel_type.clone());
        }
        items.extend(Self::from_value(param).items);
        Self::new(items)
    }
}

impl fmt::Display for CubeAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "+{item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aml_model::ParamType;

    #[test]
    fn output_attributes_start_with_pixel_type() {
        let mut param = Parameter::new("TO", ParamType::Cube);
        param.pixel_type = "real".to_string();
        assert_eq!(CubeAttribute::output(&param).to_string(), "+real");

        param.values = vec!["out.cub+8bit+lsb".to_string()];
        let attribute = CubeAttribute::output(&param);
        assert_eq!(attribute.items(), ["real", "8bit", "lsb"]);
        assert_eq!(attribute.to_string(), "+real+8bit+lsb");
    }

    #[test]
    fn input_attributes_come_from_the_value() {
        let mut param = Parameter::new("FROM", ParamType::Cube);
        assert!(CubeAttribute::from_value(&param).is_empty());
        param.default_values = vec!["in.cub+2".to_string()];
        assert_eq!(CubeAttribute::from_value(&param).items(), ["2"]);
    }
}
