//! Immutable rendering configuration.
//!
//! Passed by reference into every renderer; nothing here is mutated after
//! construction. A JSON file can override any subset of the defaults.
use std::path::Path;
use serde::Deserialize;

use crate::error::{Error, Result};

// ------------------------------- Policy ---------------------------------- //

/// Largest integer a double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// How integral-looking numbers are split from floating ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Zero fractional part *and* within ±[`MAX_SAFE_INTEGER`] → integer.
    #[default]
    SafeInteger,
    /// Zero fractional part → integer, regardless of magnitude.
    Fractional,
}

/// How strings are promoted to temporal types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalPolicy {
    /// Literal pattern match only.
    #[default]
    Pattern,
    /// Pattern match, then the text must also parse as a real calendar instant.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct RenderConfig {
    /// member modifier in the class notation
    pub modifier: String,
    /// auto-property accessor token in the class notation
    pub accessor: String,
    pub class_name: String,
    pub interface_name: String,
    pub class_indent: String,
    pub interface_indent: String,
    pub integer_type: String,
    pub float_type: String,
    pub number_policy: NumberPolicy,
    pub temporal_policy: TemporalPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            modifier: "public".to_owned(),
            accessor: "{ get; set; }".to_owned(),
            class_name: "ClassName".to_owned(),
            interface_name: "interfaceName".to_owned(),
            class_indent: "    ".to_owned(),
            interface_indent: "  ".to_owned(),
            integer_type: "int".to_owned(),
            float_type: "float".to_owned(),
            number_policy: NumberPolicy::default(),
            temporal_policy: TemporalPolicy::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(src: &str) -> Result<Self> {
        crate::path_de::from_str_with_path(src)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&src)
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    pub fn with_interface_name(mut self, name: impl Into<String>) -> Self {
        self.interface_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(RenderConfig::from_json_str("{}").unwrap(), RenderConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = RenderConfig::from_json_str(
            r#"{"modifier": "internal", "number_policy": "fractional"}"#
        ).unwrap();
        assert_eq!(cfg.modifier, "internal");
        assert_eq!(cfg.number_policy, NumberPolicy::Fractional);
        assert_eq!(cfg.accessor, "{ get; set; }");
        assert_eq!(cfg.temporal_policy, TemporalPolicy::Pattern);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RenderConfig::from_json_str(r#"{"modifer": "x"}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "{err:?}");
    }

    #[test]
    fn bad_policy_value_names_the_field() {
        let err = RenderConfig::from_json_str(r#"{"temporal_policy": "loose"}"#).unwrap_err();
        match err {
            Error::Config { path, .. } => assert_eq!(path, "temporal_policy"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = RenderConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
