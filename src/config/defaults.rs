//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_output, String, "human".to_string());

/// Values used when the matching command-line flag is absent.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Respondent name; prompted for when unset
    #[serde(default)]
    pub name: Option<String>,
    /// Respondent class; prompted for when unset
    #[serde(default)]
    pub class: Option<String>,
    /// Difficulty level; prompted for when unset
    #[serde(default)]
    pub level: Option<String>,
    /// Output mode: `human` or `json` (default: human)
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            name: None,
            class: None,
            level: None,
            output: default_output(),
        }
    }
}
