use serde::Deserialize;

use crate::error::HrefResult;

/// What to do when a `..` segment would climb above the package root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootAscentPolicy {
    /// Ignore the segment and log a warning
    #[default]
    Drop,
    /// Fail with [`HrefError::RootAscent`](crate::HrefError::RootAscent)
    Error,
}

/// Options for segment resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResolveOptions {
    #[serde(default, rename = "onRootAscent")]
    pub on_root_ascent: RootAscentPolicy,
}

impl ResolveOptions {
    /// Default options: dropped ascents with a warning
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reject any ascent above the root
    pub fn strict() -> Self {
        Self {
            on_root_ascent: RootAscentPolicy::Error,
        }
    }

    /// Parse options from a YAML document, e.g. `onRootAscent: error`.
    ///
    /// Missing keys take their defaults; an empty document yields [`ResolveOptions::default`].
    pub fn from_yaml(yaml: &str) -> HrefResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
