// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scanner configuration, loaded from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! classifier = "hue-clustering"   # or "nearest-center"
//! parity_policy = "combined"      # or "separate"
//! parallel_search = true
//! ```

use crate::checker::ParityPolicy;
use crate::classify::ClassifierKind;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub classifier: ClassifierKind,
    pub parity_policy: ParityPolicy,
    /// Use the rayon orientation search. Ignored without the `parallel`
    /// feature.
    pub parallel_search: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierKind::default(),
            parity_policy: ParityPolicy::default(),
            parallel_search: cfg!(feature = "parallel"),
        }
    }
}

impl ScanConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(ScanConfig::from_toml_str("").unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_all_keys() {
        let config = ScanConfig::from_toml_str(
            r#"
            classifier = "nearest-center"
            parity_policy = "separate"
            parallel_search = false
            "#,
        )
        .unwrap();
        assert_eq!(config.classifier, ClassifierKind::NearestCenter);
        assert_eq!(config.parity_policy, ParityPolicy::Separate);
        assert!(!config.parallel_search);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(matches!(
            ScanConfig::from_toml_str(r#"classifier = "k-means""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ScanConfig::from_toml_str("threads = 4"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ScanConfig::load("/nonexistent/cube-scan.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
