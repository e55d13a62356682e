// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Labeller configuration loaded from environment variables.

use partmark_geometry::{
    ClassifierConfig, DEFAULT_BAR_RATIO, DEFAULT_BOARD_RATIO, DEFAULT_MAX_DENOMINATOR,
};
use std::str::FromStr;

/// Batches smaller than this are labelled on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Labeller configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Shape thresholds and anchor denominator limit.
    pub classifier: ClassifierConfig,
    /// Minimum batch size before labelling fans out to the rayon pool.
    pub parallel_threshold: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let classifier = ClassifierConfig {
            bar_ratio: parse_or(&lookup, "PARTMARK_BAR_RATIO", DEFAULT_BAR_RATIO),
            board_ratio: parse_or(&lookup, "PARTMARK_BOARD_RATIO", DEFAULT_BOARD_RATIO),
            max_denominator: parse_or(
                &lookup,
                "PARTMARK_MAX_DENOMINATOR",
                DEFAULT_MAX_DENOMINATOR,
            ),
        };

        // An invalid combination is worse than the defaults
        let classifier = match classifier.validate() {
            Ok(()) => classifier,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring classifier overrides");
                ClassifierConfig::default()
            }
        };

        Self {
            classifier,
            parallel_threshold: parse_or(
                &lookup,
                "PARTMARK_PARALLEL_THRESHOLD",
                DEFAULT_PARALLEL_THRESHOLD,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.classifier.max_denominator, 10);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PARTMARK_BAR_RATIO", "4"),
            ("PARTMARK_MAX_DENOMINATOR", " 16 "),
            ("PARTMARK_PARALLEL_THRESHOLD", "8"),
        ]));
        assert_eq!(config.classifier.bar_ratio, 4.0);
        assert_eq!(config.classifier.board_ratio, 5.0);
        assert_eq!(config.classifier.max_denominator, 16);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_garbage_falls_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PARTMARK_BOARD_RATIO", "thin"),
            ("PARTMARK_PARALLEL_THRESHOLD", "-1"),
        ]));
        assert_eq!(config, Config::default());

        // Parses, but fails validation
        let config = Config::from_lookup(lookup_from(&[("PARTMARK_MAX_DENOMINATOR", "0")]));
        assert_eq!(config.classifier, ClassifierConfig::default());
    }
}
