use serde::Deserialize;
use std::fs;

use crate::matcher::fuzzy::DEFAULT_FUZZY_THRESHOLD;
use crate::matcher::text::STOPWORDS;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub openrouter_api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub data_dir: String,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// Tunables of the matching engine. Defaults mirror the shipped constants;
/// overriding them in config.json mostly matters for tests and for probing
/// threshold boundaries.
#[derive(Debug, Clone, Deserialize)]
pub struct MatcherConfig {
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            stopwords: default_stopwords(),
            fuzzy_threshold: default_fuzzy_threshold(),
        }
    }
}

fn default_model() -> String {
    "openrouter/auto".to_string()
}

fn default_stopwords() -> Vec<String> {
    STOPWORDS.iter().map(|s| s.to_string()).collect()
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let raw = r#"{"openrouter_api_key": "sk-test", "data_dir": "data"}"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.model, "openrouter/auto");
        assert_eq!(config.matcher.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);
        assert!(config.matcher.stopwords.iter().any(|s| s == "ti"));
    }

    #[test]
    fn matcher_overrides_are_honored() {
        let raw = r#"{
            "openrouter_api_key": "sk-test",
            "data_dir": "data",
            "matcher": {"stopwords": ["oc"], "fuzzy_threshold": 0.8}
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.matcher.stopwords, vec!["oc".to_string()]);
        assert_eq!(config.matcher.fuzzy_threshold, 0.8);
    }
}
