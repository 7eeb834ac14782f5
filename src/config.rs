// Copyright (c) 2026 The k8sel Authors
// SPDX-License-Identifier: BSD-3-Clause

//! Configuration persistence for k8sel
//!
//! Stores the default accessible-namespace patterns used by
//! `filter-namespaces` when no `--pattern` flags are given.
//! All k8sel data lives under ~/.k8sel/:
//! - ~/.k8sel/config.json - saved configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Get the base k8sel directory (~/.k8sel/)
pub fn base_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|p| p.join(".k8sel"))
        .context("Could not determine home directory")
}

/// k8sel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Accessible-namespace regex patterns applied by default
    #[serde(default)]
    pub accessible_patterns: Vec<String>,
}

impl Config {
    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the config file path (~/.k8sel/config.json)
    pub fn config_path() -> Result<PathBuf> {
        Ok(base_dir()?.join("config.json"))
    }

    /// Update the saved accessible patterns and save
    pub fn set_accessible_patterns(&mut self, patterns: Vec<String>) -> Result<()> {
        self.accessible_patterns = patterns;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.accessible_patterns.is_empty());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config {
            accessible_patterns: vec!["istio-.*".to_string(), "default".to_string()],
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("accessible_patterns"));
        assert!(json.contains("istio-.*"));
        assert!(json.contains("default"));
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{"accessible_patterns": ["kube-.*", "monitoring"]}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.accessible_patterns, vec!["kube-.*", "monitoring"]);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let json = "{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.accessible_patterns.is_empty());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        // Save config
        let config = Config {
            accessible_patterns: vec!["istio-.*".to_string()],
        };
        let content = serde_json::to_string_pretty(&config).unwrap();
        fs::write(&config_path, content).unwrap();

        // Load and verify
        let loaded_content = fs::read_to_string(&config_path).unwrap();
        let loaded: Config = serde_json::from_str(&loaded_content).unwrap();
        assert_eq!(loaded.accessible_patterns, vec!["istio-.*"]);
    }
}
