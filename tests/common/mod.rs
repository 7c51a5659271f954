//! Common test utilities and harness
//!
//! Provides an isolated config directory with helpers to write config and
//! catalog files, plus assertion helpers for tutorial content.

#![allow(dead_code)]

use std::path::PathBuf;

use lumen::{Config, TutorialCatalog};
use tempfile::TempDir;

/// Test environment with isolated config directory
pub struct TestEnvironment {
    /// Temporary directory for test config
    pub temp_dir: TempDir,
    /// Path to the config directory
    pub config_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Path of config.toml inside the environment
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Write a test config file
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write test config");
    }

    /// Write a catalog file and return its path
    pub fn write_catalog(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write test catalog");
        path
    }

    /// Load the config written to this environment
    pub fn load_config(&self) -> Config {
        Config::load_from(&self.config_path()).expect("Failed to load test config")
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal valid catalog with two topics in one category
pub const SMALL_CATALOG: &str = r#"
[[topics]]
category = "Basics"
title = "Getting Started"
folder = "start"

[[topics.slides]]
image_key = "welcome"
text = "Welcome to <b>Lumen</b>!"

[[topics.slides]]
image_key = "menu"
text = "Open the menu<br>on the right side."

[[topics]]
category = "Basics"
title = "Saving"
folder = "start"

[[topics.slides]]
image_key = "save"
text = "Projects are <b>saved automatically</b>."
"#;

/// Titles of a catalog in order
pub fn titles(catalog: &TutorialCatalog) -> Vec<&str> {
    catalog
        .list_topics()
        .iter()
        .map(|t| t.title.as_str())
        .collect()
}
