pub(crate) mod document;
pub mod github;
pub mod rules;
pub(crate) mod section;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub use github::GitHubSettings;
pub use rules::RulesConfig;

use crate::domain::RuleSet;
use document::ConfigDocument;
use section::{parse_section, SectionConfig};

/// Top-level configuration loaded from a KDL file.
#[derive(Debug, Default)]
pub struct Config {
    pub rules: RuleSet,
    pub github: GitHubSettings,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    #[diagnostic(help("pass an existing KDL file with --config"))]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    ParseError(String),
    #[error("invalid config: {0}")]
    ValidationError(String),
    #[error("invalid settings JSON: {0}")]
    Settings(#[from] serde_json::Error),
}

const KNOWN_SECTIONS: [&str; 2] = [RulesConfig::SECTION, GitHubSettings::SECTION];

impl Config {
    /// Load a config from a KDL file, then overlay the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_file(path)?;
        config.github.apply_env(|key| std::env::var(key).ok())?;
        tracing::debug!(
            path = %path.display(),
            rules = config.rules.len(),
            api = %config.github.api_base_url,
            "loaded config"
        );
        Ok(config)
    }

    /// Load a config from a KDL file without the environment overlay.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Defaults plus the process environment, for runs without a config file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse_with_env("", |key| std::env::var(key).ok())
    }

    /// Parse a KDL string into a Config, ignoring the environment.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Self::parse_with_env(content, |_| None)
    }

    /// Parse a KDL string and overlay environment values from `lookup`.
    pub fn parse_with_env<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let doc = ConfigDocument::parse(content)?;

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for node in doc.top_level_nodes() {
            let name = node.name();
            let line = node.line();
            if !KNOWN_SECTIONS.contains(&name) {
                return Err(ConfigError::ParseError(format!(
                    "line {line}: unknown section \"{name}\"; expected rules or github"
                )));
            }
            if !node.has_children() {
                return Err(ConfigError::ParseError(format!(
                    "line {line}: section \"{name}\" requires a children block {{ ... }}"
                )));
            }
            if let Some(first) = seen.insert(name, line) {
                return Err(ConfigError::ValidationError(format!(
                    "line {line}: section \"{name}\" is already defined on line {first}"
                )));
            }
        }

        let rules: RulesConfig = parse_section(&doc)?;
        let mut github: GitHubSettings = parse_section(&doc)?;
        github.apply_env(lookup)?;

        Ok(Config {
            rules: rules.rules,
            github,
        })
    }
}

/// Load rules from a Peril-style JSON settings file.
pub fn load_settings(path: &Path) -> Result<RuleSet, ConfigError> {
    let content = read_file(path)?;
    Ok(RuleSet::from_json(&content)?)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::ReadError(e)
        }
    })
}
