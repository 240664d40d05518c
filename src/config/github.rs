//! `github` section and its environment overrides.

use super::document::{ConfigSection, EntryValue};
use super::section::{single_string, SectionConfig};
use super::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

pub const ENV_API_BASE_URL: &str = "DANGER_GITHUB_API_BASE_URL";
pub const ENV_ORG_INSTALLATION_ID: &str = "PERIL_ORG_INSTALLATION_ID";
pub const ENV_APP_JWT: &str = "GITHUB_APP_JWT";

/// Settings for reaching the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubSettings {
    /// Base URL without trailing slash.
    pub api_base_url: String,
    /// Installation used to read settings files from private repos.
    pub org_installation_id: Option<u64>,
    /// Signed app JWT, exchanged for installation tokens.
    pub app_jwt: Option<String>,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            org_installation_id: None,
            app_jwt: None,
        }
    }
}

impl SectionConfig for GitHubSettings {
    const SECTION: &'static str = "github";

    fn from_section(section: &ConfigSection<'_>) -> Result<Self, ConfigError> {
        let mut settings = GitHubSettings::default();

        for node in section.nodes() {
            let line = node.line();
            match node.name() {
                "api-base-url" => {
                    settings.api_base_url = trim_base_url(single_string(&node, Self::SECTION)?);
                }
                "app-jwt" => {
                    settings.app_jwt = Some(single_string(&node, Self::SECTION)?.to_string());
                }
                "org-installation-id" => {
                    let id = match node.values().as_slice() {
                        [EntryValue::Integer(i)] => u64::try_from(*i).ok(),
                        [EntryValue::String(s)] => s.parse::<u64>().ok(),
                        _ => None,
                    };
                    settings.org_installation_id = Some(id.ok_or_else(|| {
                        ConfigError::ValidationError(format!(
                            "line {line}: org-installation-id must be a single positive integer"
                        ))
                    })?);
                }
                other => {
                    return Err(ConfigError::ParseError(format!(
                        "line {line}: unknown github setting \"{other}\"; \
                         expected api-base-url, org-installation-id, or app-jwt"
                    )));
                }
            }
        }

        Ok(settings)
    }
}

impl GitHubSettings {
    /// Overlay values from the environment on top of the file's values.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a closure.
    /// Empty variables are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(url) = var(ENV_API_BASE_URL) {
            self.api_base_url = trim_base_url(&url);
        }
        if let Some(raw) = var(ENV_ORG_INSTALLATION_ID) {
            let id = raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "{ENV_ORG_INSTALLATION_ID} must be a positive integer, got \"{raw}\""
                ))
            })?;
            self.org_installation_id = Some(id);
        }
        if let Some(jwt) = var(ENV_APP_JWT) {
            self.app_jwt = Some(jwt);
        }
        Ok(())
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
