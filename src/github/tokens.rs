use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{GitHubError, ACCEPT, USER_AGENT};
use crate::config::GitHubSettings;

/// Source of short-lived installation tokens.
///
/// The fallback fetch in [`super::GitHubClient`] only needs this one call, so
/// tests can substitute a fixed token without standing up an app.
#[async_trait]
pub trait InstallationTokens: Send + Sync {
    async fn installation_token(&self, installation_id: u64) -> Result<String, GitHubError>;
}

/// Exchanges a signed GitHub App JWT for installation access tokens.
#[derive(Debug, Clone)]
pub struct AppInstallationTokens {
    http: Client,
    base_url: String,
    app_jwt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccessToken {
    token: String,
}

impl AppInstallationTokens {
    pub fn new(settings: &GitHubSettings) -> Self {
        Self {
            http: Client::new(),
            base_url: settings.api_base_url.clone(),
            app_jwt: settings.app_jwt.clone(),
        }
    }
}

#[async_trait]
impl InstallationTokens for AppInstallationTokens {
    async fn installation_token(&self, installation_id: u64) -> Result<String, GitHubError> {
        let jwt = self.app_jwt.as_deref().ok_or_else(|| {
            GitHubError::MissingAppJwt(format!("no app JWT for installation {installation_id}"))
        })?;

        let url = format!(
            "{}/app/installations/{installation_id}/access_tokens",
            self.base_url
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(jwt)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GitHubError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let access: AccessToken = response.json().await?;
        tracing::debug!(installation_id, "obtained installation token");
        Ok(access.token)
    }
}
