//! GitHub API collaborators.
//!
//! Everything here does network I/O; the routing core never calls into this
//! module. Callers compose the two: route an event to runs, then fetch each
//! run's dangerfile through [`GitHubClient::fetch_dangerfile`].
//!
//! Tokens are passed to `Authorization` headers only. They are never logged.

mod contents;
mod error;
mod permissions;
mod tokens;

pub use error::GitHubError;
pub use tokens::{AppInstallationTokens, InstallationTokens};

use reqwest::{Client, Method, RequestBuilder};

use crate::config::GitHubSettings;

const ACCEPT: &str = "application/vnd.github.machine-man-preview+json";
const USER_AGENT: &str = concat!("dangerfile-router/", env!("CARGO_PKG_VERSION"));

/// Thin GitHub REST client for the endpoints the router needs.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    org_installation_id: Option<u64>,
}

impl GitHubClient {
    pub fn new(settings: &GitHubSettings) -> Self {
        Self {
            http: Client::new(),
            base_url: settings.api_base_url.clone(),
            org_installation_id: settings.org_installation_id,
        }
    }

    /// Build a request against `{base_url}/{path}` with the standard headers.
    ///
    /// `token` uses the `token <value>` scheme GitHub accepts for installation
    /// and personal tokens.
    fn request(&self, method: Method, token: Option<&str>, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}/{path}", self.base_url))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT);
        if let Some(token) = token {
            request = request.header("Authorization", format!("token {token}"));
        }
        request
    }
}
