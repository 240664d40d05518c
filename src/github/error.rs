const NO_INSTALLATION_ID: &str = "Sorry, if you have a Peril JSON settings file in a private repo, \
     you will need an installation ID for your integration.";
const NO_INSTALLATION_ID_SUBTITLE: &str = "You can find this inside the integration_installation event \
     sent when you installed the integration into your org.";
const NO_INSTALLATION_ID_ACTION: &str =
    "Set this as \"PERIL_ORG_INSTALLATION_ID\" in your ENV vars.";

/// Errors from the GitHub collaborator layer.
///
/// Failed content fetches are not errors (they come back as an empty string);
/// these cover operator configuration problems and calls whose result
/// cannot be defaulted.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GitHubError {
    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("{} {} {}", NO_INSTALLATION_ID, NO_INSTALLATION_ID_SUBTITLE, NO_INSTALLATION_ID_ACTION)]
    #[diagnostic(code(github::missing_installation_id))]
    MissingInstallationId,

    #[error("cannot request an installation token: {0}")]
    #[diagnostic(help("set app-jwt in the github section or GITHUB_APP_JWT in the environment"))]
    MissingAppJwt(String),

    #[error("no repository for dangerfile \"{0}\"")]
    #[diagnostic(help("use the owner/repo@path form or pass --repo"))]
    MissingRepo(String),
}
