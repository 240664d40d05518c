use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Route GitHub webhook events to dangerfiles.
#[derive(Debug, Parser)]
#[command(name = "dangerfile-router", version, about)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the KDL config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the runs for a webhook (reads the payload JSON on stdin, writes JSON to stdout)
    Route {
        /// Event name, as sent in the X-GitHub-Event header
        #[arg(long)]
        event: String,
        /// Peril-style JSON settings file; replaces the config's rules
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Print the dangerfile a `[repo@]path[#branch]` location points at
    Fetch {
        location: String,
        /// Repository for locations without a repo part
        #[arg(long)]
        repo: Option<String>,
    },
    /// Print whether a user has write access to a repository
    CanWrite {
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,
        #[arg(long)]
        user: String,
        #[arg(long)]
        repo: String,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    dangerfile_router::logging::init(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Route { event, settings } => {
            dangerfile_router::run_route(config, settings.as_deref(), &event)
        }
        Commands::Fetch { location, repo } => {
            dangerfile_router::run_fetch(config, &location, repo.as_deref())
        }
        Commands::CanWrite { token, user, repo } => {
            dangerfile_router::run_can_write(config, &token, &user, &repo)
        }
    }
}
