//! CLI for building a static-site collection of public GitHub repositories.
//!
//! Writes one `<dest>/<repo-name>.md` page per public repository of the
//! authenticated user, ready to be used as a Jekyll collection.

use clap::Parser;
use repo_collection::{
    DateFormat, RunSummary, Runner, RunnerConfig, RunnerError, DEFAULT_DATE_FORMAT, DEFAULT_LAYOUT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build Repo Collection - Create a Jekyll collection of your public GitHub repositories.
#[derive(Parser, Debug)]
#[command(name = "build-repo-collection", author, version, about, long_about = None)]
struct Args {
    /// Destination directory.
    dest: PathBuf,

    /// Page layout.
    #[arg(short, long, default_value = DEFAULT_LAYOUT)]
    layout: String,

    /// Date format.
    #[arg(short, long = "date", default_value = DEFAULT_DATE_FORMAT)]
    date: DateFormat,

    /// GitHub Personal Access Token. Anonymous access when unset.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL, e.g. for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<url::Url>,

    /// Exit with a non-zero code when any repository page fails.
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Both ring and aws-lc-rs may be compiled in; pick one process-wide.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    init_tracing();

    let args = Args::parse();
    let strict = args.strict;

    match run(args).await {
        Ok(summary) => ExitCode::from(exit_code(&summary, strict)),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(1)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = build_config(args);
    let runner = Runner::new(config)?;
    runner.run().await
}

fn build_config(args: Args) -> RunnerConfig {
    let mut config = RunnerConfig::new(args.dest, args.layout, args.date, args.token);
    if let Some(url) = args.api_url {
        config = config.with_api_url(url.to_string());
    }
    config
}

/// Per-repository failures only affect the exit code in strict mode.
fn exit_code(summary: &RunSummary, strict: bool) -> u8 {
    if strict && summary.has_failures() {
        2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    fn parse(args: &[&str]) -> Args {
        temp_env::with_vars_unset(["GITHUB_TOKEN", "GITHUB_API_URL"], || {
            Args::try_parse_from(args).unwrap()
        })
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn uses_defaults() {
        let args = parse(&["build-repo-collection", "_repos"]);

        assert_eq!(args.dest, PathBuf::from("_repos"));
        assert_eq!(args.layout, "repo");
        assert_eq!(args.date.as_str(), "%Y-%m-%d %H:%M:%S");
        assert_eq!(args.token, None);
        assert!(args.api_url.is_none());
        assert!(!args.strict);
    }

    #[test]
    fn accepts_short_flags() {
        let args = parse(&["build-repo-collection", "out", "-l", "project", "-d", "%Y"]);

        assert_eq!(args.layout, "project");
        assert_eq!(args.date.as_str(), "%Y");
    }

    #[test]
    fn accepts_long_flags() {
        let args = parse(&[
            "build-repo-collection",
            "out",
            "--layout",
            "project",
            "--date",
            "%d.%m.%Y",
            "--strict",
        ]);

        assert_eq!(args.layout, "project");
        assert_eq!(args.date.as_str(), "%d.%m.%Y");
        assert!(args.strict);
    }

    #[test]
    fn reads_token_from_environment() {
        let args = temp_env::with_var("GITHUB_TOKEN", Some("ghp_secret"), || {
            Args::try_parse_from(["build-repo-collection", "out"]).unwrap()
        });

        assert_eq!(args.token.as_deref(), Some("ghp_secret"));
    }

    #[test]
    fn rejects_invalid_date_format() {
        let result = temp_env::with_vars_unset(["GITHUB_TOKEN", "GITHUB_API_URL"], || {
            Args::try_parse_from(["build-repo-collection", "out", "--date", "%Q"])
        });

        assert!(result.is_err());
    }

    #[test]
    fn requires_destination() {
        let result = temp_env::with_vars_unset(["GITHUB_TOKEN", "GITHUB_API_URL"], || {
            Args::try_parse_from(["build-repo-collection"])
        });

        assert!(result.is_err());
    }

    #[test]
    fn builds_config_from_args() {
        let args = parse(&[
            "build-repo-collection",
            "site/_repos",
            "--api-url",
            "https://github.example.com/api/v3/",
        ]);

        let config = build_config(args);

        assert_eq!(config.destination(), Path::new("site/_repos"));
        assert_eq!(config.api_url(), Some("https://github.example.com/api/v3/"));
        assert_eq!(config.concurrency(), 5);
    }

    #[test]
    fn failures_only_change_exit_code_in_strict_mode() {
        let mut summary = RunSummary::new(1);
        summary.pages_failed = 1;

        assert_eq!(exit_code(&summary, false), 0);
        assert_eq!(exit_code(&summary, true), 2);
        assert_eq!(exit_code(&RunSummary::new(0), true), 0);
    }
}
