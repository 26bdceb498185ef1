//! CLI argument parsing and execution context resolution.
//!
//! Every flag falls back to the environment variable GitHub Actions sets for
//! the same value, so inside a workflow the binary runs without arguments.
use clap::Parser;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::{env, path::PathBuf};

use crate::{
    error::{ClassifierError, Result},
    forge::{
        config::{DEFAULT_API_URL, RemoteConfig},
        request::CommitRef,
    },
};

pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const SHA_ENV: &str = "GITHUB_SHA";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const API_URL_ENV: &str = "GITHUB_API_URL";
pub const OUTPUT_ENV: &str = "GITHUB_OUTPUT";
pub const ACTIONS_ENV: &str = "GITHUB_ACTIONS";

/// Classify the pull request associated with a commit into a release
/// decision based on its labels.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    /// Repository as owner/name or an http(s) URL. Falls back to
    /// GITHUB_REPOSITORY env var.
    pub repo: Option<String>,

    #[arg(long)]
    /// Commit sha to classify. Falls back to GITHUB_SHA env var.
    pub sha: Option<String>,

    #[arg(long)]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: Option<String>,

    #[arg(long)]
    /// GitHub API url. Falls back to GITHUB_API_URL env var, then to the
    /// API of the host in --repo when it is a URL.
    pub api_url: Option<String>,

    #[arg(long)]
    /// File that step outputs are appended to. Falls back to GITHUB_OUTPUT
    /// env var. Outputs are printed to stdout when unset.
    pub output_file: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

/// Everything a single invocation needs, resolved from args and env.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub commit: CommitRef,
    pub remote: RemoteConfig,
    pub output_file: Option<PathBuf>,
    /// Whether to emit `::warning::` / `::error::` workflow commands.
    pub workflow_commands: bool,
}

/// Repository coordinates parsed from --repo / GITHUB_REPOSITORY.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RepoLocation {
    owner: String,
    repo: String,
    api_url: Option<String>,
    token: Option<String>,
}

impl Args {
    /// Resolve the execution context from CLI arguments and environment.
    pub fn resolve(&self) -> Result<ExecutionContext> {
        let repo = self
            .repo
            .clone()
            .filter(|r| !r.is_empty())
            .or_else(|| env_var(REPOSITORY_ENV))
            .ok_or_else(|| {
                ClassifierError::invalid_args(format!(
                    "must set --repo or {REPOSITORY_ENV}"
                ))
            })?;

        let sha = self
            .sha
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| env_var(SHA_ENV))
            .ok_or_else(|| {
                ClassifierError::invalid_args(format!(
                    "must set --sha or {SHA_ENV}"
                ))
            })?;

        let location = parse_repo(&repo)?;

        let token = self
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .or(location.token)
            .or_else(|| env_var(TOKEN_ENV));

        let api_url = self
            .api_url
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| env_var(API_URL_ENV))
            .or(location.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let output_file = self
            .output_file
            .clone()
            .or_else(|| env_var(OUTPUT_ENV).map(PathBuf::from));

        let workflow_commands = env_var(ACTIONS_ENV).as_deref() == Some("true");

        Ok(ExecutionContext {
            commit: CommitRef {
                owner: location.owner,
                repo: location.repo,
                sha,
            },
            remote: RemoteConfig {
                api_url,
                token: token.map(SecretString::from),
            },
            output_file,
            workflow_commands,
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Parse either "owner/name" or an http(s) repository URL.
fn parse_repo(repo: &str) -> Result<RepoLocation> {
    if repo.contains("://") {
        return parse_repo_url(repo);
    }

    let repo = repo.trim_end_matches(".git");

    match repo.split('/').collect::<Vec<&str>>().as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => {
            Ok(RepoLocation {
                owner: owner.to_string(),
                repo: name.to_string(),
                api_url: None,
                token: None,
            })
        }
        _ => Err(ClassifierError::invalid_args(format!(
            "repository must be in owner/name form or an http(s) url: {repo}"
        ))),
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: &git_url_parse::Scheme) -> Result<&'static str> {
    match scheme {
        git_url_parse::Scheme::Http => Ok("http"),
        git_url_parse::Scheme::Https => Ok("https"),
        _ => Err(ClassifierError::invalid_args(
            "only http and https schemes are supported for repo urls",
        )),
    }
}

fn parse_repo_url(repo: &str) -> Result<RepoLocation> {
    let parsed = GitUrl::parse(repo)?;

    let scheme = validate_scheme(&parsed.scheme)?;

    let host = parsed.host.ok_or_else(|| {
        ClassifierError::invalid_args("unable to parse host from repo url")
    })?;

    let owner = parsed.owner.ok_or_else(|| {
        ClassifierError::invalid_args("unable to parse owner from repo url")
    })?;

    // github.com serves its API from a subdomain, Enterprise from a path
    let api_url = if host == "github.com" {
        format!("{scheme}://api.{host}")
    } else {
        format!("{scheme}://{host}/api/v3")
    };

    Ok(RepoLocation {
        owner,
        repo: parsed.name,
        api_url: Some(api_url),
        token: parsed.token,
    })
}
