//! GitHub hosting adapter
//!
//! Implements `HostingApi` with the GitHub REST API, retrying through rate
//! limits and server errors.
//!
//! - [`retry`] - Response classification and backoff

pub mod retry;

use std::str::FromStr;
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap};

use crate::Error;
use crate::core::models::HostedRepository;
use crate::core::ports::HostingApi;

pub use retry::{
    Backoff, MAX_RATE_LIMIT_WAIT, Outcome, RetryConfig, classify, rate_limit_wait,
};

/// Public GitHub API
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const PER_PAGE: usize = 100;

/// Blocking GitHub API client
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    token: String,
    base_url: String,
    retry: RetryConfig,
}

impl GithubClient {
    /// Create a client for `base_url` authenticated with `token`
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("contrib-check/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryConfig::default(),
        })
    }

    /// Create a client for the public API using `GITHUB_TOKEN`
    pub fn from_env() -> anyhow::Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(Error::MissingToken)?;
        Self::new(token, GITHUB_API_URL)
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn get_page(&self, url: &str) -> anyhow::Result<Vec<HostedRepository>> {
        let mut backoff = Backoff::new(&self.retry);
        let mut wait = Duration::ZERO;
        let mut last_error = String::new();

        for attempt in 0..=self.retry.max_retries {
            if attempt > 0 {
                debug!("retry attempt {attempt}/{} after {wait:?}", self.retry.max_retries);
                thread::sleep(wait);
            }

            let response = match self
                .http
                .get(url)
                .bearer_auth(&self.token)
                .header(ACCEPT, "application/vnd.github+json")
                .send()
            {
                Ok(response) => response,
                Err(e) if e.is_timeout() || e.is_connect() => {
                    warn!("Server error - retrying... ({e})");
                    last_error = e.to_string();
                    wait = backoff.next_delay();
                    continue;
                },
                Err(e) => return Err(e.into()),
            };

            let status = response.status().as_u16();
            let headers = response.headers();
            let outcome = classify(
                status,
                header_value(headers, "x-ratelimit-remaining"),
                header_value(headers, "x-ratelimit-reset"),
            );

            match outcome {
                Outcome::Success => return Ok(response.json()?),
                Outcome::RateLimited { reset_at } => {
                    wait = rate_limit_wait(reset_at, chrono::Utc::now().timestamp());
                    warn!("Sleeping {}s until we get past the API rate limit...", wait.as_secs());
                    last_error = format!("HTTP {status}: rate limit exceeded");
                },
                Outcome::ServerError => {
                    wait = backoff.next_delay();
                    warn!("Server error - retrying... (HTTP {status})");
                    last_error = format!("HTTP {status}");
                },
                Outcome::Fatal => {
                    let message = response.text().unwrap_or_default();
                    return Err(Error::Api { status, message }.into());
                },
            }
        }

        Err(Error::RetriesExhausted {
            attempts: self.retry.max_retries,
            last_error,
        }
        .into())
    }
}

impl HostingApi for GithubClient {
    fn list_org_repos(&self, org: &str) -> anyhow::Result<Vec<HostedRepository>> {
        let mut repos = Vec::new();

        for page in 1.. {
            let url = format!(
                "{}/orgs/{org}/repos?per_page={PER_PAGE}&page={page}",
                self.base_url
            );
            let batch = self.get_page(&url)?;
            let done = batch.len() < PER_PAGE;
            repos.extend(batch);
            if done {
                break;
            }
        }

        debug!("{org}: {} repositories listed", repos.len());
        Ok(repos)
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}
