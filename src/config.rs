//! Validated runtime configuration.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use reqwest::Url;

use crate::cli::Args;

/// Path of the match endpoint relative to the service base URL.
pub const MATCH_PATH: &str = "match";

/// Runtime configuration built from [`Args`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the match endpoint.
    pub endpoint: Url,
    /// Resume to load at startup.
    pub resume: Option<PathBuf>,
    /// Job description to load at startup.
    pub job: Option<PathBuf>,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Validates parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the service URL is not an absolute `http`/`https` URL.
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Self {
            endpoint: match_endpoint(&args.api_url)?,
            resume: args.resume,
            job: args.job,
            log_level: args.log_level,
        })
    }
}

/// Loads `.env` from the working directory if present.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Builds the `/match` endpoint from a service base URL.
///
/// Trailing slashes on the base are ignored; a base path is kept.
///
/// # Errors
///
/// Returns an error if `base` is not an absolute `http`/`https` URL.
pub fn match_endpoint(base: &str) -> Result<Url> {
    let trimmed = base.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}/"))
        .with_context(|| format!("Invalid analysis service URL: {base}"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Analysis service URL must use http or https, got {}",
            url.scheme()
        );
    }

    url.join(MATCH_PATH)
        .with_context(|| format!("Invalid analysis service URL: {base}"))
}
