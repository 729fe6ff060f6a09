//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Environment variable holding the analysis service base URL.
pub const API_URL_ENV: &str = "RESUME_MATCHER_API_URL";

/// Resume Matcher - compare a resume against a job description
///
/// Uploads both documents to the match analysis service and shows the
/// returned score, insights and skill breakdown.
#[derive(Parser, Debug)]
#[command(name = "resume-matcher", version, about, long_about = None)]
pub struct Args {
    /// Base URL of the analysis service (requests go to `<URL>/match`)
    #[arg(long, env = API_URL_ENV)]
    pub api_url: String,

    /// Resume to preselect
    #[arg(long, value_name = "PATH")]
    pub resume: Option<PathBuf>,

    /// Job description to preselect
    #[arg(long, value_name = "PATH")]
    pub job: Option<PathBuf>,

    /// Log level used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
