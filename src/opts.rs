use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::consts::{DEFAULT_API_KEY, DEFAULT_JOBS_URL, OPEN_STATUS, REPORT_LIMIT};
use crate::roles::Role;

/// Print the most recently updated open jobs of a Greenhouse organization.
// No `Debug`: carries the API key.
#[derive(Parser, Clone)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Log level of application, overridden by the `LOG` filter
    #[arg(global = true, short, long, env = "LOG_LEVEL", default_value_t = LevelFilter::INFO)]
    pub log: LevelFilter,

    /// Harvest API key, sent as the Basic-Auth user name
    #[arg(
        short = 'k',
        long,
        env = "GREENHOUSE_API_KEY",
        hide_env_values = true,
        default_value = DEFAULT_API_KEY
    )]
    pub api_key: String,

    #[arg(short, long, env = "GREENHOUSE_URL", default_value = DEFAULT_JOBS_URL)]
    pub url: String,

    /// Only jobs with exactly this status are reported
    #[arg(short, long, env = "GREENHOUSE_STATUS", default_value = OPEN_STATUS)]
    pub status: String,

    /// Whitespace-separated terms that must all occur in the title, departments or offices
    #[arg(short, long, env = "GREENHOUSE_QUERY")]
    pub query: Option<String>,

    /// Keep jobs matching any of these roles; repeat the flag or separate with commas
    #[arg(short, long = "role", env = "GREENHOUSE_ROLES", value_enum, value_delimiter = ',')]
    pub roles: Vec<Role>,

    /// Keep jobs updated within the last N hours (needs RFC 3339 `updated_at`)
    #[arg(long, env = "GREENHOUSE_HOURS")]
    pub hours: Option<u64>,

    /// Maximum number of jobs to print
    #[arg(short = 'n', long, env = "GREENHOUSE_LIMIT", default_value_t = REPORT_LIMIT)]
    pub limit: usize,

    #[arg(short, long, env = "GREENHOUSE_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Request timeout; without it the request waits indefinitely
    #[arg(short, long, env = "GREENHOUSE_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<name> <updated_at>` per line
    Text,
    /// One JSON object per line
    JsonLines,
}
