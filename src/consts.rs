pub(crate) const DEFAULT_LOG_FILTERS: &[&str] = &[
    #[cfg(not(debug_assertions))]
    "mio=info",
    "hyper_util=info",
    "reqwest=info",
    "rustls=info",
    "hickory_resolver=info",
    "hickory_proto=info",
];

/// Harvest API endpoint listing every job of the organization.
pub(crate) const DEFAULT_JOBS_URL: &str = "https://harvest.greenhouse.io/v1/jobs";

/// Placeholder key used when none is supplied on the command line or in the environment.
pub(crate) const DEFAULT_API_KEY: &str = "YOUR_HARVEST_API_KEY";

pub(crate) const OPEN_STATUS: &str = "open";

/// Number of jobs printed by default.
pub(crate) const REPORT_LIMIT: usize = 5;

pub(crate) const USER_AGENT: &str = concat!("greenhouse-jobs/", env!("CARGO_PKG_VERSION"));
