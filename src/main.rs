pub mod auth;
pub mod consts;
pub mod error;
pub mod fetch;
pub mod models;
pub mod opts;
pub mod report;
pub mod roles;

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter,
};

use crate::auth::basic_auth_header;
use crate::consts::DEFAULT_LOG_FILTERS;
use crate::fetch::{build_client, fetch_jobs};
use crate::opts::Opts;
use crate::report::{
    matching_query, matching_roles, open_jobs, sort_by_recency, updated_within, write_report,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let mut filter = EnvFilter::builder()
        .with_default_directive(opts.log.into())
        .with_env_var("LOG")
        .from_env_lossy();

    for rule in DEFAULT_LOG_FILTERS {
        filter = filter.add_directive(rule.parse().expect("DEFAULT_LOG_FILTERS misconfiguration"));
    }
    registry()
        .with(filter)
        .with(layer().with_writer(std::io::stderr))
        .init();

    run(&opts, std::io::stdout().lock()).await
}

/// Fetch, filter, sort and report, writing the report lines to `out`.
async fn run<W: Write>(opts: &Opts, out: W) -> anyhow::Result<()> {
    let auth_header = basic_auth_header(&opts.api_key);
    let client = build_client(opts.timeout_secs.map(Duration::from_secs))?;

    let jobs = fetch_jobs(&client, &opts.url, &auth_header)
        .await
        .with_context(|| format!("fetching jobs from {}", opts.url))?;
    let fetched = jobs.len();

    let mut selected = open_jobs(jobs, &opts.status);
    if let Some(query) = &opts.query {
        selected = matching_query(selected, query);
    }
    selected = matching_roles(selected, &opts.roles);
    if let Some(hours) = opts.hours {
        selected = updated_within(selected, hours, Utc::now());
    }
    info!(fetched, selected = selected.len(), status = %opts.status, "filtered jobs");

    sort_by_recency(&mut selected);

    let written = write_report(&selected, opts.limit, opts.format, out).context("writing report")?;
    debug!(written, "report written");

    Ok(())
}
