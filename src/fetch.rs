use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client};
use tracing::debug;

use crate::consts::USER_AGENT;
use crate::error::{JobsError, Result};
use crate::models::Job;

/// Create the HTTP client used for the jobs request.
///
/// Without a `timeout` the request may wait on an unresponsive server forever.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Issue one GET against `url` and decode the body as an array of jobs.
///
/// Any failure is returned as is; nothing is retried.
pub async fn fetch_jobs(client: &Client, url: &str, auth_header: &str) -> Result<Vec<Job>> {
    debug!(url, "requesting jobs");

    let response = client
        .get(url)
        .header(AUTHORIZATION, auth_header)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(JobsError::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    debug!(%status, bytes = body.len(), "received jobs response");

    let jobs: Vec<Job> = serde_json::from_slice(&body)?;
    debug!(count = jobs.len(), "decoded jobs");
    Ok(jobs)
}
