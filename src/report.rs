use std::io::Write;

use chrono::{DateTime, TimeDelta, Utc};
use serde_jsonlines::JsonLinesWriter;

use crate::error::Result;
use crate::models::Job;
use crate::opts::OutputFormat;
use crate::roles::Role;

/// Keep the jobs whose status is exactly `status`, preserving order.
pub fn open_jobs(jobs: Vec<Job>, status: &str) -> Vec<Job> {
    jobs.into_iter().filter(|job| job.has_status(status)).collect()
}

/// Keep the jobs whose title, departments or offices contain every
/// whitespace-separated term of `query`, ignoring case. A blank query keeps all.
pub fn matching_query(jobs: Vec<Job>, query: &str) -> Vec<Job> {
    let query = query.to_lowercase();
    let terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        return jobs;
    }

    jobs.into_iter()
        .filter(|job| {
            let text = job.search_text();
            terms.iter().all(|term| text.contains(term))
        })
        .collect()
}

/// Keep the jobs matching at least one of `roles`. No roles keeps all.
pub fn matching_roles(jobs: Vec<Job>, roles: &[Role]) -> Vec<Job> {
    if roles.is_empty() {
        return jobs;
    }

    jobs.into_iter()
        .filter(|job| {
            let text = job.role_text();
            roles.iter().any(|role| role.matches(&text))
        })
        .collect()
}

/// Keep the jobs updated at most `hours` before `now`.
///
/// `updated_at` must be RFC 3339; jobs without a parseable timestamp are
/// dropped. Timestamps after `now` are kept.
pub fn updated_within(jobs: Vec<Job>, hours: u64, now: DateTime<Utc>) -> Vec<Job> {
    let Some(window) = i64::try_from(hours).ok().and_then(TimeDelta::try_hours) else {
        return jobs;
    };

    jobs.into_iter()
        .filter(|job| {
            job.updated_at
                .as_deref()
                .and_then(|updated_at| DateTime::parse_from_rfc3339(updated_at).ok())
                .is_some_and(|updated_at| now - updated_at.with_timezone(&Utc) <= window)
        })
        .collect()
}

/// Most recently updated first. `updated_at` is compared as text, so jobs
/// without one end up last. Jobs with equal keys keep their order.
pub fn sort_by_recency(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.updated_at_key().cmp(a.updated_at_key()));
}

/// Write at most `limit` jobs to `out`, one per line. Returns the number of
/// lines written.
pub fn write_report<W: Write>(
    jobs: &[Job],
    limit: usize,
    format: OutputFormat,
    mut out: W,
) -> Result<usize> {
    let top = &jobs[..jobs.len().min(limit)];

    match format {
        OutputFormat::Text => {
            for job in top {
                writeln!(out, "{} {}", job.name, job.updated_at_key())?;
            }
            out.flush()?;
        }
        OutputFormat::JsonLines => {
            let mut writer = JsonLinesWriter::new(out);
            for job in top {
                writer.write(job)?;
            }
            writer.flush()?;
        }
    }

    Ok(top.len())
}
