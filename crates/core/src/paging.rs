// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token-based pagination over `jobs/list`
//!
//! The walk is independent of transport: callers pass a closure that fetches
//! one page given the previous page's token.

use crate::job::{JobSummary, JobsPage};

/// Fetch every page and concatenate their jobs.
///
/// The first request carries no token. Walking stops once a page comes back
/// without a (non-empty) `next_page_token`. The first fetch error aborts the
/// walk.
pub fn collect_pages<F, E>(mut fetch: F) -> Result<Vec<JobSummary>, E>
where
    F: FnMut(Option<&str>) -> Result<JobsPage, E>,
{
    let mut jobs = Vec::new();
    let mut token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(token.as_deref())?;
        pages += 1;
        token = page.next_token().map(str::to_string);
        jobs.extend(page.jobs);
        if token.is_none() {
            break;
        }
    }

    tracing::debug!(pages, jobs = jobs.len(), "listed jobs");
    Ok(jobs)
}

/// Walk pages until a job satisfies `predicate`, returning the first match.
///
/// Pages after the one containing the match are never requested.
pub fn find_in_pages<F, P, E>(mut fetch: F, mut predicate: P) -> Result<Option<JobSummary>, E>
where
    F: FnMut(Option<&str>) -> Result<JobsPage, E>,
    P: FnMut(&JobSummary) -> bool,
{
    let mut token: Option<String> = None;

    loop {
        let page = fetch(token.as_deref())?;
        token = page.next_token().map(str::to_string);
        if let Some(found) = page.jobs.into_iter().find(|job| predicate(job)) {
            return Ok(Some(found));
        }
        if token.is_none() {
            return Ok(None);
        }
    }
}

#[cfg(test)]
#[path = "paging_tests.rs"]
mod tests;
