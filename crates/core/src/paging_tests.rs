// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::VecDeque;

fn page(jobs: &[(i64, &str)], next: Option<&str>) -> JobsPage {
    JobsPage {
        jobs: jobs
            .iter()
            .map(|(id, name)| JobSummary::new(*id, *name))
            .collect(),
        next_page_token: next.map(str::to_string),
    }
}

/// Serves pages in order and records the token each request carried
struct Pages {
    pages: VecDeque<JobsPage>,
    tokens: Vec<Option<String>>,
}

impl Pages {
    fn new(pages: Vec<JobsPage>) -> Self {
        Self {
            pages: pages.into(),
            tokens: Vec::new(),
        }
    }

    fn fetch(&mut self, token: Option<&str>) -> Result<JobsPage, String> {
        self.tokens.push(token.map(str::to_string));
        self.pages.pop_front().ok_or_else(|| "no more pages".to_string())
    }
}

#[test]
fn collects_jobs_across_pages() {
    let mut pages = Pages::new(vec![
        page(&[(1, "a"), (2, "b")], Some("t1")),
        page(&[(3, "c")], Some("t2")),
        page(&[(4, "d")], None),
    ]);

    let jobs = collect_pages(|t| pages.fetch(t)).unwrap();

    let ids: Vec<i64> = jobs.iter().map(|j| j.job_id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(
        pages.tokens,
        vec![None, Some("t1".to_string()), Some("t2".to_string())]
    );
}

#[test]
fn single_empty_page_yields_nothing() {
    let mut pages = Pages::new(vec![JobsPage::default()]);
    let jobs = collect_pages(|t| pages.fetch(t)).unwrap();
    assert!(jobs.is_empty());
    assert_eq!(pages.tokens.len(), 1);
}

#[test]
fn empty_token_ends_the_walk() {
    let mut pages = Pages::new(vec![page(&[(1, "a")], Some("")), page(&[(2, "b")], None)]);
    let jobs = collect_pages(|t| pages.fetch(t)).unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(pages.tokens.len(), 1);
}

#[test]
fn fetch_error_aborts_collection() {
    let mut calls = 0;
    let result = collect_pages(|_| {
        calls += 1;
        if calls == 1 {
            Ok(page(&[(1, "a")], Some("t1")))
        } else {
            Err("boom")
        }
    });
    assert_eq!(result, Err("boom"));
    assert_eq!(calls, 2);
}

#[test]
fn find_stops_at_first_matching_page() {
    let mut pages = Pages::new(vec![
        page(&[(1, "a")], Some("t1")),
        page(&[(2, "target"), (3, "target")], Some("t2")),
        page(&[(4, "target")], None),
    ]);

    let found = find_in_pages(|t| pages.fetch(t), |j| j.name() == Some("target")).unwrap();

    assert_eq!(found.map(|j| j.job_id.0), Some(2));
    assert_eq!(pages.tokens.len(), 2);
}

#[test]
fn find_returns_none_after_last_page() {
    let mut pages = Pages::new(vec![page(&[(1, "a")], Some("t1")), page(&[(2, "b")], None)]);

    let found = find_in_pages(|t| pages.fetch(t), |j| j.name() == Some("zzz")).unwrap();

    assert!(found.is_none());
    assert_eq!(pages.tokens.len(), 2);
}
