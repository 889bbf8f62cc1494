//! Keyed in-memory container for jobs.
//!
//! A dumb registry: at most one entry per id, full replace on update, no
//! workflow validation. All mutation flows through the transition engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use orit_core::status::JobStatus;

use crate::models::job::Job;

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Relation/attribute filter for job listings. All fields are conjunctive;
/// an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub region: Option<String>,
    pub assigned_agent_id: Option<String>,
    pub parent_order_id: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(status) = self.status {
            if job.status != status {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if &job.region != region {
                return false;
            }
        }
        if let Some(agent) = &self.assigned_agent_id {
            if job.assigned_agent_id.as_ref() != Some(agent) {
                return false;
            }
        }
        if let Some(parent) = &self.parent_order_id {
            if job.parent_order_id.as_ref() != Some(parent) {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// In-memory snapshot of all jobs, keyed by id.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: HashMap<String, Job>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Insert or fully replace the entry for `job.id`.
    pub fn upsert(&mut self, job: Job) {
        self.jobs.insert(job.id.clone(), job);
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// All jobs, ordered by id so listings are deterministic.
    pub fn all(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.jobs.values().cloned().collect();
        jobs.sort_by(|a, b| a.id.cmp(&b.id));
        jobs
    }

    /// Jobs matching the filter, ordered by id.
    pub fn filter(&self, filter: &JobFilter) -> Vec<Job> {
        let mut jobs: Vec<Job> = self
            .jobs
            .values()
            .filter(|j| filter.matches(j))
            .cloned()
            .collect();
        jobs.sort_by(|a, b| a.id.cmp(&b.id));
        jobs
    }

    /// Rework children of a parent order (jobs whose `parent_order_id` is
    /// `parent_id`). Drives the rework counter.
    pub fn children_of(&self, parent_id: &str) -> Vec<Job> {
        self.filter(&JobFilter {
            parent_order_id: Some(parent_id.to_string()),
            ..Default::default()
        })
    }
}
