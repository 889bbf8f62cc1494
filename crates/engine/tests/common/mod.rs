//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use orit_core::roles::{User, UserRole};
use orit_core::status::JobStatus;
use orit_engine::LifecycleEngine;
use orit_store::models::job::{Job, ServiceType, SlaTier};

/// A representative order, parked at the given status.
pub fn job_at(id: &str, status: JobStatus) -> Job {
    let mut job = Job::new(
        id,
        "John Smith",
        "45 Baker Street, London",
        "W1U 6TE",
        ServiceType::Fttp,
        SlaTier::Standard,
        "London",
        NaiveDate::from_ymd_opt(2026, 8, 12).expect("valid date"),
    );
    job.status = status;
    job
}

/// An engine seeded with the given jobs.
pub fn engine_with(jobs: Vec<Job>) -> LifecycleEngine {
    let engine = LifecycleEngine::new();
    engine.seed_jobs(jobs).expect("seeding cannot fail");
    engine
}

/// A back-office operations user.
pub fn ops() -> User {
    User::new("OPS_001", "sarah.ops", UserRole::OritOps, "London")
}

/// A field installation engineer.
pub fn agent() -> User {
    User::new("ENG_101", "dave.mitchell", UserRole::FieldAgent, "Manchester")
}
