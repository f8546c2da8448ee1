//! Scheduling domain models.
//!
//! The single-machine model has one entity: the [`Job`], a weighted unit
//! of work with a processing length. A schedule is just an order of jobs;
//! each job completes when all jobs before it and itself have run.

mod job;

pub use job::Job;
