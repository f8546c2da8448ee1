//! Greedy scoring rules and priority ranking.
//!
//! Provides the two competing single-machine scores and a heap-backed
//! queue that always yields the highest-priority remaining job.
//!
//! # Usage
//!
//! ```
//! use u_completion::dispatching::{RankedQueue, ScoringRule};
//! use u_completion::models::Job;
//!
//! let mut queue = RankedQueue::new(ScoringRule::Ratio);
//! queue.push(Job::new(1, 3, 5));
//! queue.push(Job::new(2, 2, 1));
//! assert_eq!(queue.pop().map(|j| j.number()), Some(2));
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various Optimizers for Single-Stage Production"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.1

mod engine;
mod queue;
mod rules;

pub use engine::{compare_jobs, PriorityKey};
pub use queue::RankedQueue;
pub use rules::ScoringRule;

/// Score returned by a scoring rule.
///
/// **Higher score = higher priority** (scheduled first).
pub type RuleScore = f64;
