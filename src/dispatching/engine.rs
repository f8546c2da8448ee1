//! Job comparator.
//!
//! Orders jobs for one scoring rule with a layered tie-break:
//!
//! 1. Larger score first.
//! 2. Equal score: larger weight first.
//! 3. Equal score and weight: smaller job number (earlier input line) first.
//!
//! Scores are compared with [`f64::total_cmp`]. Zero-length jobs score
//! `+inf` under the ratio rule (`0 / 0` included) and so rank first.

use std::cmp::Ordering;

use super::{RuleScore, ScoringRule};
use crate::models::Job;

/// Precomputed ranking key of a job under one rule.
///
/// `Ord` is the priority order: `a > b` means `a` is scheduled before `b`.
#[derive(Debug, Clone, Copy)]
pub struct PriorityKey {
    score: RuleScore,
    weight: u32,
    number: u32,
}

impl PriorityKey {
    /// Builds the key of `job` under `rule`.
    pub fn new(rule: ScoringRule, job: &Job) -> Self {
        Self {
            score: job.score(rule),
            weight: job.weight(),
            number: job.number(),
        }
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.weight.cmp(&other.weight))
            .then_with(|| other.number.cmp(&self.number))
    }
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

/// Compares two jobs under `rule`.
///
/// Returns `Greater` when `a` has higher priority than `b`.
pub fn compare_jobs(rule: ScoringRule, a: &Job, b: &Job) -> Ordering {
    PriorityKey::new(rule, a).cmp(&PriorityKey::new(rule, b))
}
