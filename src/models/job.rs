//! Job model.
//!
//! A job is a single non-preemptive unit of work on one machine,
//! described by a weight (importance) and a length (processing time).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.1

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dispatching::{RuleScore, ScoringRule};

/// A job to be scheduled on a single machine.
///
/// Immutable once constructed: both greedy scores are derived from
/// `weight` and `length` and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// 1-based position of the job line in the input.
    number: u32,
    /// Job weight (importance).
    weight: u32,
    /// Job length (processing time).
    length: u32,
}

impl Job {
    /// Creates a job.
    pub fn new(number: u32, weight: u32, length: u32) -> Self {
        Self {
            number,
            weight,
            length,
        }
    }

    /// Input position (1-based).
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Job weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Job length.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// `weight - length`. May be negative.
    pub fn difference_score(&self) -> i64 {
        i64::from(self.weight) - i64::from(self.length)
    }

    /// `weight / length` as floating point.
    ///
    /// A zero length yields `inf` (or `NaN` for `0 / 0`).
    pub fn ratio_score(&self) -> f64 {
        f64::from(self.weight) / f64::from(self.length)
    }

    /// Score under the given rule. Larger = scheduled earlier.
    pub fn score(&self, rule: ScoringRule) -> RuleScore {
        rule.evaluate(self)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#:{}; w:{}; l:{}; ds:{}; rs:{}]",
            self.number,
            self.weight,
            self.length,
            self.difference_score(),
            self.ratio_score()
        )
    }
}
