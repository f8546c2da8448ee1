//! Built-in scoring rules.
//!
//! - **Difference**: `weight - length`. Intuitive but not optimal.
//! - **Ratio**: `weight / length`. Optimal for total weighted completion
//!   time on a single machine (Smith's rule, a.k.a. WSPT).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RuleScore;
use crate::models::Job;

/// Which greedy score a ranked collection is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Rank by `weight - length`.
    Difference,
    /// Rank by `weight / length`.
    ///
    /// # Reference
    /// Smith (1956), optimal for minimizing weighted completion time.
    Ratio,
}

impl ScoringRule {
    /// Both rules, difference first.
    pub const ALL: [ScoringRule; 2] = [ScoringRule::Difference, ScoringRule::Ratio];

    /// Rule name.
    pub fn name(&self) -> &'static str {
        match self {
            ScoringRule::Difference => "DIFF",
            ScoringRule::Ratio => "RATIO",
        }
    }

    /// Rule description.
    pub fn description(&self) -> &'static str {
        match self {
            ScoringRule::Difference => "Weight minus Length",
            ScoringRule::Ratio => "Weight over Length (Smith's rule)",
        }
    }

    /// Evaluates a job's score under this rule.
    ///
    /// Difference scores are integers well inside `f64`'s exact range,
    /// so no precision is lost by the common score type. A `0 / 0` ratio
    /// scores `+inf`, the same as any other zero-length job.
    pub fn evaluate(&self, job: &Job) -> RuleScore {
        match self {
            ScoringRule::Difference => job.difference_score() as f64,
            ScoringRule::Ratio => {
                let ratio = job.ratio_score();
                if ratio.is_nan() {
                    f64::INFINITY
                } else {
                    ratio
                }
            }
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference() {
        let heavy = Job::new(1, 10, 4);
        let light = Job::new(2, 3, 5);
        assert_eq!(ScoringRule::Difference.evaluate(&heavy), 6.0);
        assert_eq!(ScoringRule::Difference.evaluate(&light), -2.0);
    }

    #[test]
    fn test_ratio() {
        let dense = Job::new(1, 2, 1);
        let sparse = Job::new(2, 1, 2);
        assert!(ScoringRule::Ratio.evaluate(&dense) > ScoringRule::Ratio.evaluate(&sparse));
    }

    #[test]
    fn test_rules_disagree() {
        // diff: 3-5 = -2 vs 1-2 = -1; ratio: 0.6 vs 0.5
        let a = Job::new(1, 3, 5);
        let b = Job::new(2, 1, 2);
        assert!(ScoringRule::Difference.evaluate(&a) < ScoringRule::Difference.evaluate(&b));
        assert!(ScoringRule::Ratio.evaluate(&a) > ScoringRule::Ratio.evaluate(&b));
    }

    #[test]
    fn test_zero_by_zero_ratio_is_infinite() {
        let empty = Job::new(1, 0, 0);
        assert!(empty.ratio_score().is_nan());
        assert_eq!(ScoringRule::Ratio.evaluate(&empty), f64::INFINITY);
    }

    #[test]
    fn test_names() {
        assert_eq!(ScoringRule::Difference.to_string(), "DIFF");
        assert_eq!(ScoringRule::Ratio.name(), "RATIO");
        assert!(ScoringRule::Ratio.description().contains("Smith"));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ScoringRule::ALL).unwrap();
        assert_eq!(json, r#"["difference","ratio"]"#);
    }
}
