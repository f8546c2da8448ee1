//! Weighted completion time reduction.
//!
//! Consumes a ranked queue in priority order and accumulates:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time C_j | Sum of lengths of jobs up to and including j |
//! | Weighted sum | Sum of w_j * C_j |
//! | Makespan | C of the last job (= sum of all lengths) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3.1: The Total Weighted Completion Time

use serde::{Deserialize, Serialize};

use crate::dispatching::{RankedQueue, ScoringRule};
use crate::error::{Error, Result};

/// Result of scheduling one ranked queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionKpi {
    /// Rule the jobs were ranked by.
    pub rule: ScoringRule,
    /// Sum of `weight * completion_time` over all jobs.
    pub weighted_sum: i64,
    /// Completion time of the last job.
    pub completion_time: u64,
    /// Number of jobs consumed.
    pub job_count: usize,
    /// Job numbers in schedule order.
    pub sequence: Vec<u32>,
}

impl CompletionKpi {
    /// Schedules every job in `queue`, highest priority first.
    ///
    /// The queue is consumed; each job is dropped right after its
    /// contribution is accumulated.
    ///
    /// # Errors
    /// [`Error::Overflow`] if the weighted sum does not fit in `i64`.
    pub fn reduce(queue: RankedQueue) -> Result<Self> {
        let rule = queue.rule();
        let mut sequence = Vec::with_capacity(queue.len());
        let mut completion_time: u64 = 0;
        let mut weighted_sum: i64 = 0;

        for job in queue.into_ranked() {
            let number = job.number();
            let overflow = || Error::Overflow { rule, number };
            completion_time = completion_time
                .checked_add(u64::from(job.length()))
                .ok_or_else(overflow)?;
            weighted_sum = i64::try_from(completion_time)
                .ok()
                .and_then(|c| c.checked_mul(i64::from(job.weight())))
                .and_then(|term| weighted_sum.checked_add(term))
                .ok_or_else(overflow)?;
            sequence.push(number);
        }

        Ok(Self {
            rule,
            weighted_sum,
            completion_time,
            job_count: sequence.len(),
            sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn queue(rule: ScoringRule, jobs: &[(u32, u32)]) -> RankedQueue {
        let mut queue = RankedQueue::new(rule);
        queue.extend(
            jobs.iter()
                .enumerate()
                .map(|(i, &(w, l))| Job::new(i as u32 + 1, w, l)),
        );
        queue
    }

    const SAMPLE: [(u32, u32); 3] = [(3, 5), (1, 2), (2, 1)];

    #[test]
    fn test_difference_sum() {
        // Order #3, #2, #1 → C = 1, 3, 8 → 2*1 + 1*3 + 3*8
        let kpi = CompletionKpi::reduce(queue(ScoringRule::Difference, &SAMPLE)).unwrap();
        assert_eq!(kpi.weighted_sum, 29);
        assert_eq!(kpi.sequence, vec![3, 2, 1]);
    }

    #[test]
    fn test_ratio_sum() {
        // Order #3, #1, #2 → C = 1, 6, 8 → 2*1 + 3*6 + 1*8
        let kpi = CompletionKpi::reduce(queue(ScoringRule::Ratio, &SAMPLE)).unwrap();
        assert_eq!(kpi.weighted_sum, 28);
        assert_eq!(kpi.sequence, vec![3, 1, 2]);
        assert_eq!(kpi.rule, ScoringRule::Ratio);
    }

    #[test]
    fn test_completion_time_is_total_length() {
        let kpi = CompletionKpi::reduce(queue(ScoringRule::Ratio, &SAMPLE)).unwrap();
        assert_eq!(kpi.completion_time, 8);
        assert_eq!(kpi.job_count, 3);
    }

    #[test]
    fn test_empty_queue() {
        let kpi = CompletionKpi::reduce(RankedQueue::new(ScoringRule::Difference)).unwrap();
        assert_eq!(kpi.weighted_sum, 0);
        assert_eq!(kpi.completion_time, 0);
        assert_eq!(kpi.job_count, 0);
        assert!(kpi.sequence.is_empty());
    }

    #[test]
    fn test_single_job() {
        let kpi = CompletionKpi::reduce(queue(ScoringRule::Ratio, &[(7, 4)])).unwrap();
        assert_eq!(kpi.weighted_sum, 28);
    }

    #[test]
    fn test_large_values_fit() {
        // 1000 jobs of (u32::MAX, 1000): well beyond 32-bit sums
        let jobs = vec![(u32::MAX, 1000); 1000];
        let kpi = CompletionKpi::reduce(queue(ScoringRule::Difference, &jobs)).unwrap();
        let expected: i64 = (1..=1000i64).map(|k| u32::MAX as i64 * 1000 * k).sum();
        assert_eq!(kpi.weighted_sum, expected);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let jobs = [(u32::MAX, u32::MAX), (u32::MAX, u32::MAX)];
        for rule in ScoringRule::ALL {
            let err = CompletionKpi::reduce(queue(rule, &jobs)).unwrap_err();
            assert!(matches!(err, Error::Overflow { rule: r, number: 1 } if r == rule));
        }
    }

    #[test]
    fn test_weighted_sum_never_decreases() {
        let jobs = [(3, 5), (1, 2), (2, 1), (0, 4), (9, 9), (7, 1), (4, 6)];
        for rule in ScoringRule::ALL {
            let kpi = CompletionKpi::reduce(queue(rule, &jobs)).unwrap();

            let mut completion: u64 = 0;
            let mut running: i64 = 0;
            for &number in &kpi.sequence {
                let (w, l) = jobs[number as usize - 1];
                completion += l as u64;
                let next = running + w as i64 * completion as i64;
                assert!(next >= running);
                running = next;
            }
            assert_eq!(running, kpi.weighted_sum);
            assert_eq!(completion, kpi.completion_time);
            let total: u64 = jobs.iter().map(|&(_, l)| l as u64).sum();
            assert_eq!(kpi.completion_time, total);
        }
    }
}
