//! Heap-backed ranked job collection.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{PriorityKey, ScoringRule};
use crate::models::Job;

#[derive(Debug)]
struct Ranked {
    key: PriorityKey,
    job: Job,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Jobs ranked by a single scoring rule.
///
/// `push` and `pop` are O(log n). `pop` hands ownership of the
/// highest-priority job to the caller.
#[derive(Debug)]
pub struct RankedQueue {
    rule: ScoringRule,
    heap: BinaryHeap<Ranked>,
}

impl RankedQueue {
    /// Creates an empty queue ranked by `rule`.
    pub fn new(rule: ScoringRule) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` jobs.
    pub fn with_capacity(rule: ScoringRule, capacity: usize) -> Self {
        Self {
            rule,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// The rule this queue ranks by.
    pub fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// Inserts a job.
    pub fn push(&mut self, job: Job) {
        let key = PriorityKey::new(self.rule, &job);
        self.heap.push(Ranked { key, job });
    }

    /// Removes and returns the highest-priority job.
    pub fn pop(&mut self) -> Option<Job> {
        self.heap.pop().map(|ranked| ranked.job)
    }

    /// The highest-priority job, without removing it.
    pub fn peek(&self) -> Option<&Job> {
        self.heap.peek().map(|ranked| &ranked.job)
    }

    /// Number of queued jobs.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the queue, yielding jobs in priority order.
    pub fn into_ranked(mut self) -> impl Iterator<Item = Job> {
        std::iter::from_fn(move || self.pop())
    }
}

impl Extend<Job> for RankedQueue {
    fn extend<I: IntoIterator<Item = Job>>(&mut self, iter: I) {
        for job in iter {
            self.push(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Job> {
        vec![Job::new(1, 3, 5), Job::new(2, 1, 2), Job::new(3, 2, 1)]
    }

    fn drain_numbers(queue: RankedQueue) -> Vec<u32> {
        queue.into_ranked().map(|j| j.number()).collect()
    }

    #[test]
    fn test_difference_order() {
        let mut queue = RankedQueue::new(ScoringRule::Difference);
        queue.extend(sample());
        assert_eq!(drain_numbers(queue), vec![3, 2, 1]);
    }

    #[test]
    fn test_ratio_order() {
        let mut queue = RankedQueue::new(ScoringRule::Ratio);
        queue.extend(sample());
        assert_eq!(drain_numbers(queue), vec![3, 1, 2]);
    }

    #[test]
    fn test_ties_are_deterministic() {
        let mut queue = RankedQueue::with_capacity(ScoringRule::Ratio, 4);
        queue.extend([
            Job::new(4, 2, 2),
            Job::new(2, 2, 2),
            Job::new(3, 4, 4),
            Job::new(1, 2, 2),
        ]);
        // All ratio 1.0; weight 4 first, then by input position
        assert_eq!(drain_numbers(queue), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_peek_and_len() {
        let mut queue = RankedQueue::new(ScoringRule::Difference);
        assert!(queue.is_empty());
        assert!(queue.peek().is_none());
        queue.extend(sample());
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().map(|j| j.number()), Some(3));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.rule(), ScoringRule::Difference);
    }

    #[test]
    fn test_pop_empties() {
        let mut queue = RankedQueue::new(ScoringRule::Ratio);
        queue.push(Job::new(1, 1, 1));
        assert!(queue.pop().is_some());
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }
}
