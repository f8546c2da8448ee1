//! Greedy single-machine schedules and their weighted completion time.
//!
//! # Algorithm
//!
//! Jobs are run one at a time, non-preemptively, in the order a
//! [`RankedQueue`](crate::dispatching::RankedQueue) yields them.
//! Ranking by `weight / length` (WSPT) minimizes total weighted
//! completion time; ranking by `weight - length` generally does not.
//!
//! # References
//!
//! - Smith (1956), "Various Optimizers for Single-Stage Production"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod greedy;
mod kpi;

pub use greedy::Comparison;
pub use kpi::CompletionKpi;
