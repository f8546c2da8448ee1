//! Single-machine weighted completion time, scheduled greedily.
//!
//! Loads a list of weighted jobs, ranks them by two competing greedy
//! scores and reports the total weighted completion time of each
//! resulting schedule.
//!
//! # Modules
//!
//! - **`models`**: Domain type — `Job`
//! - **`dispatching`**: Scoring rules (`ScoringRule`), comparator and `RankedQueue`
//! - **`loader`**: Job list text format → two ranked queues
//! - **`validation`**: Declared vs loaded job count check
//! - **`scheduler`**: Weighted completion time reduction and rule comparison
//!
//! # Example
//!
//! ```
//! use u_completion::scheduler::Comparison;
//!
//! let cmp = Comparison::from_text("3\n3 5\n1 2\n2 1\n").unwrap();
//! assert_eq!(cmp.bad.weighted_sum, 29);
//! assert_eq!(cmp.good.weighted_sum, 28);
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various Optimizers for Single-Stage Production"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod dispatching;
pub mod error;
pub mod loader;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
