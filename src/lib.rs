//! Capacity-constrained batch scheduling for the U-Engine ecosystem.
//!
//! Orders a queue of 3D-print jobs into batches that respect a printer's
//! volume and item-count limits, and reports the resulting print order
//! and total print time.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`PrintJob`, `Constraints`, `Batch`, `BatchSchedule`)
//! - **`validation`**: Input checks (capacity limits, negative or non-finite quantities)
//! - **`scheduler`**: `BatchScheduler`, `ScheduleRequest`, `BatchKpi`
//! - **`error`**: `ScheduleError` returned by scheduling entry points
//!
//! # Example
//!
//! ```
//! use u_batch::models::{Constraints, PrintJob};
//! use u_batch::scheduler::BatchScheduler;
//!
//! let jobs = vec![
//!     PrintJob::new("M1", 250.0, 1, 180.0),
//!     PrintJob::new("M2", 200.0, 1, 150.0),
//!     PrintJob::new("M3", 180.0, 2, 120.0),
//! ];
//! let schedule = BatchScheduler::new()
//!     .schedule(&jobs, &Constraints::new(300.0, 2))
//!     .unwrap();
//!
//! assert_eq!(schedule.print_order, vec!["M1", "M2", "M3"]);
//! assert_eq!(schedule.total_time, 450.0);
//! ```
//!
//! # References
//!
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ScheduleError, ScheduleResult};
pub use scheduler::optimize_printing;
