//! Greedy batch scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `BatchScheduler` fills batches greedily in priority order under two
//! simultaneous capacity limits (volume and item count). A job that fits
//! no batch on its own is printed alone. It is a heuristic, not an
//! optimal bin-packer, but it is fast and deterministic.
//!
//! # KPI
//!
//! `BatchKpi` reports batch counts, time saved over sequential printing,
//! and plate fill.
//!
//! # References
//!
//! - Potts & Kovalyov (2000), "Scheduling with batching: A review"
//! - Coffman et al. (1996), "Approximation algorithms for bin packing"

mod batch;
mod kpi;

pub use batch::{optimize_printing, BatchScheduler, ScheduleRequest};
pub use kpi::BatchKpi;
