//! Priority-ordered greedy batch scheduler.
//!
//! # Algorithm
//!
//! 1. Order jobs by ascending priority value (stable: ties keep input order).
//! 2. Scan the remaining jobs in that order. A job joins the current batch
//!    if the batch still fits both `max_items` and `max_volume` with it;
//!    otherwise it is skipped and stays for a later batch.
//! 3. If nothing fits, the first remaining job is forced into a singleton
//!    batch regardless of volume.
//! 4. Commit the batch, remove its jobs, add the slowest job's print time
//!    to the total, and repeat until no jobs remain.
//!
//! The order is computed once. Removing jobs from a stably sorted list
//! keeps it sorted, so this matches re-sorting the pool every round.
//!
//! # Complexity
//! O(n log n + n * b) where n=jobs, b=batches.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Batch, BatchSchedule, Constraints, PrintJob};
use crate::validation::{validate_input, ValidationResult};

/// Input container for scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Jobs to schedule.
    pub jobs: Vec<PrintJob>,
    /// Printer capacity limits.
    pub constraints: Constraints,
}

impl ScheduleRequest {
    /// Creates a new schedule request.
    pub fn new(jobs: Vec<PrintJob>, constraints: Constraints) -> Self {
        Self { jobs, constraints }
    }

    /// Parses a request of the form `{"jobs": [...], "constraints": {...}}`.
    pub fn from_json(json: &str) -> ScheduleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the request without scheduling it.
    pub fn validate(&self) -> ValidationResult {
        validate_input(&self.jobs, &self.constraints)
    }
}

/// Greedy capacity-constrained batch scheduler.
///
/// Stateless: every call works on its own copy of the job pool, so one
/// scheduler can be shared freely across threads.
///
/// # Example
///
/// ```
/// use u_batch::models::{Constraints, PrintJob};
/// use u_batch::scheduler::BatchScheduler;
///
/// let jobs = vec![
///     PrintJob::new("M1", 100.0, 1, 120.0),
///     PrintJob::new("M2", 150.0, 1, 90.0),
///     PrintJob::new("M3", 120.0, 1, 150.0),
/// ];
/// let constraints = Constraints::new(300.0, 2);
///
/// let schedule = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();
/// assert_eq!(schedule.print_order, vec!["M1", "M2", "M3"]);
/// assert_eq!(schedule.total_time, 270.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchScheduler;

impl BatchScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Validates the input and batches the jobs.
    ///
    /// # Errors
    /// [`ScheduleError::Validation`] with every detected problem when the
    /// constraints or any job are malformed. No partial result is produced.
    pub fn schedule(
        &self,
        jobs: &[PrintJob],
        constraints: &Constraints,
    ) -> ScheduleResult<BatchSchedule> {
        if let Err(errors) = validate_input(jobs, constraints) {
            warn!(errors = errors.len(), "rejected scheduling input");
            return Err(ScheduleError::Validation(errors));
        }

        let schedule = build_batches(jobs, constraints);
        info!(
            jobs = jobs.len(),
            batches = schedule.batch_count(),
            total_time = schedule.total_time,
            "print queue scheduled"
        );
        Ok(schedule)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> ScheduleResult<BatchSchedule> {
        self.schedule(&request.jobs, &request.constraints)
    }
}

/// Parses JSON job records and a JSON constraints record, then schedules.
///
/// Job records use the fields `id`, `volume`, `priority`, `print_time`;
/// constraints use `max_volume` and `max_items`.
///
/// # Example
///
/// ```
/// let jobs = r#"[
///     {"id": "M1", "volume": 100, "priority": 2, "print_time": 120},
///     {"id": "M2", "volume": 150, "priority": 1, "print_time": 90},
///     {"id": "M3", "volume": 120, "priority": 3, "print_time": 150}
/// ]"#;
/// let constraints = r#"{"max_volume": 300, "max_items": 2}"#;
///
/// let schedule = u_batch::optimize_printing(jobs, constraints).unwrap();
/// assert_eq!(schedule.print_order, vec!["M2", "M1", "M3"]);
/// assert_eq!(schedule.total_time, 270.0);
/// ```
pub fn optimize_printing(jobs_json: &str, constraints_json: &str) -> ScheduleResult<BatchSchedule> {
    let jobs: Vec<PrintJob> = serde_json::from_str(jobs_json)?;
    let constraints: Constraints = serde_json::from_str(constraints_json)?;
    BatchScheduler::new().schedule(&jobs, &constraints)
}

/// Runs the batching loop on validated input.
fn build_batches(jobs: &[PrintJob], constraints: &Constraints) -> BatchSchedule {
    let mut schedule = BatchSchedule::new();
    let mut pool = priority_order(jobs);

    while !pool.is_empty() {
        let mut batch = Batch::new(schedule.batch_count(), schedule.next_start_time());

        for &idx in &pool {
            if batch.item_count() == constraints.max_items {
                break;
            }
            let job = &jobs[idx];
            if constraints.admits(batch.item_count() + 1, batch.volume + job.volume) {
                batch.add_job(job, idx);
            }
        }

        if batch.is_empty() {
            // Every remaining job exceeds max_volume on its own.
            let idx = pool[0];
            let job = &jobs[idx];
            debug_assert!(job.exceeds_volume(constraints.max_volume));
            warn!(
                job = %job.id,
                volume = job.volume,
                max_volume = constraints.max_volume,
                "job exceeds max volume, printing it alone"
            );
            batch = batch.as_fallback();
            batch.add_job(job, idx);
        }

        pool.retain(|idx| !batch.positions.contains(idx));

        debug!(
            sequence = batch.sequence,
            items = batch.item_count(),
            volume = batch.volume,
            duration = batch.duration,
            "committed batch"
        );
        schedule.add_batch(batch);
    }

    schedule
}

/// Returns job indices sorted by ascending priority, ties in input order.
fn priority_order(jobs: &[PrintJob]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..jobs.len()).collect();
    indices.sort_by(|&a, &b| jobs[a].priority.cmp(&jobs[b].priority));
    indices
}
