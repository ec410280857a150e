//! Batch schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Time | Sum of batch durations |
//! | Sequential Time | Sum of all job print times (no batching) |
//! | Time Saved | Sequential time - total time |
//! | Avg Items | Mean jobs per batch |
//! | Avg Volume Fill | Mean batch volume / max_volume, fallback batches excluded |

use crate::models::{BatchSchedule, Constraints, PrintJob};

/// Batch schedule performance indicators.
#[derive(Debug, Clone)]
pub struct BatchKpi {
    /// Number of committed batches.
    pub batch_count: usize,
    /// Number of forced singleton batches.
    pub fallback_count: usize,
    /// Sum of batch durations.
    pub total_time: f64,
    /// Time to print every job one after another.
    pub sequential_time: f64,
    /// `sequential_time - total_time`.
    pub time_saved: f64,
    /// Mean number of jobs per batch.
    pub avg_items_per_batch: f64,
    /// Mean volume fill ratio of regular batches (0.0..1.0).
    pub avg_volume_fill: f64,
}

impl BatchKpi {
    /// Computes KPIs from a schedule and its input jobs.
    ///
    /// # Arguments
    /// * `schedule` - The committed batch schedule.
    /// * `jobs` - The input jobs (for individual print times).
    /// * `constraints` - The limits the schedule was built under.
    pub fn calculate(schedule: &BatchSchedule, jobs: &[PrintJob], constraints: &Constraints) -> Self {
        let batch_count = schedule.batch_count();
        let fallback_count = schedule.batches.iter().filter(|b| b.fallback).count();
        let sequential_time: f64 = jobs.iter().map(|j| j.print_time).sum();

        let avg_items_per_batch = if batch_count == 0 {
            0.0
        } else {
            schedule.job_count() as f64 / batch_count as f64
        };

        // Fill is undefined for a zero or unbounded plate.
        let regular = batch_count - fallback_count;
        let bounded = constraints.max_volume.is_finite() && constraints.max_volume > 0.0;
        let avg_volume_fill = if regular == 0 || !bounded {
            0.0
        } else {
            let sum: f64 = schedule
                .batches
                .iter()
                .filter(|b| !b.fallback)
                .map(|b| b.volume / constraints.max_volume)
                .sum();
            sum / regular as f64
        };

        Self {
            batch_count,
            fallback_count,
            total_time: schedule.total_time,
            sequential_time,
            time_saved: sequential_time - schedule.total_time,
            avg_items_per_batch,
            avg_volume_fill,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_total_time: f64, min_fill: f64) -> bool {
        self.total_time <= max_total_time && self.avg_volume_fill >= min_fill
    }
}
