//! Batch schedule (solution) model.
//!
//! A batch schedule is the ordered list of batches the scheduler committed.
//! Jobs in one batch print concurrently, so a batch lasts as long as its
//! slowest job and batches run back to back.

use serde::{Deserialize, Serialize};

use super::PrintJob;

/// The outcome of a scheduling call.
///
/// `print_order` lists job ids batch-major, job-minor. `total_time` is the
/// sum of per-batch durations, which equals the end time of the last batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSchedule {
    /// Job ids in commit order.
    pub print_order: Vec<String>,
    /// Sum of batch durations.
    pub total_time: f64,
    /// Committed batches in order.
    pub batches: Vec<Batch>,
}

/// A group of jobs printed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Zero-based batch number.
    pub sequence: usize,
    /// Member job ids in admission order.
    pub job_ids: Vec<String>,
    /// Input positions of the members, parallel to `job_ids`.
    pub positions: Vec<usize>,
    /// Summed volume of the members.
    pub volume: f64,
    /// Longest member print time.
    pub duration: f64,
    /// Time the batch starts.
    pub start_time: f64,
    /// Whether this is a forced singleton for a job that exceeds `max_volume`.
    pub fallback: bool,
}

impl Batch {
    /// Creates an empty batch starting at `start_time`.
    pub fn new(sequence: usize, start_time: f64) -> Self {
        Self {
            sequence,
            job_ids: Vec::new(),
            positions: Vec::new(),
            volume: 0.0,
            duration: 0.0,
            start_time,
            fallback: false,
        }
    }

    /// Marks the batch as a fallback singleton.
    pub fn as_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Adds a job found at `position` in the input.
    pub fn add_job(&mut self, job: &PrintJob, position: usize) {
        self.job_ids.push(job.id.clone());
        self.positions.push(position);
        self.volume += job.volume;
        self.duration = self.duration.max(job.print_time);
    }

    /// Time the batch finishes.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Number of jobs in the batch.
    pub fn item_count(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch has no jobs.
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }

    /// Whether the batch contains a job with the given id.
    pub fn contains(&self, job_id: &str) -> bool {
        self.job_ids.iter().any(|id| id == job_id)
    }
}

impl BatchSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a batch: appends its ids to the print order and its
    /// duration to the total.
    pub fn add_batch(&mut self, batch: Batch) {
        self.print_order.extend(batch.job_ids.iter().cloned());
        self.total_time += batch.duration;
        self.batches.push(batch);
    }

    /// Time at which the next batch would start.
    pub fn next_start_time(&self) -> f64 {
        self.batches.last().map(Batch::end_time).unwrap_or(0.0)
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.print_order.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// First batch containing a job with the given id.
    pub fn batch_of_job(&self, job_id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.contains(job_id))
    }

    /// Batches forced by the oversized-job fallback.
    pub fn fallback_batches(&self) -> Vec<&Batch> {
        self.batches.iter().filter(|b| b.fallback).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> BatchSchedule {
        let mut s = BatchSchedule::new();

        let mut b0 = Batch::new(0, 0.0);
        b0.add_job(&PrintJob::new("M1", 100.0, 1, 120.0), 0);
        b0.add_job(&PrintJob::new("M2", 150.0, 1, 90.0), 1);
        s.add_batch(b0);

        let mut b1 = Batch::new(1, s.next_start_time()).as_fallback();
        b1.add_job(&PrintJob::new("XL", 500.0, 2, 200.0), 2);
        s.add_batch(b1);
        s
    }

    #[test]
    fn test_batch_accumulates() {
        let mut b = Batch::new(0, 10.0);
        assert!(b.is_empty());
        b.add_job(&PrintJob::new("A", 100.0, 1, 120.0), 3);
        b.add_job(&PrintJob::new("B", 50.0, 1, 150.0), 0);

        assert_eq!(b.item_count(), 2);
        assert_eq!(b.positions, vec![3, 0]);
        assert!((b.volume - 150.0).abs() < 1e-10);
        assert!((b.duration - 150.0).abs() < 1e-10);
        assert!((b.end_time() - 160.0).abs() < 1e-10);
    }

    #[test]
    fn test_schedule_totals() {
        let s = sample_schedule();
        assert_eq!(s.print_order, vec!["M1", "M2", "XL"]);
        assert!((s.total_time - 320.0).abs() < 1e-10);
        assert!((s.next_start_time() - s.total_time).abs() < 1e-10);
        assert_eq!(s.batch_count(), 2);
        assert_eq!(s.job_count(), 3);
    }

    #[test]
    fn test_batch_timeline() {
        let s = sample_schedule();
        assert!((s.batches[1].start_time - 120.0).abs() < 1e-10);
        assert!((s.batches[1].end_time() - 320.0).abs() < 1e-10);
    }

    #[test]
    fn test_batch_of_job() {
        let s = sample_schedule();
        assert_eq!(s.batch_of_job("M2").map(|b| b.sequence), Some(0));
        assert_eq!(s.batch_of_job("XL").map(|b| b.sequence), Some(1));
        assert!(s.batch_of_job("M9").is_none());
    }

    #[test]
    fn test_fallback_batches() {
        let s = sample_schedule();
        let fallback = s.fallback_batches();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].job_ids, vec!["XL"]);
    }

    #[test]
    fn test_empty_schedule() {
        let s = BatchSchedule::new();
        assert!(s.is_empty());
        assert_eq!(s.job_count(), 0);
        assert!((s.total_time - 0.0).abs() < 1e-10);
        assert!((s.next_start_time() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_schedule_json_shape() {
        let value = serde_json::to_value(sample_schedule()).unwrap();
        assert_eq!(value["print_order"][2], "XL");
        assert_eq!(value["total_time"], 320.0);
        assert_eq!(value["batches"][1]["fallback"], true);
    }
}
