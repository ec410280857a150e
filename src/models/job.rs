//! Print job model.
//!
//! A print job is a single unit of printer work: one part or model with a
//! build volume, a priority rank, and a print duration.

use serde::{Deserialize, Serialize};

/// A 3D-print job to be batched.
///
/// # Units
/// Volume and print time are unit-agnostic reals. The consumer picks the
/// units (e.g. cm³ and minutes) and uses them consistently with
/// [`Constraints`](super::Constraints).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Job identifier. Not required to be unique.
    pub id: String,
    /// Build volume consumed by this job.
    pub volume: f64,
    /// Scheduling priority (lower = printed earlier).
    pub priority: i32,
    /// Print duration.
    pub print_time: f64,
}

impl PrintJob {
    /// Creates a new print job.
    pub fn new(id: impl Into<String>, volume: f64, priority: i32, print_time: f64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether this job alone exceeds the given volume limit.
    pub fn exceeds_volume(&self, max_volume: f64) -> bool {
        self.volume > max_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = PrintJob::new("M1", 100.0, 1, 120.0);
        assert_eq!(job.id, "M1");
        assert!((job.volume - 100.0).abs() < 1e-10);
        assert_eq!(job.priority, 1);
        assert!((job.print_time - 120.0).abs() < 1e-10);
    }

    #[test]
    fn test_job_with_priority() {
        let job = PrintJob::new("M1", 100.0, 1, 120.0).with_priority(5);
        assert_eq!(job.priority, 5);
    }

    #[test]
    fn test_exceeds_volume() {
        let job = PrintJob::new("big", 350.0, 1, 60.0);
        assert!(job.exceeds_volume(300.0));
        assert!(!job.exceeds_volume(350.0));
    }

    #[test]
    fn test_job_json_fields() {
        let job: PrintJob = serde_json::from_str(
            r#"{"id": "M2", "volume": 150, "priority": 1, "print_time": 90}"#,
        )
        .unwrap();
        assert_eq!(job, PrintJob::new("M2", 150.0, 1, 90.0));
    }
}
