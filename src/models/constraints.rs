//! Printer capacity constraints.
//!
//! Every batch the scheduler forms is bounded by two simultaneous limits:
//! the combined build volume of its jobs and the number of jobs in it.

use serde::{Deserialize, Serialize};

/// Per-batch capacity limits of a printer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Upper bound on the summed volume of a batch.
    /// `f64::INFINITY` means unbounded.
    pub max_volume: f64,
    /// Upper bound on the number of jobs in a batch (must be at least 1).
    pub max_items: usize,
}

impl Constraints {
    /// Creates a constraint record.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Whether a batch with `items` jobs and `volume` total volume fits.
    #[inline]
    pub fn admits(&self, items: usize, volume: f64) -> bool {
        items <= self.max_items && volume <= self.max_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits() {
        let c = Constraints::new(300.0, 2);
        assert!(c.admits(2, 300.0));
        assert!(c.admits(1, 0.0));
        assert!(!c.admits(3, 100.0));
        assert!(!c.admits(1, 300.5));
    }

    #[test]
    fn test_unbounded_volume() {
        let c = Constraints::new(f64::INFINITY, 4);
        assert!(c.admits(4, 1e12));
    }

    #[test]
    fn test_constraints_json_fields() {
        let c: Constraints =
            serde_json::from_str(r#"{"max_volume": 300, "max_items": 2}"#).unwrap();
        assert_eq!(c, Constraints::new(300.0, 2));
    }
}
