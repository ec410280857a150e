//! Batch scheduling domain models.
//!
//! Provides the data types for a capacity-constrained batching problem
//! and its solution.
//!
//! # Domain Mappings
//!
//! | u-batch | 3D Printing | Laboratory | Kilns / Ovens |
//! |---------|-------------|------------|---------------|
//! | PrintJob | Part / Model | Sample | Load item |
//! | Constraints | Build plate | Rack | Chamber |
//! | Batch | Print run | Assay run | Firing |
//! | BatchSchedule | Print queue | Run plan | Firing plan |

mod constraints;
mod job;
mod schedule;

pub use constraints::Constraints;
pub use job::PrintJob;
pub use schedule::{Batch, BatchSchedule};
