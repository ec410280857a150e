//! Scheduling error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by scheduling entry points.
///
/// Scheduling itself cannot fail once its input validates; every variant
/// describes rejected input.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid scheduling input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScheduleError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            Self::Json(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Constraints, PrintJob};
    use crate::validation::validate_input;

    #[test]
    fn test_validation_display() {
        let jobs = vec![PrintJob::new("bad", -1.0, 1, 10.0)];
        let err: ScheduleError = validate_input(&jobs, &Constraints::new(300.0, 0))
            .unwrap_err()
            .into();

        let text = err.to_string();
        assert!(text.starts_with("invalid scheduling input: "));
        assert!(text.contains("max_items"));
        assert!(text.contains("'bad'"));
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_json_error() {
        let err: ScheduleError = serde_json::from_str::<Constraints>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("malformed request: "));
        assert!(err.validation_errors().is_empty());
    }
}
