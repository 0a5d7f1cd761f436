//! Error types for system construction, stepping and I/O

use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("body `{label}` has non-positive mass {mass}")]
    NonPositiveMass { label: String, mass: f64 },

    #[error("body `{label}` has a non-finite {field} component")]
    NonFiniteComponent { label: String, field: &'static str },

    #[error("duplicate body label `{0}`")]
    DuplicateLabel(String),

    #[error("time step must be nonzero and finite, got {0}")]
    InvalidStep(f64),

    #[error("projection scale must be positive and finite, got {0}")]
    InvalidScale(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SimError {
    /// True for errors raised while validating body descriptors.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            SimError::NonPositiveMass { .. }
                | SimError::NonFiniteComponent { .. }
                | SimError::DuplicateLabel(_)
        )
    }
}
