use thiserror::Error;

/// Rejected pacing parameters.
///
/// Validation happens while constructing a [Pacing](crate::Pacing), before
/// any task is scheduled.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingError {
    #[error("'max_in_flight' must be at least 1.")]
    ZeroInFlight,
}
