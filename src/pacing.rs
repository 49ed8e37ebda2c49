//! Quota settings for a paced run.

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::error::PacingError;

/// How fast a paced run is allowed to go.
///
/// Up to [max_in_flight](Self::max_in_flight) tasks run concurrently, then the
/// scheduler rests for [delay](Self::delay) before dispatching the next slice.
/// A quota of "20 requests per minute" is `Pacing::new(20, Duration::from_secs(60))`.
///
/// Serializes to a plain table, so callers can keep their quotas next to the
/// rest of their config file. Deserialized values go through [Pacing::new],
/// so the validation can't be skipped by loading from a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPacing", into = "RawPacing")]
pub struct Pacing {
    max_in_flight: usize,
    delay: Duration,
}

#[bon::bon]
impl Pacing {
    /// Checks the given parameters and constructs a [Pacing].
    ///
    /// A `max_in_flight` of zero could never admit a task and is rejected.
    #[builder(expose_positional_fn = new)]
    pub fn new(max_in_flight: usize, delay: Duration) -> Result<Self, PacingError> {
        if max_in_flight == 0 {
            return Err(PacingError::ZeroInFlight);
        }

        Ok(Self {
            max_in_flight,
            delay,
        })
    }

    /// Maximum number of tasks allowed in flight at any instant.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    /// Rest inserted between one slice finishing and the next starting.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// The on-file shape of [Pacing]. Omitting `delay` means no rest between
/// slices.
#[derive(Debug, Serialize, Deserialize)]
struct RawPacing {
    max_in_flight: usize,
    #[serde(default)]
    delay: Duration,
}

impl TryFrom<RawPacing> for Pacing {
    type Error = PacingError;

    fn try_from(raw: RawPacing) -> Result<Self, Self::Error> {
        Pacing::new(raw.max_in_flight, raw.delay)
    }
}

impl From<Pacing> for RawPacing {
    fn from(pacing: Pacing) -> Self {
        Self {
            max_in_flight: pacing.max_in_flight,
            delay: pacing.delay,
        }
    }
}
