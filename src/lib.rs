//! Run bursts of async work without tripping a rate limit.
//!
//! [run_paced] takes a fixed list of fallible futures and works through it in
//! slices: at most [max_in_flight](Pacing::max_in_flight) tasks run at once,
//! and after each slice the scheduler rests for [delay](Pacing::delay) before
//! starting the next. Results come back in submission order no matter which
//! task finishes first.
//!
//! This is meant for fanning a burst of outbound calls (pinging a list of
//! hosts, hitting a chat platform's API for every guild) out against a fixed
//! quota like "20 requests per minute", without hand-rolling the batching at
//! every call site.
//!
//! Use [run_paced] to bail with the first failure once the whole run has
//! drained, or [run_paced_settled] to get every task's [Outcome] and sort
//! through the failures yourself.

mod batch;
mod error;
mod gate;
mod pacing;

pub use batch::run_paced;
pub use batch::run_paced_settled;
pub use batch::Outcome;
pub use error::PacingError;
pub use pacing::Pacing;
