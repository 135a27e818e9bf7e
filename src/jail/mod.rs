//! Imprisonment tracking.
//!
//! States per participant are Free and Confined(attempts). Release paths:
//! roll doubles, pay the fine, or spend a release card.

pub mod tracker;

pub use tracker::{JailRecord, JailTracker, ReleaseAttempt};
