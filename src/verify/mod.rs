// Verification pipeline — classification and the rate-limited batch
// coordinator.

pub mod batch;
pub mod classify;
pub mod pacing;

pub use batch::RaidVerifier;
