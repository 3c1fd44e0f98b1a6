// Raidwatch: raid engagement verification for X/Twitter communities.
//
// This is the library root. Each module corresponds to a major subsystem
// of the verification pipeline.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod output;
pub mod twitter;
pub mod verify;
