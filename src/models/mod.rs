//! Data models for the forum backend.
//!
//! JSON field names are camelCase on the wire.

mod topic;

pub use topic::*;
