//! Core domain types
//!
//! Records owned by the remote Functions platform. The harness only ever
//! observes snapshots of them.

pub mod execution;
