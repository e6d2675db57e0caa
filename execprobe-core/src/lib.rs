//! Execprobe Core
//!
//! Shared types for the execution polling harness.
//!
//! This crate contains:
//! - Domain types: the execution record as the Functions API reports it
//! - DTOs: invocation requests and the payloads served by the function stub

pub mod domain;
pub mod dto;
