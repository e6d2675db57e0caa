//! Data Transfer Objects
//!
//! Request bodies sent to the Functions API and the JSON documents returned
//! by the function stub.

pub mod execution;
pub mod function;
