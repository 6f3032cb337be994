//! Infrastructure layer
//!
//! Concrete implementations of the outbound ports.

pub mod persistence;
pub mod synthetic;
