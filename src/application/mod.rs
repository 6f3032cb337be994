//! Application layer
//!
//! Orchestrates dashboard queries and carries the view DTOs.

pub mod dto;
pub mod queries;

pub use queries::DashboardService;
