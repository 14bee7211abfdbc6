//! Task list and task tracking.
//!
//! Clients manage task lists, each holding tasks with a priority, a status
//! and an optional due date. The services enforce the business rules and
//! the mapper derives each list's task count and completion progress. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Transfer objects in [`dto`] and conversions in [`mapper`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
