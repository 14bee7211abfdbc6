//! Tasktrack: task list and task tracking core.
//!
//! This crate provides the domain service layer of a task-tracking backend:
//! validating and orchestrating task list and task operations, and mapping
//! entities to the transfer shapes exposed by an HTTP layer.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`tracking`]: Task lists, tasks, mapping and services
//! - [`telemetry`]: Tracing subscriber setup

pub mod telemetry;
pub mod tracking;
