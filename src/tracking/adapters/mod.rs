//! Adapter implementations for the tracking ports.

pub mod memory;
