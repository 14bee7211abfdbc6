//! Step definitions for task tracking behaviour scenarios.

pub mod then;
pub mod when;
pub mod world;
