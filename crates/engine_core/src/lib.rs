//! Core engine types and utilities for Heli City.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Scoped transform composition (push/pop matrix stack)
//! - Simulation clock with pause and time scaling
//! - Small shared value types (colours, lifetimes)

pub mod components;
pub mod time;
pub mod transform;

pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Vec2, Vec3, Vec4};
