//! Lightweight kinematics for Heli City: world bounds, building floor
//! queries and ballistic crate integration.
//!
//! There is no rigid-body solver here. Movement is explicit Euler with
//! per-axis rejection against [`WorldLimits`].

pub mod ballistics;
pub mod limits;

pub use ballistics::*;
pub use limits::*;
