//! Rendering contract for Heli City.
//!
//! The simulation never talks to a GPU directly. It poses parts through a
//! transform stack and hands each one to a [`PrimitiveRenderer`], either a
//! real backend or the recording [`DrawList`].

pub mod camera;
pub mod draw_list;
pub mod primitive;

pub use camera::*;
pub use draw_list::*;
pub use primitive::*;
