//! Procedural generation for the city: building seeds, palettes, fixed
//! placements and the collision footprint of every building.

pub mod city;

pub use city::*;
