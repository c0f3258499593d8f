//! Simulation core for a single-screen fixed-shooter.
//!
//! The library holds everything with design substance: entity data, the
//! spawning policy, the per-tick update, and the input command surface.
//! Terminal rendering and keyboard wiring live in the binary and only ever
//! read the state exposed here.

pub mod compute;
pub mod config;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod spawn;
