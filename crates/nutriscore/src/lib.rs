//! Personalized nutrition rating engine.
//!
//! The library is split into the pure scoring core (`rating`) and the ambient
//! service plumbing (`config`, `telemetry`, `error`). The engine itself holds
//! no shared mutable state: every rating call is an independent function of
//! the nutrient snapshot and the health profile supplied by the caller.

pub mod config;
pub mod error;
pub mod rating;
pub mod telemetry;
