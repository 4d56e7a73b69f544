//! Core types and math for `gesture-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Pt2`, `Vec2`),
//! - the planar similarity transform and its two-segment solver,
//! - raw touch samples and the resolver that turns them into anchor pairs.
//!
//! Gesture pipeline:
//! `raw sample -> resolve (filter + emulation) -> solve_similarity (pinning)`
//!
//! Everything here is pure and synchronous; frame-to-frame state lives in
//! `gesture-pipeline`.

/// Linear algebra type aliases and helpers.
pub mod math;
/// Touch resolution: transition suppression and single-finger emulation.
pub mod resolve;
/// Raw touch samples, occupancy patterns and anchor pairs.
pub mod touch;
/// Similarity transforms and the segment-to-segment solver.
pub mod transform;

pub use math::*;
pub use resolve::*;
pub use touch::*;
pub use transform::*;
