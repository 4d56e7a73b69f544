//! Gesture session framework.
//!
//! This crate owns the frame-to-frame state of the gesture pipeline:
//!
//! ## API: Mutable State Container
//!
//! A [`GestureSession`] is an explicit value owned by the caller, one per
//! independent gesture surface. Feeding it one raw sample per input frame
//! advances the world-to-screen transform in place:
//!
//! ```
//! use gesture_core::{Pt2, TouchSample};
//! use gesture_pipeline::GestureSession;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut session = GestureSession::new();
//! let report = session.step(TouchSample::only_first(Pt2::new(4.0, 2.0)))?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! The session performs no I/O of its own; each step returns a
//! [`FrameReport`] and the host decides what to do with it.

/// Per-frame diagnostic report.
pub mod report;
/// The frame update loop.
pub mod session;

pub use report::{probe_points, FrameReport, ProbeImage};
pub use session::GestureSession;
