//! Per-frame diagnostic report.
//!
//! Each call to [`crate::GestureSession::step`] returns a [`FrameReport`]
//! describing the frame: the raw sample, the resolved anchors (if any),
//! the committed transform, and the screen images of four fixed world
//! probe points. The `Display` rendering is a debugging aid, not a stable
//! protocol, but it is deterministic so golden-output tests can pin it.

use std::fmt;

use gesture_core::{AnchorPair, Pt2, Similarity2, TouchSample};
use serde::Serialize;

/// Fixed world-space probe points reported every frame: the corners of
/// the unit square.
pub fn probe_points() -> [Pt2; 4] {
    [
        Pt2::new(0.0, 0.0),
        Pt2::new(1.0, 0.0),
        Pt2::new(0.0, 1.0),
        Pt2::new(1.0, 1.0),
    ]
}

/// A world probe point and its image under the frame's transform.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProbeImage {
    /// World-space probe coordinate.
    pub world: Pt2,
    /// Its screen-space image under the frame's transform.
    pub screen: Pt2,
}

/// Diagnostic record for one processed input frame.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    /// 1-based index of the frame within the session.
    pub frame: u64,
    /// The raw sample fed into this frame.
    pub sample: TouchSample,
    /// The anchor pair the frame resolved to, if any.
    pub resolved: Option<AnchorPair>,
    /// The world-to-screen transform committed at the end of the frame.
    pub transform: Similarity2,
    /// Images of [`probe_points`] under [`FrameReport::transform`].
    pub probes: [ProbeImage; 4],
}

impl FrameReport {
    pub(crate) fn new(
        frame: u64,
        sample: TouchSample,
        resolved: Option<AnchorPair>,
        transform: Similarity2,
    ) -> Self {
        let probes = probe_points().map(|world| ProbeImage {
            world,
            screen: transform.apply(&world),
        });
        Self {
            frame,
            sample,
            resolved,
            transform,
            probes,
        }
    }
}

fn fmt_slot(f: &mut fmt::Formatter<'_>, slot: &Option<Pt2>) -> fmt::Result {
    match slot {
        Some(p) => write!(f, "({:.6} {:.6})", p.x, p.y),
        None => write!(f, "null"),
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== frame {} ====", self.frame)?;

        write!(f, "sample ")?;
        fmt_slot(f, &self.sample.first)?;
        write!(f, " ")?;
        fmt_slot(f, &self.sample.second)?;
        writeln!(f)?;

        match &self.resolved {
            Some(pair) => writeln!(
                f,
                "resolved ({:.6} {:.6}) ({:.6} {:.6})",
                pair.p1.x, pair.p1.y, pair.p2.x, pair.p2.y
            )?,
            None => writeln!(f, "resolved null")?,
        }

        for probe in &self.probes {
            writeln!(
                f,
                "world ({} {}) -> screen ({:.6} {:.6})",
                probe.world.x, probe.world.y, probe.screen.x, probe.screen.y
            )?;
        }
        Ok(())
    }
}
