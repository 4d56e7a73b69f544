//! Touch resolution: transition suppression and single-finger emulation.
//!
//! [`resolve`] decides whether the current raw sample yields a usable
//! anchor pair for this frame. Any change in which fingers are down
//! between consecutive frames discards the frame as a baseline, so slot
//! reassignment never masquerades as motion.

use crate::math::Vec2;
use crate::touch::{AnchorPair, Occupancy, TouchSample};

/// Resolve the current raw sample into this frame's anchor pair.
///
/// Returns `None` when no valid baseline exists: either no finger is
/// down, or the occupancy pattern changed since the previous frame.
/// Suppressed transitions are exactly the pairs where the previous and
/// current patterns are both non-empty but differ (lift one of two, add
/// a second, or swap which slot is down). A first touch after a fully
/// empty frame is not suppressed; the frame loop still waits for a
/// second consecutive resolution before moving the transform.
///
/// When only one slot is occupied the missing finger is synthesized one
/// unit along +x from the real one. The emulated segment has fixed
/// length and orientation relative to the real point, so a lone drag
/// solves as a pure translation (scale 1, rotation 0). The offset value
/// is inherited from the reference pipeline and must not change.
pub fn resolve(current: &TouchSample, previous: &TouchSample) -> Option<AnchorPair> {
    let now = current.occupancy();
    if now == Occupancy::Empty {
        return None;
    }

    let before = previous.occupancy();
    if before != Occupancy::Empty && before != now {
        return None;
    }

    match (current.first, current.second) {
        (Some(p1), Some(p2)) => Some(AnchorPair::new(p1, p2)),
        (Some(p1), None) => Some(AnchorPair::new(p1, p1 + Vec2::new(1.0, 0.0))),
        (None, Some(p2)) => Some(AnchorPair::new(p2 + Vec2::new(1.0, 0.0), p2)),
        // Empty was handled above; the arm keeps the match total.
        (None, None) => None,
    }
}
