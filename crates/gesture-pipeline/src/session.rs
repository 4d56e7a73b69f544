//! The frame update loop.

use anyhow::{Context, Result};
use gesture_core::{resolve, solve_similarity, AnchorPair, Similarity2, TouchSample};
use log::{debug, trace};

use crate::report::FrameReport;

/// Frame-to-frame state of one gesture stream.
///
/// Owns everything the update loop carries across frames: the previous
/// raw sample, the previous resolved pair, and the current transform
/// with its inverse. The transform and inverse are co-maintained: both
/// are recomputed (or both frozen) every frame, so they are exact
/// inverses at every frame boundary.
///
/// One session per independent gesture surface. [`GestureSession::step`]
/// takes `&mut self`, so calls on a single session are serialized by the
/// borrow checker; callers with multiple producers must wrap the session
/// in a lock.
#[derive(Debug, Clone)]
pub struct GestureSession {
    frame: u64,
    prev_sample: TouchSample,
    prev_resolved: Option<AnchorPair>,
    transform: Similarity2,
    inverse: Similarity2,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureSession {
    /// Fresh session: identity transform, no prior touches.
    pub fn new() -> Self {
        Self {
            frame: 0,
            prev_sample: TouchSample::empty(),
            prev_resolved: None,
            transform: Similarity2::identity(),
            inverse: Similarity2::identity(),
        }
    }

    /// Current world-to-screen transform.
    pub fn transform(&self) -> &Similarity2 {
        &self.transform
    }

    /// Current screen-to-world transform.
    pub fn inverse(&self) -> &Similarity2 {
        &self.inverse
    }

    /// Number of frames processed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Restore the initial state, keeping nothing from prior frames.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance one input frame.
    ///
    /// The transform only moves when both this frame and the previous
    /// one resolved to anchor pairs; otherwise it is frozen unchanged.
    /// When it moves, the world points that sat under the previous
    /// screen anchors are pinned under the new ones.
    ///
    /// An error means a resolved pair had coincident points (two fingers
    /// reported at the same coordinate), which leaves the similarity
    /// scale undefined. That is a defect in the input stream, not a
    /// recoverable condition; the transform and inverse are left
    /// untouched when it happens.
    pub fn step(&mut self, sample: TouchSample) -> Result<FrameReport> {
        self.frame += 1;
        let resolved = resolve(&sample, &self.prev_sample);

        if let (Some(now), Some(before)) = (resolved, self.prev_resolved) {
            // World anchors that were mapped to the previous screen points.
            let a = self.inverse.apply(&before.p1);
            let b = self.inverse.apply(&before.p2);

            let forward = solve_similarity(&a, &b, &now.p1, &now.p2)
                .with_context(|| format!("frame {}: forward transform update", self.frame))?;
            let backward = solve_similarity(&now.p1, &now.p2, &a, &b)
                .with_context(|| format!("frame {}: inverse transform update", self.frame))?;

            self.transform = forward;
            self.inverse = backward;
            trace!(
                "frame {}: pinned ({:.3} {:.3}) ({:.3} {:.3}) under new anchors",
                self.frame,
                a.x,
                a.y,
                b.x,
                b.y
            );
        } else {
            debug!("frame {}: no baseline, transform frozen", self.frame);
        }

        self.prev_sample = sample;
        self.prev_resolved = resolved;
        Ok(FrameReport::new(self.frame, sample, resolved, self.transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_core::{approx_eq, approx_eq_pt, Pt2, Vec2};
    use std::f64::consts::FRAC_PI_2;

    fn p(x: f64, y: f64) -> Pt2 {
        Pt2::new(x, y)
    }

    #[test]
    fn freeze_is_idempotent_across_unresolved_frames() {
        let mut session = GestureSession::new();
        session.step(TouchSample::only_first(p(1.0, 1.0))).unwrap();
        session.step(TouchSample::only_first(p(2.0, 1.0))).unwrap();
        let before = *session.transform();

        // Finger lifts, then nothing: both frames resolve to None.
        session.step(TouchSample::empty()).unwrap();
        assert!(session.transform().approx_eq(&before));
        session.step(TouchSample::empty()).unwrap();
        assert!(session.transform().approx_eq(&before));
    }

    #[test]
    fn first_resolved_frame_does_not_move_the_transform() {
        let mut session = GestureSession::new();
        let report = session
            .step(TouchSample::both(p(10.0, 10.0), p(20.0, 10.0)))
            .unwrap();
        assert!(report.resolved.is_some());
        assert!(session.transform().approx_eq(&Similarity2::identity()));
    }

    #[test]
    fn pinning_holds_world_anchors_under_fingers() {
        let mut session = GestureSession::new();
        session
            .step(TouchSample::both(p(0.0, 0.0), p(2.0, 0.0)))
            .unwrap();

        // The identity inverse puts the world anchors at the first
        // frame's screen points; after the pinch they must land on the
        // new screen points.
        let next = TouchSample::both(p(1.0, 1.0), p(5.0, 1.0));
        session.step(next).unwrap();
        let f = session.transform();
        assert!(approx_eq_pt(&f.apply(&p(0.0, 0.0)), &p(1.0, 1.0)));
        assert!(approx_eq_pt(&f.apply(&p(2.0, 0.0)), &p(5.0, 1.0)));
    }

    #[test]
    fn transform_and_inverse_stay_consistent() {
        let mut session = GestureSession::new();
        let samples = [
            TouchSample::both(p(0.0, 0.0), p(1.0, 0.0)),
            TouchSample::both(p(0.5, 0.5), p(1.0, 1.5)),
            TouchSample::both(p(1.0, 0.0), p(3.0, 2.0)),
        ];
        for sample in samples {
            session.step(sample).unwrap();
            let probe = p(0.7, -1.3);
            let round_trip = session.inverse().apply(&session.transform().apply(&probe));
            assert!(approx_eq_pt(&round_trip, &probe));
        }
    }

    #[test]
    fn single_finger_drag_is_pure_translation() {
        let mut session = GestureSession::new();
        let v = Vec2::new(0.25, -0.5);
        let mut pos = p(3.0, 4.0);
        session.step(TouchSample::only_first(pos)).unwrap();

        for _ in 0..5 {
            pos += v;
            session.step(TouchSample::only_first(pos)).unwrap();
            let f = session.transform();
            assert!(approx_eq(f.rotation, 0.0));
            assert!(approx_eq(f.scale, 1.0));
        }

        // The accumulated transform is exactly the drag vector.
        let moved = session.transform().apply(&p(3.0, 4.0));
        assert!(approx_eq_pt(&moved, &p(3.0 + 5.0 * 0.25, 4.0 - 5.0 * 0.5)));
    }

    #[test]
    fn finger_lift_suppresses_the_frame() {
        let mut session = GestureSession::new();
        session
            .step(TouchSample::both(p(0.0, 0.0), p(1.0, 0.0)))
            .unwrap();
        session
            .step(TouchSample::both(p(0.0, 0.0), p(2.0, 0.0)))
            .unwrap();
        let before = *session.transform();

        // Second finger lifts: ** -> *E is one of the suppressed pairs.
        let report = session.step(TouchSample::only_first(p(0.0, 0.0))).unwrap();
        assert!(report.resolved.is_none());
        assert!(session.transform().approx_eq(&before));
    }

    #[test]
    fn quarter_turn_pinch_rotates_the_world() {
        let mut session = GestureSession::new();
        session
            .step(TouchSample::both(p(0.0, 0.0), p(1.0, 0.0)))
            .unwrap();
        session
            .step(TouchSample::both(p(0.0, 0.0), p(0.0, 1.0)))
            .unwrap();

        let f = session.transform();
        assert!(approx_eq(f.rotation, FRAC_PI_2));
        assert!(approx_eq(f.scale, 1.0));
        assert!(approx_eq_pt(&f.apply(&p(1.0, 0.0)), &p(0.0, 1.0)));
    }

    #[test]
    fn coincident_fingers_error_out() {
        let mut session = GestureSession::new();
        let pinched = TouchSample::both(p(1.0, 1.0), p(1.0, 1.0));
        session.step(pinched).unwrap();
        assert!(session.step(pinched).is_err());
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut session = GestureSession::new();
        session
            .step(TouchSample::both(p(0.0, 0.0), p(1.0, 0.0)))
            .unwrap();
        session
            .step(TouchSample::both(p(2.0, 0.0), p(4.0, 0.0)))
            .unwrap();
        session.reset();
        assert_eq!(session.frame(), 0);
        assert!(session.transform().approx_eq(&Similarity2::identity()));
    }
}
