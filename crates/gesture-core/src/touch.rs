//! Raw touch samples, occupancy patterns and resolved anchor pairs.

use serde::{Deserialize, Serialize};

use crate::math::Pt2;

/// One frame of raw input from the touch device: two finger slots, each
/// either touching at a point or absent.
///
/// Slot identity (first vs second) matters and is assigned by the input
/// source, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchSample {
    /// First finger slot, `None` while not touching.
    pub first: Option<Pt2>,
    /// Second finger slot, `None` while not touching.
    pub second: Option<Pt2>,
}

impl TouchSample {
    /// Sample with no finger touching.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sample with only the first slot occupied.
    pub fn only_first(p: Pt2) -> Self {
        Self {
            first: Some(p),
            second: None,
        }
    }

    /// Sample with only the second slot occupied.
    pub fn only_second(p: Pt2) -> Self {
        Self {
            first: None,
            second: Some(p),
        }
    }

    /// Sample with both slots occupied.
    pub fn both(p1: Pt2, p2: Pt2) -> Self {
        Self {
            first: Some(p1),
            second: Some(p2),
        }
    }

    /// Slot-occupancy pattern of this sample.
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::of(self)
    }
}

/// Which finger slots are occupied in a [`TouchSample`].
///
/// A closed classification over the four possible slot combinations. The
/// transition filter compares patterns across consecutive frames, and
/// matching on this enum keeps the "no fingers" case explicit instead of
/// leaving an unreachable branch to a runtime assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupancy {
    /// Neither slot touching.
    Empty,
    /// Only the first slot touching.
    FirstOnly,
    /// Only the second slot touching.
    SecondOnly,
    /// Both slots touching.
    Both,
}

impl Occupancy {
    /// Classify a sample's slots.
    pub fn of(sample: &TouchSample) -> Self {
        match (sample.first, sample.second) {
            (None, None) => Occupancy::Empty,
            (Some(_), None) => Occupancy::FirstOnly,
            (None, Some(_)) => Occupancy::SecondOnly,
            (Some(_), Some(_)) => Occupancy::Both,
        }
    }
}

/// The two concrete screen points used as this frame's transform anchors.
///
/// Produced by [`crate::resolve::resolve`]; a frame with no valid anchor
/// pair is represented as `Option::<AnchorPair>::None`, which is a normal
/// steady state and never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPair {
    /// First anchor, in slot order.
    pub p1: Pt2,
    /// Second anchor, in slot order.
    pub p2: Pt2,
}

impl AnchorPair {
    pub fn new(p1: Pt2, p2: Pt2) -> Self {
        Self { p1, p2 }
    }
}
