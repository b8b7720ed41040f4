//! Sequence plan for rendering a deck.
//!
//! The renderer places each slide as a sequence starting at its boundary and
//! lasting `duration_of` frames. The last slide uses the fallback length, so
//! the rendered composition is shorter than the interactive timeline, which
//! gives the last slide `trailing_frames` instead.

use serde::Serialize;

use super::Deck;
use crate::timeline::{Frame, TimelineIndex};

/// One slide placed on the render timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    pub index: usize,
    pub from: Frame,
    pub duration_in_frames: Frame,
    pub title: String,
}

impl Sequence {
    /// Length in seconds at `fps`.
    pub fn seconds(&self, fps: u32) -> f64 {
        self.duration_in_frames as f64 / fps.max(1) as f64
    }
}

/// Place every slide of `deck` on `timeline`.
pub fn sequence_plan(deck: &Deck, timeline: &TimelineIndex) -> Vec<Sequence> {
    deck.slides
        .iter()
        .enumerate()
        .filter_map(|(index, slide)| {
            Some(Sequence {
                index,
                from: timeline.boundary_of(index)?,
                duration_in_frames: timeline.duration_of(index)?,
                title: slide.title.clone(),
            })
        })
        .collect()
}

/// Total length of the rendered composition.
pub fn composition_length(timeline: &TimelineIndex) -> Frame {
    let last = timeline.len().saturating_sub(1);
    timeline
        .boundary_of(last)
        .unwrap_or(0)
        .saturating_add(timeline.duration_of(last).unwrap_or(0))
}
