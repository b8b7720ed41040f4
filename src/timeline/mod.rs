//! Frame timeline indexed by slide.
//!
//! A `TimelineIndex` is the ordered table of slide start frames for one deck,
//! plus the total playable length. It answers three questions: where does a
//! slide start, how long does it last, and which slide owns a given frame.
//!
//! Slides are half-open ranges `[boundary_i, boundary_{i+1})`; the last slide
//! runs until `total_duration`.

/// Timeline position, in frames.
pub type Frame = u32;

/// Fallback length of the last slide when no following boundary exists.
pub const DEFAULT_FALLBACK_FRAMES: Frame = 120;

/// Errors raised when a boundary table is not a valid timeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    #[error("Timeline has no slides")]
    Empty,

    #[error("First slide must start at frame 0 (found {found})")]
    FirstNotZero { found: Frame },

    #[error("Slide {index} starts at frame {found}, before the previous slide ({previous})")]
    Decreasing {
        index: usize,
        previous: Frame,
        found: Frame,
    },

    #[error("Trailing slide length must be at least one frame")]
    NoTrailingFrames,
}

/// Immutable table of slide boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineIndex {
    boundaries: Vec<Frame>,
    total_duration: Frame,
    fallback_duration: Frame,
}

impl TimelineIndex {
    /// Build an index from slide start frames.
    ///
    /// `trailing_frames` is the length of the last slide; the total duration
    /// is `last boundary + trailing_frames`.
    pub fn new(boundaries: Vec<Frame>, trailing_frames: Frame) -> Result<Self, TimelineError> {
        let first = *boundaries.first().ok_or(TimelineError::Empty)?;
        if first != 0 {
            return Err(TimelineError::FirstNotZero { found: first });
        }
        if let Some(index) = boundaries.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(TimelineError::Decreasing {
                index: index + 1,
                previous: boundaries[index],
                found: boundaries[index + 1],
            });
        }
        if trailing_frames == 0 {
            return Err(TimelineError::NoTrailingFrames);
        }

        let last = boundaries[boundaries.len() - 1];
        Ok(Self {
            total_duration: last.saturating_add(trailing_frames),
            boundaries,
            fallback_duration: DEFAULT_FALLBACK_FRAMES,
        })
    }

    /// Override the duration reported for the last slide by `duration_of`.
    pub fn with_fallback_duration(mut self, frames: Frame) -> Self {
        self.fallback_duration = frames;
        self
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Always false for a constructed index; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Total playable frame count.
    pub fn total_duration(&self) -> Frame {
        self.total_duration
    }

    /// Length reported for the last slide by `duration_of`.
    pub fn fallback_duration(&self) -> Frame {
        self.fallback_duration
    }

    pub fn boundaries(&self) -> &[Frame] {
        &self.boundaries
    }

    /// First frame of a slide.
    pub fn boundary_of(&self, slide: usize) -> Option<Frame> {
        self.boundaries.get(slide).copied()
    }

    /// First frame past the end of a slide (next boundary or total duration).
    fn end_of(&self, slide: usize) -> Frame {
        self.boundaries
            .get(slide + 1)
            .copied()
            .unwrap_or(self.total_duration)
    }

    /// Half-open frame range covered by a slide.
    pub fn slide_range(&self, slide: usize) -> Option<std::ops::Range<Frame>> {
        let start = self.boundary_of(slide)?;
        Some(start..self.end_of(slide))
    }

    /// Declared length of a slide.
    ///
    /// Uses the distance to the next boundary, or the fallback duration for the
    /// last slide. This feeds sequence annotations, not playback.
    pub fn duration_of(&self, slide: usize) -> Option<Frame> {
        let start = self.boundary_of(slide)?;
        Some(match self.boundaries.get(slide + 1) {
            Some(&next) => next - start,
            None => self.fallback_duration,
        })
    }

    /// Slide whose range contains `frame`, or `None` past the end.
    ///
    /// With repeated boundaries the empty ranges are skipped, so the result is
    /// the smallest index whose range actually holds the frame.
    pub fn slide_index_at_frame(&self, frame: Frame) -> Option<usize> {
        if frame >= self.total_duration {
            return None;
        }
        // Last slide starting at or before `frame`; boundaries[0] == 0 so this is >= 1.
        let after = self.boundaries.partition_point(|&start| start <= frame);
        Some(after - 1)
    }

    /// Last frame of a slide: where bounded playback of that slide stops.
    pub fn auto_stop_frame_for(&self, slide: usize) -> Option<Frame> {
        self.boundary_of(slide)?;
        Some(self.end_of(slide).saturating_sub(1))
    }
}
