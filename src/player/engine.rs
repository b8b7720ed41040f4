//! Wall-clock frame player.
//!
//! `ClockPlayer` advances a frame cursor at the deck's frame rate and reports
//! progress through an `EventBus`. It is the concrete player the terminal UI
//! drives; the controller only sees it through `PlayerHandle`.
//!
//! Time is injected with `tick(now)`: the cursor position is derived from the
//! anchor set on the last seek/play, so skipped ticks never drift.

use std::time::Instant;

use crate::player::handle::{EventBus, ListenerId, PlayerEvent, PlayerHandle};
use crate::timeline::Frame;

/// Slowest playback rate accepted by `set_rate`.
pub const MIN_RATE: f64 = 0.25;
/// Fastest playback rate accepted by `set_rate`.
pub const MAX_RATE: f64 = 4.0;

/// Whether `rate` is a usable playback speed (finite, within the rate limits).
pub fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && (MIN_RATE..=MAX_RATE).contains(&rate)
}

/// Frame cursor driven by wall-clock time.
#[derive(Debug)]
pub struct ClockPlayer {
    fps: u32,
    duration_in_frames: Frame,
    frame: Frame,
    playing: bool,
    rate: f64,
    /// Latest time seen by `tick`; seek/play anchor here.
    now: Instant,
    /// Wall time and frame when the cursor was last anchored
    anchor_time: Instant,
    anchor_frame: Frame,
    events: EventBus,
}

impl ClockPlayer {
    /// Create a paused player parked on frame 0.
    ///
    /// # Arguments
    /// * `fps` - Frames per second (clamped to at least 1)
    /// * `duration_in_frames` - Timeline length (clamped to at least 1)
    /// * `now` - Current wall time
    pub fn new(fps: u32, duration_in_frames: Frame, now: Instant) -> Self {
        Self {
            fps: fps.max(1),
            duration_in_frames: duration_in_frames.max(1),
            frame: 0,
            playing: false,
            rate: 1.0,
            now,
            anchor_time: now,
            anchor_frame: 0,
            events: EventBus::new(),
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn duration_in_frames(&self) -> Frame {
        self.duration_in_frames
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    fn last_frame(&self) -> Frame {
        self.duration_in_frames - 1
    }

    fn reanchor(&mut self) {
        self.anchor_time = self.now;
        self.anchor_frame = self.frame;
    }

    /// Change playback speed, keeping the current frame.
    ///
    /// Out-of-range rates are clamped; NaN and infinities are ignored.
    pub fn set_rate(&mut self, rate: f64) {
        if !rate.is_finite() {
            tracing::warn!(rate, "ignoring non-finite playback rate");
            return;
        }
        self.reanchor();
        self.rate = rate.clamp(MIN_RATE, MAX_RATE);
    }

    /// Increase playback speed by 1.5x (capped).
    pub fn speed_up(&mut self) {
        self.set_rate(self.rate * 1.5);
    }

    /// Decrease playback speed by 1.5x (floored).
    pub fn speed_down(&mut self) {
        self.set_rate(self.rate / 1.5);
    }

    /// Advance the cursor to wall time `now`.
    ///
    /// Emits `FrameUpdate` when the frame changes. On reaching the last frame
    /// the player stops on its own and emits `Pause`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        if !self.playing {
            return;
        }

        let elapsed = now.saturating_duration_since(self.anchor_time).as_secs_f64();
        let advanced = (elapsed * self.fps as f64 * self.rate) as u64;
        let target = (self.anchor_frame as u64 + advanced).min(self.last_frame() as u64) as Frame;

        if target != self.frame {
            self.frame = target;
            self.events.emit(PlayerEvent::FrameUpdate { frame: target });
        }

        if self.frame == self.last_frame() {
            self.playing = false;
            self.reanchor();
            self.events.emit(PlayerEvent::Pause);
        }
    }
}

impl PlayerHandle for ClockPlayer {
    fn seek_to(&mut self, frame: Frame) {
        self.frame = frame.min(self.last_frame());
        self.reanchor();
        self.events.emit(PlayerEvent::FrameUpdate { frame: self.frame });
    }

    fn play(&mut self) {
        if self.playing {
            return;
        }
        if self.frame == self.last_frame() {
            // Parked at the end: start over
            self.frame = 0;
            self.events.emit(PlayerEvent::FrameUpdate { frame: 0 });
        }
        self.playing = true;
        self.reanchor();
        self.events.emit(PlayerEvent::Play);
    }

    fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.reanchor();
        self.events.emit(PlayerEvent::Pause);
    }

    fn add_listener(&mut self) -> ListenerId {
        self.events.add_listener()
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.remove_listener(id)
    }

    fn next_event(&mut self, id: ListenerId) -> Option<PlayerEvent> {
        self.events.next_event(id)
    }
}
