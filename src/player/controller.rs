//! Slide navigation and playback synchronization.
//!
//! `PlaybackController` maps a continuous frame timeline onto discrete slides.
//! Navigation seeks the external player to a slide's first frame, resumes
//! playback, and arms an auto-stop at the slide's last frame. Frame updates
//! coming back from the player are checked against that auto-stop; when it is
//! reached the controller pauses the player and re-derives the current slide
//! from the frame where playback actually stopped.
//!
//! # State
//!
//! - `current_slide`: index reported as active, always `< slide_count()`
//! - `is_playing`: mirror of the player's real play/pause status
//! - `auto_stop`: armed stop frame, or `None` for free playback
//!
//! `current_slide` and `auto_stop` change together, only in `seek_to_slide`
//! and in auto-stop reconciliation. `is_playing` changes in `toggle_play` and
//! whenever the player reports a play/pause of its own.
//!
//! # Player attachment
//!
//! The player is attached after construction and detached exactly once, on
//! `detach` or on drop. Operations issued while detached still update the
//! controller's state but send nothing to the player.

use crate::player::handle::{ListenerId, PlayerEvent, PlayerHandle};
use crate::timeline::{Frame, TimelineIndex};

/// Coarse playback state derived from `is_playing` and `auto_stop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Not playing. An armed auto-stop may still be pending.
    Paused,
    /// Playing with no stop point.
    FreePlay,
    /// Playing toward the end of the current slide.
    Bounded { stop_at: Frame },
}

#[derive(Debug)]
struct Attachment<P> {
    player: P,
    listener: ListenerId,
}

/// Controller driving one player over one timeline.
#[derive(Debug)]
pub struct PlaybackController<P: PlayerHandle> {
    timeline: TimelineIndex,
    current_slide: usize,
    is_playing: bool,
    auto_stop: Option<Frame>,
    attachment: Option<Attachment<P>>,
}

impl<P: PlayerHandle> PlaybackController<P> {
    /// Create a detached controller on slide 0, paused.
    pub fn new(timeline: TimelineIndex) -> Self {
        Self {
            timeline,
            current_slide: 0,
            is_playing: false,
            auto_stop: None,
            attachment: None,
        }
    }

    // === Attachment ===

    /// Attach a player and register for its events.
    ///
    /// Any previously attached player is detached first and returned.
    pub fn attach(&mut self, mut player: P) -> Option<P> {
        let previous = self.detach();
        let listener = player.add_listener();
        tracing::debug!(?listener, "player attached");
        self.attachment = Some(Attachment { player, listener });
        previous
    }

    /// Deregister from the attached player and hand it back.
    pub fn detach(&mut self) -> Option<P> {
        let Attachment {
            mut player,
            listener,
        } = self.attachment.take()?;
        player.remove_listener(listener);
        tracing::debug!(?listener, "player detached");
        Some(player)
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    pub fn player(&self) -> Option<&P> {
        self.attachment.as_ref().map(|a| &a.player)
    }

    pub fn player_mut(&mut self) -> Option<&mut P> {
        self.attachment.as_mut().map(|a| &mut a.player)
    }

    fn with_player(&mut self, command: impl FnOnce(&mut P)) {
        if let Some(attachment) = self.attachment.as_mut() {
            command(&mut attachment.player);
        }
    }

    // === Observable state ===

    pub fn timeline(&self) -> &TimelineIndex {
        &self.timeline
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn auto_stop_frame(&self) -> Option<Frame> {
        self.auto_stop
    }

    pub fn phase(&self) -> PlaybackPhase {
        match (self.is_playing, self.auto_stop) {
            (false, _) => PlaybackPhase::Paused,
            (true, None) => PlaybackPhase::FreePlay,
            (true, Some(stop_at)) => PlaybackPhase::Bounded { stop_at },
        }
    }

    // === Navigation ===

    /// Seek to the start of a slide and play it through to its last frame.
    ///
    /// Out-of-range indices are ignored. Seeking to the current slide replays
    /// it. Returns whether the seek was applied.
    pub fn seek_to_slide(&mut self, index: usize) -> bool {
        let (Some(target), Some(stop_at)) = (
            self.timeline.boundary_of(index),
            self.timeline.auto_stop_frame_for(index),
        ) else {
            tracing::trace!(index, "seek ignored: slide out of range");
            return false;
        };

        self.current_slide = index;
        self.with_player(|player| player.seek_to(target));
        self.auto_stop = Some(stop_at);
        self.with_player(|player| player.play());
        self.is_playing = true;

        tracing::debug!(slide = index, target, stop_at, "seek to slide");
        true
    }

    pub fn next_slide(&mut self) -> bool {
        self.seek_to_slide(self.current_slide + 1)
    }

    pub fn prev_slide(&mut self) -> bool {
        match self.current_slide.checked_sub(1) {
            Some(index) => self.seek_to_slide(index),
            None => false,
        }
    }

    pub fn first_slide(&mut self) -> bool {
        self.seek_to_slide(0)
    }

    pub fn last_slide(&mut self) -> bool {
        self.seek_to_slide(self.slide_count() - 1)
    }

    pub fn replay_slide(&mut self) -> bool {
        self.seek_to_slide(self.current_slide)
    }

    /// Pause, or resume as free playback.
    ///
    /// Pausing keeps any armed auto-stop. Resuming always clears it: manual
    /// play runs on past the slide it resumed from.
    pub fn toggle_play(&mut self) {
        if self.is_playing {
            self.with_player(|player| player.pause());
            self.is_playing = false;
            tracing::debug!(auto_stop = ?self.auto_stop, "paused");
        } else {
            self.auto_stop = None;
            self.with_player(|player| player.play());
            self.is_playing = true;
            tracing::debug!("resumed free playback");
        }
    }

    // === Event reconciliation ===

    /// Check a reported frame against the armed auto-stop.
    ///
    /// Uses "reached or passed" since updates may skip frames. On stop the
    /// slide is recomputed from the reported frame; a lookup miss keeps the
    /// previous slide.
    pub fn on_frame_update(&mut self, frame: Frame) {
        let Some(stop_at) = self.auto_stop else {
            return;
        };
        if frame < stop_at {
            return;
        }

        self.with_player(|player| player.pause());
        self.auto_stop = None;

        match self.timeline.slide_index_at_frame(frame) {
            Some(index) => self.current_slide = index,
            None => tracing::warn!(frame, "auto-stop frame outside timeline"),
        }
        tracing::info!(frame, stop_at, slide = self.current_slide, "auto-stop");
    }

    /// Adopt a play/pause status reported by the player.
    pub fn on_play_state_change(&mut self, is_now_playing: bool) {
        if self.is_playing != is_now_playing {
            tracing::debug!(is_now_playing, "play state reconciled");
        }
        self.is_playing = is_now_playing;
    }

    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::FrameUpdate { frame } => self.on_frame_update(frame),
            PlayerEvent::Play => self.on_play_state_change(true),
            PlayerEvent::Pause => self.on_play_state_change(false),
        }
    }

    /// Handle every pending player event, in order.
    ///
    /// Events emitted while handling (such as the pause issued by an
    /// auto-stop) are handled in the same call. Returns the number handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let event = match self.attachment.as_mut() {
                Some(attachment) => attachment.player.next_event(attachment.listener),
                None => None,
            };
            let Some(event) = event else {
                return handled;
            };
            self.handle_event(event);
            handled += 1;
        }
    }
}

impl<P: PlayerHandle> Drop for PlaybackController<P> {
    fn drop(&mut self) {
        self.detach();
    }
}
