//! Contract with the external frame player.
//!
//! The controller never renders anything itself. It drives an opaque player
//! through `PlayerHandle` (seek, play, pause) and learns about playback through
//! events the player queues for each registered listener.
//!
//! Delivery is pull-based: the player appends events to per-listener queues
//! and the owner drains them with `next_event`. Each event is handled to
//! completion before the next one is read, so handlers may issue further
//! commands to the player without re-entering themselves.

use std::collections::VecDeque;

use crate::timeline::Frame;

/// Notification emitted by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The playback cursor moved to `frame`.
    FrameUpdate { frame: Frame },
    /// Playback started.
    Play,
    /// Playback stopped.
    Pause,
}

/// Registration token returned by `add_listener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Commands and event registration offered by a frame player.
pub trait PlayerHandle {
    /// Move the playback cursor.
    fn seek_to(&mut self, frame: Frame);
    /// Start advancing the cursor.
    fn play(&mut self);
    /// Stop advancing the cursor.
    fn pause(&mut self);
    /// Register a listener; events emitted from now on are queued for it.
    fn add_listener(&mut self) -> ListenerId;
    /// Drop a listener and its pending events. Returns false if it was unknown.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
    /// Pop the oldest pending event for a listener.
    fn next_event(&mut self, id: ListenerId) -> Option<PlayerEvent>;
}

/// Fan-out queue of player events, one FIFO per listener.
#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u64,
    queues: Vec<(ListenerId, VecDeque<PlayerEvent>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.queues.push((id, VecDeque::new()));
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.queues.len();
        self.queues.retain(|(listener, _)| *listener != id);
        self.queues.len() != before
    }

    /// Queue an event for every registered listener.
    pub fn emit(&mut self, event: PlayerEvent) {
        for (_, queue) in &mut self.queues {
            queue.push_back(event);
        }
    }

    pub fn next_event(&mut self, id: ListenerId) -> Option<PlayerEvent> {
        self.queues
            .iter_mut()
            .find(|(listener, _)| *listener == id)
            .and_then(|(_, queue)| queue.pop_front())
    }

    pub fn listener_count(&self) -> usize {
        self.queues.len()
    }
}
