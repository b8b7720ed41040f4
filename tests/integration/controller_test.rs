//! Integration tests for slide navigation and auto-stop

use std::time::{Duration, Instant};

use slidecast::player::{ClockPlayer, PlaybackController, PlaybackPhase, PlayerEvent};
use slidecast::{Frame, TimelineIndex};

use crate::helpers::{Issued, MockPlayer};

fn mock_controller(boundaries: Vec<Frame>, trailing: Frame) -> PlaybackController<MockPlayer> {
    let mut controller = PlaybackController::new(TimelineIndex::new(boundaries, trailing).unwrap());
    controller.attach(MockPlayer::default());
    controller
}

/// Queue a frame update as the player would and let the controller drain it.
fn deliver_frame(controller: &mut PlaybackController<MockPlayer>, frame: Frame) {
    controller
        .player_mut()
        .unwrap()
        .events
        .emit(PlayerEvent::FrameUpdate { frame });
    controller.pump();
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn seek_twice_keeps_index_and_stop_but_reissues_commands() {
    let mut controller = mock_controller(vec![0, 90, 180], 120);

    controller.seek_to_slide(1);
    let first = (controller.current_slide(), controller.auto_stop_frame());
    controller.seek_to_slide(1);
    let second = (controller.current_slide(), controller.auto_stop_frame());

    assert_eq!(first, second);
    assert_eq!(first, (1, Some(179)));
    assert_eq!(
        controller.player().unwrap().issued,
        vec![Issued::Seek(90), Issued::Play, Issued::Seek(90), Issued::Play]
    );
}

#[test]
fn navigation_is_guarded_at_both_ends() {
    let mut controller = mock_controller(vec![0, 90, 180], 120);

    assert!(!controller.prev_slide());
    assert_eq!(controller.current_slide(), 0);
    assert!(controller.player().unwrap().issued.is_empty());

    controller.seek_to_slide(2);
    assert!(!controller.next_slide());
    assert_eq!(controller.current_slide(), 2);
}

// ============================================================================
// Auto-stop
// ============================================================================

#[test]
fn auto_stop_fires_when_a_skipped_frame_passes_the_stop() {
    let mut controller = mock_controller(vec![0, 90, 180], 120);
    assert_eq!(controller.timeline().total_duration(), 300);

    controller.seek_to_slide(1);
    controller.pump();
    deliver_frame(&mut controller, 178);
    assert!(controller.is_playing());
    assert_eq!(controller.player().unwrap().pauses(), 0);

    deliver_frame(&mut controller, 180);
    assert!(!controller.is_playing());
    assert_eq!(controller.player().unwrap().pauses(), 1);
    assert_eq!(controller.current_slide(), 2);
    assert_eq!(controller.auto_stop_frame(), None);
}

#[test]
fn next_slide_plays_to_its_last_frame_and_stays_on_it() {
    let mut controller = mock_controller(vec![0, 90, 180, 420], 120);
    assert_eq!(controller.timeline().total_duration(), 540);

    assert!(controller.next_slide());
    assert_eq!(controller.current_slide(), 1);
    assert_eq!(controller.auto_stop_frame(), Some(179));
    assert_eq!(
        controller.player().unwrap().issued,
        vec![Issued::Seek(90), Issued::Play]
    );
    controller.pump();

    for frame in [100, 150, 179] {
        deliver_frame(&mut controller, frame);
    }

    let player = controller.player().unwrap();
    assert_eq!(player.pauses(), 1);
    assert_eq!(player.issued.last(), Some(&Issued::Pause));
    assert_eq!(controller.current_slide(), 1);
    assert!(!controller.is_playing());
    assert_eq!(controller.phase(), PlaybackPhase::Paused);
}

#[test]
fn resume_after_pause_never_auto_stops() {
    let mut controller = mock_controller(vec![0, 90, 180], 120);

    controller.seek_to_slide(0);
    controller.toggle_play();
    assert_eq!(controller.auto_stop_frame(), Some(89));
    controller.toggle_play();
    assert_eq!(controller.auto_stop_frame(), None);
    assert_eq!(controller.phase(), PlaybackPhase::FreePlay);
    controller.pump();

    for frame in [89, 90, 179, 299] {
        deliver_frame(&mut controller, frame);
    }
    assert!(controller.is_playing());
    assert_eq!(controller.current_slide(), 0);
}

#[test]
fn auto_stop_past_the_timeline_keeps_the_previous_slide() {
    let mut controller = mock_controller(vec![0, 90, 180], 120);
    assert_eq!(controller.timeline().total_duration(), 300);

    controller.seek_to_slide(2);
    controller.pump();
    assert_eq!(controller.auto_stop_frame(), Some(299));

    deliver_frame(&mut controller, 400);

    assert_eq!(controller.current_slide(), 2);
    assert_eq!(controller.auto_stop_frame(), None);
    assert_eq!(controller.player().unwrap().pauses(), 1);
    assert!(!controller.is_playing());
}

#[test]
fn player_pause_flips_playing_regardless_of_stop() {
    let mut controller = mock_controller(vec![0, 90, 180], 120);
    controller.seek_to_slide(1);
    assert!(controller.is_playing());

    controller.on_play_state_change(false);
    assert!(!controller.is_playing());
    assert_eq!(controller.auto_stop_frame(), Some(179));
}

// ============================================================================
// Attachment
// ============================================================================

#[test]
fn toggle_before_attach_records_state_only() {
    let timeline = TimelineIndex::new(vec![0, 90], 30).unwrap();
    let mut controller: PlaybackController<MockPlayer> = PlaybackController::new(timeline);

    controller.toggle_play();
    assert!(controller.is_playing());
    assert_eq!(controller.pump(), 0);

    controller.attach(MockPlayer::default());
    assert!(controller.player().unwrap().issued.is_empty());
}

#[test]
fn detach_releases_the_listener() {
    let mut controller = mock_controller(vec![0, 90], 30);
    let player = controller.detach().unwrap();

    assert_eq!(player.events.listener_count(), 0);
    assert!(controller.detach().is_none());
}

// ============================================================================
// With the clock player
// ============================================================================

#[test]
fn clock_player_stops_on_the_slide_it_finished() {
    let t0 = Instant::now();
    let timeline = TimelineIndex::new(vec![0, 90, 180, 420], 120).unwrap();
    let mut controller = PlaybackController::new(timeline);
    controller.attach(ClockPlayer::new(30, 540, t0));

    controller.next_slide();
    controller.pump();

    let player = controller.player_mut().unwrap();
    player.tick(t0 + Duration::from_secs(2));
    assert_eq!(player.frame(), 150);
    controller.pump();
    assert!(controller.is_playing());

    // 89 frames in: the last frame of slide 1
    controller
        .player_mut()
        .unwrap()
        .tick(t0 + Duration::from_millis(2_967));
    controller.pump();

    let player = controller.player().unwrap();
    assert_eq!(player.frame(), 179);
    assert!(!player.is_playing());
    assert!(!controller.is_playing());
    assert_eq!(controller.current_slide(), 1);
}

#[test]
fn clock_player_end_of_timeline_is_reconciled() {
    let t0 = Instant::now();
    let timeline = TimelineIndex::new(vec![0, 90, 180, 420], 120).unwrap();
    let mut controller = PlaybackController::new(timeline);
    controller.attach(ClockPlayer::new(30, 540, t0));

    controller.last_slide();
    controller.toggle_play();
    controller.toggle_play();
    assert_eq!(controller.phase(), PlaybackPhase::FreePlay);
    controller.pump();

    controller
        .player_mut()
        .unwrap()
        .tick(t0 + Duration::from_secs(60));
    controller.pump();

    assert_eq!(controller.player().unwrap().frame(), 539);
    assert!(!controller.is_playing());
    assert_eq!(controller.current_slide(), 3);
}

#[test]
fn clock_player_manual_resume_runs_past_the_boundary() {
    let t0 = Instant::now();
    let timeline = TimelineIndex::new(vec![0, 90, 180], 120).unwrap();
    let mut controller = PlaybackController::new(timeline);
    controller.attach(ClockPlayer::new(30, 300, t0));

    controller.seek_to_slide(0);
    controller.toggle_play();
    controller.toggle_play();
    controller.pump();

    controller
        .player_mut()
        .unwrap()
        .tick(t0 + Duration::from_secs(4));
    controller.pump();

    assert_eq!(controller.player().unwrap().frame(), 120);
    assert!(controller.is_playing());
}
