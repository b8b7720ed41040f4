//! Native terminal player loop.
//!
//! Owns the terminal for the duration of a session: a `ClockPlayer` advances
//! the frame cursor, the `PlaybackController` reconciles its events into slide
//! state, and the render modules redraw the screen when something changed.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::deck::Deck;
use crate::player::controller::PlaybackController;
use crate::player::engine::ClockPlayer;
use crate::player::input::handle_event;
use crate::player::render::{
    render_control_bar, render_help, render_progress_bar, render_separator_line, render_slide,
    ControlBarInfo, SlideView,
};
use crate::player::state::{InputResult, SlideMarker, ViewState};

/// How the player session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackResult {
    /// User quit; carries the slide that was active (zero-based)
    Quit { last_slide: usize },
}

/// Startup options for a player session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOptions {
    /// Slide to start on (zero-based)
    pub start_slide: usize,
    /// Play the start slide immediately
    pub autoplay: bool,
    /// Initial playback speed
    pub speed: f64,
    /// Open the help overlay on start
    pub show_help: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            start_slide: 0,
            autoplay: false,
            speed: 1.0,
            show_help: false,
        }
    }
}

/// Terminal mode for the session; restored on drop, including on error paths.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide, EnableMouseCapture) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Slide boundaries as progress-bar markers.
pub fn collect_markers(deck: &Deck) -> Vec<SlideMarker> {
    deck.slides
        .iter()
        .map(|slide| SlideMarker {
            frame: slide.start,
            label: slide.title.clone(),
        })
        .collect()
}

/// Build the controller for a deck with a fresh clock player attached.
pub fn build_controller(
    deck: &Deck,
    options: &PlayerOptions,
    now: Instant,
) -> Result<PlaybackController<ClockPlayer>> {
    let timeline = deck.timeline()?;
    let mut player = ClockPlayer::new(deck.fps, timeline.total_duration(), now);
    player.set_rate(options.speed);

    let mut controller = PlaybackController::new(timeline);
    controller.attach(player);

    if options.autoplay {
        controller.seek_to_slide(options.start_slide);
    } else if options.start_slide > 0 {
        // Park on the requested slide without playing it
        if controller.seek_to_slide(options.start_slide) {
            controller.toggle_play();
        }
    }
    controller.pump();
    Ok(controller)
}

/// Play a deck in the terminal until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn play_deck(deck: &Deck, options: &PlayerOptions) -> Result<PlaybackResult> {
    let mut controller = build_controller(deck, options, Instant::now())?;
    let markers = collect_markers(deck);
    let frame_interval = Duration::from_secs_f64(1.0 / deck.fps.max(1) as f64);

    let (cols, rows) = terminal::size()?;
    let mut view = ViewState::new(cols, rows);
    view.show_help = options.show_help;

    tracing::info!(
        slides = deck.slides.len(),
        fps = deck.fps,
        total_frames = controller.timeline().total_duration(),
        "player session started"
    );

    let guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    loop {
        if event::poll(frame_interval)? {
            if handle_event(event::read()?, &mut controller, &mut view) == InputResult::Quit {
                break;
            }
        }

        if let Some(player) = controller.player_mut() {
            player.tick(Instant::now());
        }
        if controller.pump() > 0 {
            view.needs_render = true;
        }

        if view.needs_render {
            render_screen(&mut stdout, deck, &controller, &view, &markers)?;
            stdout.flush()?;
            view.needs_render = false;
        }
    }

    let last_slide = controller.current_slide();
    controller.detach();
    drop(guard);

    tracing::info!(last_slide, "player session ended");
    Ok(PlaybackResult::Quit { last_slide })
}

/// Draw the whole screen for the current state.
fn render_screen(
    out: &mut impl Write,
    deck: &Deck,
    controller: &PlaybackController<ClockPlayer>,
    view: &ViewState,
    markers: &[SlideMarker],
) -> Result<()> {
    if view.show_help {
        return render_help(out, view.term_cols, view.term_rows);
    }

    let (frame, rate) = controller
        .player()
        .map(|p| (p.frame(), p.rate()))
        .unwrap_or((0, 1.0));
    let timeline = controller.timeline();
    // The slide area follows the cursor; the indicator follows the controller
    let shown = timeline
        .slide_index_at_frame(frame)
        .unwrap_or_else(|| controller.current_slide());
    let slide = deck.slide(shown);
    let start = timeline.boundary_of(shown).unwrap_or(0);
    let slide_frames = timeline
        .slide_range(shown)
        .map(|range| range.end - range.start)
        .unwrap_or(0);

    let title = slide.map(|s| s.title.as_str()).unwrap_or("");
    render_slide(
        out,
        view.term_cols,
        view.view_rows,
        &SlideView {
            deck_title: &deck.title,
            title,
            subtitle: slide.map(|s| s.subtitle.as_str()).unwrap_or(""),
            local_frame: frame.saturating_sub(start),
            slide_frames,
        },
    )?;

    let separator_row = view.term_rows.saturating_sub(ViewState::STATUS_LINES);
    render_separator_line(out, view.term_cols, separator_row)?;
    render_progress_bar(
        out,
        view.term_cols,
        view.progress_row(),
        frame,
        timeline.total_duration(),
        deck.fps,
        markers,
    )?;
    render_control_bar(
        out,
        view.term_cols,
        view.control_row(),
        &ControlBarInfo {
            is_playing: controller.is_playing(),
            current_slide: controller.current_slide(),
            slide_count: controller.slide_count(),
            title,
            rate,
        },
    )?;
    Ok(())
}
