//! Slides command handler

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use slidecast::deck::{composition_length, sequence_plan, Sequence};
use slidecast::theme::current_theme;
use slidecast::{Config, Deck, Frame, TimelineIndex};

/// JSON shape of `slides --json`.
#[derive(Debug, Serialize)]
pub struct SlidesReport<'a> {
    pub title: &'a str,
    pub fps: u32,
    pub total_duration: Frame,
    pub composition_length: Frame,
    pub sequences: Vec<Sequence>,
}

/// Format a frame count as M:SS.s at `fps`.
pub fn format_duration(frames: Frame, fps: u32) -> String {
    let secs = frames as f64 / fps.max(1) as f64;
    let minutes = (secs / 60.0).floor();
    format!("{}:{:04.1}", minutes as u64, secs - minutes * 60.0)
}

/// Build the report for a deck.
pub fn build_report<'a>(deck: &'a Deck, timeline: &TimelineIndex) -> SlidesReport<'a> {
    SlidesReport {
        title: &deck.title,
        fps: deck.fps,
        total_duration: timeline.total_duration(),
        composition_length: composition_length(timeline),
        sequences: sequence_plan(deck, timeline),
    }
}

/// Render the report as an aligned table.
pub fn format_table(report: &SlidesReport<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.sequences.len() + 2);
    lines.push(format!(
        "{:>3}  {:>6}  {:>6}  {:>7}  TITLE",
        "#", "FROM", "FRAMES", "SECONDS"
    ));
    for seq in &report.sequences {
        lines.push(format!(
            "{:>3}  {:>6}  {:>6}  {:>7.1}  {}",
            seq.index + 1,
            seq.from,
            seq.duration_in_frames,
            seq.seconds(report.fps),
            seq.title
        ));
    }
    let rule_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
    lines.insert(1, "─".repeat(rule_width));
    lines
}

/// List the slides of a deck.
pub fn handle(config: &Config, deck: Option<PathBuf>, json: bool) -> Result<()> {
    let deck = super::resolve_deck(config, deck)?;
    let timeline = deck.timeline()?;
    let report = build_report(&deck, &timeline);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let theme = current_theme();
    if !deck.title.is_empty() {
        println!("{}", theme.accent_text(&deck.title));
    }
    for (i, line) in format_table(&report).iter().enumerate() {
        if i < 2 {
            println!("{}", theme.secondary_text(line));
        } else {
            println!("{}", theme.primary_text(line));
        }
    }
    println!(
        "{}",
        theme.secondary_text(&format!(
            "Interactive {} ({} frames), rendered {} ({} frames) at {} fps",
            format_duration(report.total_duration, report.fps),
            report.total_duration,
            format_duration(report.composition_length, report.fps),
            report.composition_length,
            report.fps
        ))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_minutes_and_tenths() {
        assert_eq!(format_duration(2640, 30), "1:28.0");
        assert_eq!(format_duration(45, 30), "0:01.5");
        assert_eq!(format_duration(0, 30), "0:00.0");
    }

    #[test]
    fn report_for_builtin_deck() {
        let deck = Deck::builtin();
        let timeline = deck.timeline().unwrap();
        let report = build_report(&deck, &timeline);

        assert_eq!(report.fps, 30);
        assert_eq!(report.total_duration, 2640);
        assert_eq!(report.composition_length, 2460);
        assert_eq!(report.sequences.len(), 20);
    }

    #[test]
    fn table_has_header_rule_and_rows() {
        let deck = Deck::builtin();
        let timeline = deck.timeline().unwrap();
        let lines = format_table(&build_report(&deck, &timeline));

        assert_eq!(lines.len(), 22);
        assert!(lines[0].contains("FROM"));
        assert!(lines[1].starts_with('─'));
        assert!(lines[4].contains("180"));
        assert!(lines[4].contains("240"));
    }
}
