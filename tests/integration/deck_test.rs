//! Integration tests for deck loading and the sequence plan

use slidecast::deck::{composition_length, sequence_plan, DeckError};
use slidecast::{Deck, TimelineError};

use crate::helpers::{fixtures_dir, temp_fixture};

#[test]
fn loads_fixture_deck() {
    let deck = Deck::load(fixtures_dir().join("talk.toml")).unwrap();

    assert_eq!(deck.title, "Lightning talk");
    assert_eq!(deck.slides.len(), 4);
    assert_eq!(deck.boundaries(), vec![0, 90, 180, 420]);
    assert_eq!(deck.slides[1].subtitle, "Why slides need a clock");
    assert_eq!(deck.slides[2].subtitle, "");
}

#[test]
fn fixture_timeline_and_composition_lengths_differ() {
    let deck = Deck::load(fixtures_dir().join("talk.toml")).unwrap();
    let timeline = deck.timeline().unwrap();

    assert_eq!(timeline.total_duration(), 540);
    assert_eq!(composition_length(&timeline), 480);

    let plan = sequence_plan(&deck, &timeline);
    assert_eq!(plan.last().unwrap().duration_in_frames, 60);
    assert_eq!(plan[2].from, 180);
    assert_eq!(plan[2].duration_in_frames, 240);
}

#[test]
fn out_of_order_deck_names_the_offending_slide() {
    let (_dir, path) = temp_fixture("out_of_order.toml");
    let err = Deck::load(&path).unwrap_err();

    match err {
        DeckError::Timeline(TimelineError::Decreasing {
            index,
            previous,
            found,
        }) => {
            assert_eq!(index, 2);
            assert_eq!(previous, 200);
            assert_eq!(found, 150);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_length_slide_is_accepted() {
    let deck = Deck::load(fixtures_dir().join("empty_slide.toml")).unwrap();
    let timeline = deck.timeline().unwrap();

    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline.slide_index_at_frame(90), Some(2));
    assert_eq!(timeline.total_duration(), 150);
}

#[test]
fn builtin_deck_matches_render_composition() {
    let deck = Deck::builtin();
    let timeline = deck.timeline().unwrap();

    assert_eq!(deck.fps, 30);
    assert_eq!(deck.slides.len(), 20);
    assert_eq!(timeline.boundaries()[3], 420);
    assert_eq!(timeline.boundaries()[19], 2340);
    assert_eq!(composition_length(&timeline), 2460);
}

#[test]
fn builtin_deck_round_trips_through_toml() {
    let deck = Deck::builtin();
    let text = toml::to_string(&deck).unwrap();
    assert_eq!(Deck::from_toml_str(&text).unwrap(), deck);
}
