//! Integration tests for frame-to-slide lookup

use slidecast::{Deck, TimelineError, TimelineIndex};

// ============================================================================
// Lookup Coverage
// ============================================================================

#[test]
fn every_frame_in_range_maps_to_a_valid_slide() {
    let timeline = Deck::builtin().timeline().unwrap();
    assert_eq!(timeline.total_duration(), 2640);

    for frame in 0..timeline.total_duration() {
        let index = timeline
            .slide_index_at_frame(frame)
            .unwrap_or_else(|| panic!("frame {frame} not found"));
        let range = timeline.slide_range(index).unwrap();
        assert!(range.contains(&frame), "frame {frame} outside slide {index}");
    }
}

#[test]
fn frames_past_total_duration_are_not_found() {
    let timeline = Deck::builtin().timeline().unwrap();
    assert_eq!(timeline.slide_index_at_frame(2640), None);
    assert_eq!(timeline.slide_index_at_frame(u32::MAX), None);
}

#[test]
fn boundary_lookup_round_trips_for_every_slide() {
    let timeline = Deck::builtin().timeline().unwrap();
    for index in 0..timeline.len() {
        let start = timeline.boundary_of(index).unwrap();
        assert_eq!(timeline.slide_index_at_frame(start), Some(index));
    }
}

#[test]
fn builtin_boundaries_are_non_decreasing() {
    let timeline = Deck::builtin().timeline().unwrap();
    assert!(timeline.boundaries().windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(timeline.boundaries()[0], 0);
}

// ============================================================================
// Repeated Boundaries
// ============================================================================

#[test]
fn repeated_boundary_resolves_to_the_slide_that_holds_frames() {
    let timeline = TimelineIndex::new(vec![0, 90, 90, 180], 60).unwrap();

    // Slide 1 is [90, 90): empty, so frame 90 belongs to slide 2
    assert_eq!(timeline.slide_range(1), Some(90..90));
    assert_eq!(timeline.slide_index_at_frame(89), Some(0));
    assert_eq!(timeline.slide_index_at_frame(90), Some(2));
    assert_eq!(timeline.auto_stop_frame_for(1), Some(89));
    assert_eq!(timeline.auto_stop_frame_for(2), Some(179));
}

// ============================================================================
// Durations
// ============================================================================

#[test]
fn durations_use_next_boundary_then_fallback() {
    let timeline = TimelineIndex::new(vec![0, 90, 180, 420], 120)
        .unwrap()
        .with_fallback_duration(45);

    assert_eq!(timeline.duration_of(0), Some(90));
    assert_eq!(timeline.duration_of(2), Some(240));
    assert_eq!(timeline.duration_of(3), Some(45));
    assert_eq!(timeline.duration_of(4), None);
}

#[test]
fn invalid_tables_are_rejected() {
    assert_eq!(TimelineIndex::new(vec![], 10), Err(TimelineError::Empty));
    assert_eq!(
        TimelineIndex::new(vec![5, 10], 10),
        Err(TimelineError::FirstNotZero { found: 5 })
    );
    assert_eq!(
        TimelineIndex::new(vec![0, 10], 0),
        Err(TimelineError::NoTrailingFrames)
    );
}
