// Unit tests for the StudyMatch discovery core

use studymatch::core::{
    filter_candidates, DiscoveryFeed, EmptyState, GestureConfig, GestureDriver, GesturePhase,
    ReleaseOutcome, StackState, SwipeDirection,
};
use studymatch::models::{Candidate, FilterState};

const WIDTH: f32 = 400.0;

fn create_candidate(id: &str, rating: Option<f64>, rate: Option<f64>, verified: bool) -> Candidate {
    Candidate {
        id: id.to_string(),
        first_name: format!("Tutor{}", id),
        last_name: "Example".to_string(),
        university: Some("State University".to_string()),
        major: Some("Mathematics".to_string()),
        bio: None,
        avatar_url: None,
        rating,
        hourly_rate: rate,
        verified,
        subjects: vec![],
        created_at: None,
    }
}

#[test]
fn test_filter_is_subset_preserving_order() {
    let candidates: Vec<Candidate> = (0..20)
        .map(|i| create_candidate(&i.to_string(), Some((i % 6) as f64), Some(30.0), i % 2 == 0))
        .collect();

    let filters = FilterState {
        verified_only: true,
        min_rating: 3.0,
        max_price: 200.0,
    };

    let filtered = filter_candidates(&candidates, &filters);

    // Every survivor comes from the input
    for candidate in &filtered {
        assert!(candidates.iter().any(|c| c.id == candidate.id));
    }

    // Relative order is preserved
    let positions: Vec<usize> = filtered
        .iter()
        .map(|c| candidates.iter().position(|o| o.id == c.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_filter_is_idempotent() {
    let candidates: Vec<Candidate> = (0..20)
        .map(|i| create_candidate(&i.to_string(), Some((i % 6) as f64), Some(30.0), i % 2 == 0))
        .collect();

    let filters = FilterState {
        verified_only: false,
        min_rating: 4.0,
        max_price: 50.0,
    };

    let once = filter_candidates(&candidates, &filters);
    let twice = filter_candidates(&once, &filters);

    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.id, b.id);
    }
}

#[test]
fn test_stack_position_cycles_and_stays_in_range() {
    let candidates: Vec<Candidate> = (0..7)
        .map(|i| create_candidate(&i.to_string(), Some(5.0), None, true))
        .collect();
    let len = candidates.len();

    let mut feed = DiscoveryFeed::new(GestureConfig::default(), WIDTH);
    feed.set_candidates(candidates);

    let start = match feed.stack_state() {
        StackState::Showing(index) => index,
        StackState::Idle => panic!("expected a showing stack"),
    };

    for _ in 0..len {
        assert!(feed.begin_drag());
        feed.drag_to(-WIDTH * 0.5, 0.0);
        feed.release();
        feed.complete_animation().unwrap();

        match feed.stack_state() {
            StackState::Showing(index) => assert!(index < len),
            StackState::Idle => panic!("stack went idle mid-cycle"),
        }
    }

    // N commits over a list of N return to the starting position
    assert_eq!(feed.stack_state(), StackState::Showing(start));
}

#[test]
fn test_below_threshold_drag_springs_back() {
    let mut gesture = GestureDriver::new(GestureConfig::default(), WIDTH);

    assert!(gesture.begin());
    gesture.drag_to(WIDTH * 0.10, 0.0);

    assert_eq!(gesture.release(), ReleaseOutcome::Cancel);
    assert_eq!(gesture.complete_animation(), None);
    assert_eq!(gesture.phase(), GesturePhase::Idle);
}

#[test]
fn test_above_threshold_drag_commits_by_sign() {
    let mut gesture = GestureDriver::new(GestureConfig::default(), WIDTH);

    gesture.begin();
    gesture.drag_to(WIDTH * 0.40, 0.0);
    assert_eq!(
        gesture.release(),
        ReleaseOutcome::Commit(SwipeDirection::Right)
    );
    gesture.complete_animation();

    gesture.begin();
    gesture.drag_to(-WIDTH * 0.40, 0.0);
    assert_eq!(
        gesture.release(),
        ReleaseOutcome::Commit(SwipeDirection::Left)
    );
}

#[test]
fn test_empty_feed_never_shows_a_card() {
    let mut feed = DiscoveryFeed::new(GestureConfig::default(), WIDTH);
    feed.set_candidates(vec![]);

    assert_eq!(feed.stack_state(), StackState::Idle);
    assert_eq!(feed.empty_state(), Some(EmptyState::NoCandidates));
    assert!(feed.current().is_none());
    assert!(!feed.begin_drag());
}

#[test]
fn test_rating_filter_scenario_single_survivor() {
    // candidates = [A(rating=3), B(rating=5)], filter = {minRating: 4}
    let mut feed = DiscoveryFeed::new(GestureConfig::default(), WIDTH);
    feed.set_candidates(vec![
        create_candidate("A", Some(3.0), None, true),
        create_candidate("B", Some(5.0), None, true),
    ]);
    feed.set_filters(FilterState {
        min_rating: 4.0,
        ..FilterState::default()
    });

    assert_eq!(feed.filtered_len(), 1);
    assert_eq!(feed.current().unwrap().id, "B");

    feed.begin_drag();
    feed.drag_to(WIDTH * 0.40, 0.0);
    feed.release();
    let commit = feed.complete_animation().unwrap();

    assert_eq!(commit.direction, SwipeDirection::Right);
    assert_eq!(commit.candidate.id, "B");

    // Only one candidate remains: the index wraps and B shows again
    assert_eq!(feed.current().unwrap().id, "B");
}

#[test]
fn test_unrated_candidate_dropped_by_rating_floor() {
    let candidates = vec![
        create_candidate("1", None, None, true),
        create_candidate("2", Some(4.5), None, true),
    ];

    let filters = FilterState {
        min_rating: 4.0,
        ..FilterState::default()
    };

    let filtered = filter_candidates(&candidates, &filters);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "2");
}
