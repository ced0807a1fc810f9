use crate::core::filters::filter_candidates;
use crate::core::gesture::{GestureConfig, GestureDriver, ReleaseOutcome, SwipeDirection, Transform};
use crate::core::stack::{CardStack, StackState};
use crate::models::{Candidate, FilterState};

/// A committed swipe, ready for its side effects
#[derive(Debug, Clone)]
pub struct SwipeCommit {
    pub direction: SwipeDirection,
    pub candidate: Candidate,
}

/// Why the stack has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The source list itself is empty
    NoCandidates,
    /// Candidates exist but none pass the current filters; offer a reset
    NoneMatchFilters,
}

/// Swipe-based discovery feed.
///
/// Composes the source candidate list, the client-side filters, the card
/// stack position, and the single active gesture. All transitions are
/// synchronous; the caller performs side effects (match recording) from
/// the returned [`SwipeCommit`].
#[derive(Debug, Clone)]
pub struct DiscoveryFeed {
    candidates: Vec<Candidate>,
    filters: FilterState,
    filtered: Vec<Candidate>,
    stack: CardStack,
    gesture: GestureDriver,
}

impl DiscoveryFeed {
    pub fn new(config: GestureConfig, container_width: f32) -> Self {
        Self {
            candidates: Vec::new(),
            filters: FilterState::default(),
            filtered: Vec::new(),
            stack: CardStack::new(),
            gesture: GestureDriver::new(config, container_width),
        }
    }

    /// Replace the source candidate list (a fresh fetch)
    pub fn set_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.refresh();
    }

    pub fn filters(&self) -> FilterState {
        self.filters
    }

    /// Apply a new filter state
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh();
    }

    /// Back to the defaults (the empty-state call to action)
    pub fn reset_filters(&mut self) {
        self.set_filters(FilterState::default());
    }

    /// The filtered list changed identity: refilter, restart the stack from
    /// the top, and discard any gesture aimed at a card that no longer exists.
    fn refresh(&mut self) {
        self.filtered = filter_candidates(&self.candidates, &self.filters);
        self.stack.reset(self.filtered.len());
        self.gesture.reset();
    }

    /// Candidate currently on top of the stack
    pub fn current(&self) -> Option<&Candidate> {
        self.stack.position().map(|index| &self.filtered[index])
    }

    /// Candidate underneath the top card, if any
    pub fn upcoming(&self) -> Option<&Candidate> {
        self.stack.peek_next().map(|index| &self.filtered[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn source_len(&self) -> usize {
        self.candidates.len()
    }

    pub fn stack_state(&self) -> StackState {
        self.stack.state()
    }

    pub fn gesture(&self) -> &GestureDriver {
        &self.gesture
    }

    /// Present when there is no card to show; empty results are not errors
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            None
        } else if self.candidates.is_empty() {
            Some(EmptyState::NoCandidates)
        } else {
            Some(EmptyState::NoneMatchFilters)
        }
    }

    /// Accept a new drag on the top card. With no card there is no gesture
    /// surface at all.
    pub fn begin_drag(&mut self) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.gesture.begin()
    }

    /// Per-frame drag update
    pub fn drag_to(&mut self, dx: f32, dy: f32) -> Option<Transform> {
        self.gesture.drag_to(dx, dy)
    }

    /// Classify the drag on release
    pub fn release(&mut self) -> ReleaseOutcome {
        self.gesture.release()
    }

    /// Button-triggered like/reject; same commit path as a drag
    pub fn press(&mut self, direction: SwipeDirection) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.gesture.press(direction)
    }

    /// Apply the pending commit once the exit animation has finished.
    ///
    /// Captures the candidate that was on top, then advances the stack
    /// (wrapping past the end). Spring-backs yield no commit.
    pub fn complete_animation(&mut self) -> Option<SwipeCommit> {
        let direction = self.gesture.complete_animation()?;
        let candidate = self.current()?.clone();
        self.stack.advance();
        Some(SwipeCommit {
            direction,
            candidate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;

    fn create_test_candidate(id: &str, rating: f64, verified: bool) -> Candidate {
        Candidate {
            id: id.to_string(),
            first_name: format!("Tutor{}", id),
            last_name: "Example".to_string(),
            university: None,
            major: None,
            bio: None,
            avatar_url: None,
            rating: Some(rating),
            hourly_rate: Some(35.0),
            verified,
            subjects: vec![],
            created_at: None,
        }
    }

    fn feed_with(candidates: Vec<Candidate>) -> DiscoveryFeed {
        let mut feed = DiscoveryFeed::new(GestureConfig::default(), WIDTH);
        feed.set_candidates(candidates);
        feed
    }

    fn swipe(feed: &mut DiscoveryFeed, dx: f32) -> Option<SwipeCommit> {
        assert!(feed.begin_drag());
        feed.drag_to(dx, 0.0);
        feed.release();
        feed.complete_animation()
    }

    #[test]
    fn test_empty_feed_has_no_gesture_surface() {
        let mut feed = feed_with(vec![]);

        assert_eq!(feed.empty_state(), Some(EmptyState::NoCandidates));
        assert_eq!(feed.stack_state(), StackState::Idle);
        assert!(feed.current().is_none());
        assert!(!feed.begin_drag());
        assert!(!feed.press(SwipeDirection::Right));
    }

    #[test]
    fn test_filters_emptying_the_list_offer_reset() {
        let mut feed = feed_with(vec![create_test_candidate("1", 3.0, true)]);

        feed.set_filters(FilterState {
            min_rating: 4.0,
            ..FilterState::default()
        });

        assert_eq!(feed.empty_state(), Some(EmptyState::NoneMatchFilters));

        feed.reset_filters();
        assert_eq!(feed.empty_state(), None);
        assert_eq!(feed.current().unwrap().id, "1");
    }

    #[test]
    fn test_short_drag_does_not_advance() {
        let mut feed = feed_with(vec![
            create_test_candidate("1", 5.0, true),
            create_test_candidate("2", 5.0, true),
        ]);

        assert!(feed.begin_drag());
        feed.drag_to(WIDTH * 0.10, 0.0);
        assert_eq!(feed.release(), ReleaseOutcome::Cancel);
        assert!(feed.complete_animation().is_none());

        assert_eq!(feed.current().unwrap().id, "1");
    }

    #[test]
    fn test_commit_advances_and_captures_top_candidate() {
        let mut feed = feed_with(vec![
            create_test_candidate("1", 5.0, true),
            create_test_candidate("2", 5.0, true),
        ]);

        let commit = swipe(&mut feed, WIDTH * 0.40).unwrap();

        assert_eq!(commit.direction, SwipeDirection::Right);
        assert_eq!(commit.candidate.id, "1");
        assert_eq!(feed.current().unwrap().id, "2");
    }

    #[test]
    fn test_full_cycle_wraps_to_start() {
        let mut feed = feed_with(vec![
            create_test_candidate("1", 5.0, true),
            create_test_candidate("2", 5.0, true),
            create_test_candidate("3", 5.0, true),
        ]);

        for _ in 0..3 {
            swipe(&mut feed, -WIDTH * 0.40).unwrap();
        }

        assert_eq!(feed.current().unwrap().id, "1");
    }

    #[test]
    fn test_single_match_after_filter_keeps_cycling() {
        // Two candidates, one below the rating floor
        let mut feed = feed_with(vec![
            create_test_candidate("A", 3.0, true),
            create_test_candidate("B", 5.0, true),
        ]);

        feed.set_filters(FilterState {
            min_rating: 4.0,
            ..FilterState::default()
        });

        assert_eq!(feed.filtered_len(), 1);
        assert_eq!(feed.current().unwrap().id, "B");

        let commit = swipe(&mut feed, WIDTH * 0.40).unwrap();
        assert_eq!(commit.candidate.id, "B");

        // Index wraps to 0: the same candidate shows again
        assert_eq!(feed.current().unwrap().id, "B");
    }

    #[test]
    fn test_filter_change_resets_position_and_gesture() {
        let mut feed = feed_with(vec![
            create_test_candidate("1", 5.0, true),
            create_test_candidate("2", 5.0, false),
            create_test_candidate("3", 5.0, true),
        ]);

        swipe(&mut feed, WIDTH * 0.40).unwrap();
        assert_eq!(feed.current().unwrap().id, "2");

        feed.begin_drag();
        feed.set_filters(FilterState {
            verified_only: true,
            ..FilterState::default()
        });

        // New list identity: back to the top, mid-flight gesture discarded
        assert_eq!(feed.current().unwrap().id, "1");
        assert!(feed.complete_animation().is_none());
        assert!(feed.begin_drag());
    }

    #[test]
    fn test_press_buttons_mirror_drag_commits() {
        let mut feed = feed_with(vec![
            create_test_candidate("1", 5.0, true),
            create_test_candidate("2", 5.0, true),
        ]);

        assert!(feed.press(SwipeDirection::Left));
        let commit = feed.complete_animation().unwrap();

        assert_eq!(commit.direction, SwipeDirection::Left);
        assert_eq!(commit.candidate.id, "1");
        assert_eq!(feed.current().unwrap().id, "2");
    }
}
