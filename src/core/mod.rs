// Core interaction exports
pub mod feed;
pub mod filters;
pub mod gesture;
pub mod stack;

pub use feed::{DiscoveryFeed, EmptyState, SwipeCommit};
pub use filters::{filter_candidates, matches_filters};
pub use gesture::{
    GestureConfig, GestureDriver, GesturePhase, ReleaseOutcome, SwipeDirection, Transform,
};
pub use stack::{CardStack, StackState};
