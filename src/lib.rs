//! StudyMatch - swipe-based tutor discovery core
//!
//! This library implements the discovery and matching interaction of the
//! StudyMatch tutoring app: client-side candidate filtering, the card stack
//! state machine, the gesture/animation driver, and the typed Supabase
//! backend client, composed by a per-screen discovery session.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DiscoveryFeed, GestureConfig, SwipeDirection};
pub use crate::models::{Candidate, FilterState, Match, MatchStatus};
pub use crate::services::{DiscoverySession, ProviderState, SupabaseClient};
