use crate::core::{
    DiscoveryFeed, GestureConfig, ReleaseOutcome, SwipeCommit, SwipeDirection, Transform,
};
use crate::models::{Candidate, FilterState, Match, MatchStatus};
use crate::services::cache::{CacheKey, FeedCache};
use crate::services::supabase::SupabaseClient;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Lifecycle of the one-shot candidate read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderState {
    Loading,
    Ready,
    Failed(String),
}

/// Non-blocking surfaced write failure (the transient alert)
#[derive(Debug, Clone)]
pub enum Notice {
    MatchFailed { tutor_id: String, reason: String },
}

/// Result of a committed swipe at the session level
#[derive(Debug, Clone)]
pub struct SwipeOutcome {
    pub commit: SwipeCommit,
    /// Optimistic echo for the "It's a match" banner; right swipes only
    pub match_echo: Option<Match>,
}

/// One discovery screen's worth of state and side effects.
///
/// The backend client and the current user's identity are injected
/// explicitly; nothing here reaches for an ambient global. Match creation
/// is fire-and-forget: the stack advance never waits on the write, and a
/// failed write never rolls it back. In-flight writes are scoped to the
/// session and aborted when it closes.
pub struct DiscoverySession {
    client: Arc<SupabaseClient>,
    cache: Arc<FeedCache>,
    student_id: String,
    feed: DiscoveryFeed,
    state: ProviderState,
    page_size: usize,
    notices: UnboundedSender<Notice>,
    notice_rx: Option<UnboundedReceiver<Notice>>,
    pending: Vec<JoinHandle<()>>,
}

impl DiscoverySession {
    pub fn new(
        client: Arc<SupabaseClient>,
        cache: Arc<FeedCache>,
        student_id: impl Into<String>,
        config: GestureConfig,
        container_width: f32,
        page_size: usize,
    ) -> Self {
        let (notices, notice_rx) = mpsc::unbounded_channel();

        Self {
            client,
            cache,
            student_id: student_id.into(),
            feed: DiscoveryFeed::new(config, container_width),
            state: ProviderState::Loading,
            page_size,
            notices,
            notice_rx: Some(notice_rx),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &ProviderState {
        &self.state
    }

    pub fn feed(&self) -> &DiscoveryFeed {
        &self.feed
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.feed.set_filters(filters);
    }

    pub fn reset_filters(&mut self) {
        self.feed.reset_filters();
    }

    /// Receiver for surfaced write failures; can be taken once
    pub fn take_notices(&mut self) -> Option<UnboundedReceiver<Notice>> {
        self.notice_rx.take()
    }

    /// One candidate read per mount, cache first.
    ///
    /// Failure leaves the feed empty and the state `Failed`; there is no
    /// automatic retry — the retry affordance is calling this again.
    pub async fn load(&mut self) -> ProviderState {
        self.state = ProviderState::Loading;

        let key = CacheKey::tutors(&self.student_id);
        if let Ok(cached) = self.cache.get::<Vec<Candidate>>(&key).await {
            tracing::debug!("Loaded {} candidates from cache", cached.len());
            self.feed.set_candidates(cached);
            self.state = ProviderState::Ready;
            return self.state.clone();
        }

        match self.client.list_tutors(self.page_size).await {
            Ok(candidates) => {
                if let Err(e) = self.cache.set(&key, &candidates).await {
                    tracing::warn!("Failed to cache candidates: {}", e);
                }
                tracing::info!(
                    "Loaded {} candidates for {}",
                    candidates.len(),
                    self.student_id
                );
                self.feed.set_candidates(candidates);
                self.state = ProviderState::Ready;
            }
            Err(e) => {
                tracing::error!("Failed to load candidates for {}: {}", self.student_id, e);
                self.feed.set_candidates(Vec::new());
                self.state = ProviderState::Failed(e.to_string());
            }
        }

        self.state.clone()
    }

    /// Accept a new drag on the top card
    pub fn begin_drag(&mut self) -> bool {
        self.feed.begin_drag()
    }

    /// Per-frame drag update
    pub fn drag_to(&mut self, dx: f32, dy: f32) -> Option<Transform> {
        self.feed.drag_to(dx, dy)
    }

    /// Classify the drag on release
    pub fn release(&mut self) -> ReleaseOutcome {
        self.feed.release()
    }

    pub fn press_like(&mut self) -> bool {
        self.feed.press(SwipeDirection::Right)
    }

    pub fn press_reject(&mut self) -> bool {
        self.feed.press(SwipeDirection::Left)
    }

    /// Finish the in-flight card animation and apply its commit.
    ///
    /// A right-swipe commit spawns one fire-and-forget match write and
    /// returns an optimistic pending echo; left commits only advance.
    pub fn complete_animation(&mut self) -> Option<SwipeOutcome> {
        let commit = self.feed.complete_animation()?;

        let match_echo = match commit.direction {
            SwipeDirection::Right => Some(self.record_match(&commit.candidate)),
            SwipeDirection::Left => None,
        };

        Some(SwipeOutcome { commit, match_echo })
    }

    /// Spawn the match write and return the optimistic pending echo
    fn record_match(&mut self, candidate: &Candidate) -> Match {
        let client = Arc::clone(&self.client);
        let student_id = self.student_id.clone();
        let tutor_id = candidate.id.clone();
        let notices = self.notices.clone();

        let handle = tokio::spawn(async move {
            match client.create_match(&student_id, &tutor_id).await {
                Ok(created) => {
                    tracing::debug!(
                        "Match recorded: {} -> {} ({})",
                        student_id,
                        tutor_id,
                        created.id
                    );
                }
                Err(e) => {
                    // Browsing continues regardless; surface a transient alert
                    tracing::warn!(
                        "Failed to create match {} -> {}: {}",
                        student_id,
                        tutor_id,
                        e
                    );
                    let _ = notices.send(Notice::MatchFailed {
                        tutor_id,
                        reason: e.to_string(),
                    });
                }
            }
        });

        self.pending.retain(|h| !h.is_finished());
        self.pending.push(handle);

        Match {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: self.student_id.clone(),
            tutor_id: candidate.id.clone(),
            status: MatchStatus::Pending,
            created_at: Some(chrono::Utc::now()),
        }
    }

    /// Await all in-flight writes (graceful teardown)
    pub async fn flush(&mut self) {
        for handle in self.pending.drain(..) {
            let _ = handle.await;
        }
    }

    /// Abort anything still in flight; the screen is going away
    pub fn close(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for DiscoverySession {
    fn drop(&mut self) {
        // Requests are scoped to the screen's lifetime
        self.close();
    }
}
