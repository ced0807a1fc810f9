// Service exports
pub mod cache;
pub mod discovery;
pub mod supabase;

pub use cache::{CacheError, CacheKey, FeedCache};
pub use discovery::{DiscoverySession, Notice, ProviderState, SwipeOutcome};
pub use supabase::{SupabaseClient, SupabaseError};
