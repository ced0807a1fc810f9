use std::sync::Arc;

use studymatch::config::Settings;
use studymatch::services::{DiscoverySession, FeedCache, ProviderState, SupabaseClient};
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting StudyMatch discovery probe...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize Supabase client and cache
    let client = Arc::new(SupabaseClient::new(
        settings.supabase.url.clone(),
        settings.supabase.anon_key.clone(),
    ));
    let cache = Arc::new(FeedCache::new(
        settings.cache.capacity,
        settings.cache.ttl_secs,
    ));

    info!(
        "Supabase client initialized (cache: {} entries, TTL: {}s)",
        settings.cache.capacity, settings.cache.ttl_secs
    );

    let student_id =
        std::env::var("STUDYMATCH_USER_ID").unwrap_or_else(|_| "probe".to_string());

    // One discovery session, one candidate load
    let mut session = DiscoverySession::new(
        client,
        cache,
        student_id,
        settings.gesture_config(),
        settings.feed.container_width,
        settings.feed.page_size,
    );

    match session.load().await {
        ProviderState::Ready => {
            info!(
                "Feed ready: {} of {} candidates pass the default filters",
                session.feed().filtered_len(),
                session.feed().source_len()
            );
            if let Some(top) = session.feed().current() {
                info!(
                    "Top card: {} ({})",
                    top.display_name(),
                    top.university.as_deref().unwrap_or("unknown")
                );
            }
        }
        ProviderState::Failed(reason) => {
            error!("Candidate load failed: {}", reason);
        }
        ProviderState::Loading => {}
    }

    session.flush().await;

    Ok(())
}
