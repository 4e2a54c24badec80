//! Application state for API handlers.

use std::sync::Arc;

use alma_lexicon::Lexicon;
use alma_respond::PromptLibrary;
use alma_scorer::{SentimentAnalyzer, WordlistSentiment};
use chrono::{DateTime, Utc};

use crate::config::ServiceConfig;
use crate::sessions::SessionManager;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Keyword lexicon, loaded once.
    pub lexicon: Arc<Lexicon>,

    /// Sentiment collaborator injected into the scorer.
    pub sentiment: Arc<dyn SentimentAnalyzer>,

    /// Prompt pools for anchors and viewpoints.
    pub prompts: Arc<PromptLibrary>,

    /// Session table owned by this transport.
    pub sessions: Arc<SessionManager>,

    /// Service version.
    pub version: String,

    /// Service start time.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Build state with the default lexicon and wordlist sentiment.
    pub fn new(config: &ServiceConfig) -> Self {
        let lexicon = Lexicon::default();
        Self::with_lexicon(config, lexicon)
    }

    /// Build state around a custom lexicon.
    pub fn with_lexicon(config: &ServiceConfig, lexicon: Lexicon) -> Self {
        let sentiment = WordlistSentiment::from_lexicon(&lexicon);
        Self {
            lexicon: Arc::new(lexicon),
            sentiment: Arc::new(sentiment),
            prompts: Arc::new(PromptLibrary::new()),
            sessions: Arc::new(SessionManager::new(config.sessions.clone())),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// Human-readable uptime.
    pub fn uptime(&self) -> String {
        let elapsed = Utc::now() - self.started_at;
        format!("{}s", elapsed.num_seconds().max(0))
    }
}
