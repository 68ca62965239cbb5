#![allow(dead_code)]

use async_trait::async_trait;
use guitar_tech_signature::application::services::{InsightService, SignatureService};
use guitar_tech_signature::domain::entities::{Guitarist, Source, Technique};
use guitar_tech_signature::domain::{CompletionRequest, Dataset, LanguageModel, ModelError};
use guitar_tech_signature::infrastructure::cache::MemoryCache;
use guitar_tech_signature::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Language model double answering with a fixed reply and counting calls.
pub struct StubModel {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or(ModelError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        })
    }
}

pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![
            Guitarist::new("1", "Jimi Hendrix", "Psychedelic Rock"),
            Guitarist::new("2", "Eddie Van Halen", "Hard Rock"),
            Guitarist::new("3", "Nile Rodgers", "Funk"),
        ],
        vec![
            Technique::new("Power Chords", "Beginner", "Foundational"),
            Technique::new("Bending", "Intermediate", "Expressive"),
            Technique::new("Wah Pedal", "Intermediate", "Textural"),
            Technique::new("Tapping", "Advanced", "Advanced"),
            Technique::new("Legato", "Advanced", "Advanced"),
        ],
        vec![
            Source::new("Jimi Hendrix", "Bending", "0.95", "Purple Haze"),
            Source::new("Jimi Hendrix", "Wah Pedal", "0.9", "Voodoo Child"),
            Source::new("Jimi Hendrix", "Power Chords", "0.6", "Fire"),
            Source::new("Eddie Van Halen", "Tapping", "0.99", "Eruption"),
            Source::new("Eddie Van Halen", "Legato", "0.8", "Runs"),
            Source::new("Eddie Van Halen", "Unknown Trick", "0.5", "Not in the table"),
        ],
    )
}

pub fn create_test_state(model: Arc<StubModel>) -> AppState {
    let cache = Arc::new(MemoryCache::new(Duration::from_secs(3600)));
    let insight_service = Arc::new(InsightService::new(model, cache.clone()));
    let signature_service = Arc::new(SignatureService::new(Arc::new(sample_dataset())));

    AppState::new(insight_service, signature_service, cache, true)
}
