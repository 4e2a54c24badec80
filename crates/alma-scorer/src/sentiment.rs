use std::collections::HashMap;

use alma_lexicon::Lexicon;
use thiserror::Error;

/// Errors from a sentiment collaborator.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("sentiment analyzer unavailable: {0}")]
    Unavailable(String),
}

/// Injected sentiment-scoring collaborator.
///
/// The scorer consumes the score as an opaque signal; it never retries or
/// times out a slow collaborator — that responsibility belongs to the
/// caller.
pub trait SentimentAnalyzer: Send + Sync {
    fn score(&self, text: &str) -> Result<f64, SentimentError>;
}

/// Weighted-wordlist sentiment analyzer.
///
/// Sums the configured weight of every token occurrence in the text,
/// AFINN style. Tokens are maximal alphabetic runs, lower-cased. This is
/// the default collaborator wired in by the transport.
#[derive(Debug, Clone)]
pub struct WordlistSentiment {
    weights: HashMap<String, f64>,
}

impl WordlistSentiment {
    pub fn new(weights: HashMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Build from the lexicon's sentiment word list.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let weights = lexicon
            .sentiment_weights
            .iter()
            .map(|entry| (entry.phrase.clone(), entry.weight))
            .collect();
        Self { weights }
    }
}

impl SentimentAnalyzer for WordlistSentiment {
    fn score(&self, text: &str) -> Result<f64, SentimentError> {
        let total = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|token| !token.is_empty())
            .map(|token| {
                self.weights
                    .get(token.to_lowercase().as_str())
                    .copied()
                    .unwrap_or(0.0)
            })
            .sum();
        Ok(total)
    }
}

/// Collaborator returning a fixed score, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSentiment(f64);

impl FixedSentiment {
    pub fn new(score: f64) -> Self {
        Self(score)
    }
}

impl SentimentAnalyzer for FixedSentiment {
    fn score(&self, _text: &str) -> Result<f64, SentimentError> {
        Ok(self.0)
    }
}
