//! # alma-scorer
//!
//! Pure keyword bias scorer for the ALMA Bias Checker.
//!
//! Maps `(text, Lexicon)` to political, emotional, and cognitive results
//! via case-insensitive substring matching. Every function here is pure
//! and side-effect-free: no I/O, no shared state, safe to call
//! concurrently on independent inputs. The only external collaborator is
//! the injected [`SentimentAnalyzer`], whose failure degrades the
//! sentiment score to a neutral `0.0` instead of aborting the analysis.

#![deny(unsafe_code)]

pub mod cognitive;
pub mod emotional;
pub mod political;
pub mod sentiment;

use alma_lexicon::Lexicon;
use alma_types::{AnalysisError, BiasReport};

pub use cognitive::detect_cognitive_signal;
pub use emotional::detect_emotional_signal;
pub use political::detect_political_bias;
pub use sentiment::{SentimentAnalyzer, SentimentError, WordlistSentiment};

/// Stateless entry point: score one message against the lexicon.
///
/// Rejects empty (or whitespace-only) input before scoring. An empty
/// message is a caller-input error, never a neutral result.
pub fn analyze(
    text: &str,
    lexicon: &Lexicon,
    sentiment: &dyn SentimentAnalyzer,
) -> Result<BiasReport, AnalysisError> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyMessage);
    }

    Ok(BiasReport {
        political: detect_political_bias(text, lexicon),
        emotional: detect_emotional_signal(text, lexicon, sentiment),
        cognitive: detect_cognitive_signal(text, lexicon),
    })
}

/// Collect the phrases present in `lower_text` as substrings, preserving
/// lexicon order. `lower_text` must already be lower-cased.
pub(crate) fn matched_phrases(lower_text: &str, phrases: &[String]) -> Vec<String> {
    phrases
        .iter()
        .filter(|phrase| lower_text.contains(phrase.as_str()))
        .cloned()
        .collect()
}
