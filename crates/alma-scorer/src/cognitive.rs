use alma_lexicon::Lexicon;
use alma_types::CognitiveSignal;

use crate::matched_phrases;

/// Detect cognitive-absolutism language ("always", "never", "everyone", ...).
pub fn detect_cognitive_signal(text: &str, lexicon: &Lexicon) -> CognitiveSignal {
    let lower = text.to_lowercase();
    let matched = matched_phrases(&lower, &lexicon.cognitive);

    CognitiveSignal {
        has_absolute_language: !matched.is_empty(),
        matched,
    }
}
