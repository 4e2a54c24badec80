use alma_lexicon::Lexicon;
use alma_types::EmotionalSignal;
use tracing::warn;

use crate::matched_phrases;
use crate::sentiment::SentimentAnalyzer;

/// Detect emotional content and attach the collaborator's sentiment score.
///
/// Matched phrases come back in lexicon order, not input order. A failing
/// sentiment collaborator is a soft failure: the signal still carries the
/// keyword matches, with `sentiment_score` degraded to `0.0`.
pub fn detect_emotional_signal(
    text: &str,
    lexicon: &Lexicon,
    sentiment: &dyn SentimentAnalyzer,
) -> EmotionalSignal {
    let lower = text.to_lowercase();
    let matched = matched_phrases(&lower, &lexicon.emotional);

    let sentiment_score = match sentiment.score(text) {
        Ok(score) => score,
        Err(err) => {
            warn!(error = %err, "Sentiment collaborator failed, degrading to neutral score");
            0.0
        }
    };

    EmotionalSignal {
        has_emotional_content: !matched.is_empty(),
        matched,
        sentiment_score,
    }
}
