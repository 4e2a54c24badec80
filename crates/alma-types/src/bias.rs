use serde::{Deserialize, Serialize};

/// Detected political lean of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliticalLean {
    Left,
    Right,
    Center,
    Neutral,
}

impl PoliticalLean {
    /// True for Left and Right, false for Center and Neutral.
    pub fn is_directional(&self) -> bool {
        matches!(self, PoliticalLean::Left | PoliticalLean::Right)
    }
}

impl std::fmt::Display for PoliticalLean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PoliticalLean::Left => "left",
            PoliticalLean::Right => "right",
            PoliticalLean::Center => "center",
            PoliticalLean::Neutral => "neutral",
        };
        write!(f, "{s}")
    }
}

/// Political bias result.
///
/// `score` is the magnitude of lean in `[-1, 1]` and is always `0.0` for
/// `Center` and `Neutral`. Both fields are determined deterministically
/// from distinct keyword counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoliticalBias {
    pub lean: PoliticalLean,
    pub score: f64,
}

impl PoliticalBias {
    pub fn neutral() -> Self {
        Self {
            lean: PoliticalLean::Neutral,
            score: 0.0,
        }
    }

    pub fn new(lean: PoliticalLean, score: f64) -> Self {
        Self { lean, score }
    }
}

/// Emotional content signal.
///
/// `matched` preserves lexicon order, not input order. `sentiment_score`
/// comes from the injected sentiment collaborator and degrades to `0.0`
/// when that collaborator fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalSignal {
    pub has_emotional_content: bool,
    pub matched: Vec<String>,
    pub sentiment_score: f64,
}

impl EmotionalSignal {
    pub fn empty() -> Self {
        Self {
            has_emotional_content: false,
            matched: Vec::new(),
            sentiment_score: 0.0,
        }
    }
}

/// Cognitive absolutism signal ("always", "never", "everyone", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveSignal {
    pub has_absolute_language: bool,
    pub matched: Vec<String>,
}

impl CognitiveSignal {
    pub fn empty() -> Self {
        Self {
            has_absolute_language: false,
            matched: Vec::new(),
        }
    }
}

/// Full per-message analysis produced by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub political: PoliticalBias,
    pub emotional: EmotionalSignal,
    pub cognitive: CognitiveSignal,
}
