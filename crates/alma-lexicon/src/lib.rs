//! # alma-lexicon
//!
//! Categorized keyword lexicon for the ALMA Bias Checker.
//!
//! The lexicon is pure configuration data: ordered lists of lower-case
//! phrases per bias category, plus the weighted word list that feeds the
//! built-in sentiment analyzer. It carries no behavior beyond loading and
//! validation. Phrase order is significant — matched-word output preserves
//! lexicon order — so lists are `Vec<String>`, not sets.
//!
//! Phrases are compared via case-insensitive substring containment against
//! the input text. There is no tokenization and no word-boundary
//! enforcement: a phrase matches even inside a larger word.

#![deny(unsafe_code)]

use alma_types::AnalysisError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single weighted entry in the sentiment word list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentWeight {
    pub phrase: String,
    pub weight: f64,
}

impl SentimentWeight {
    pub fn new(phrase: impl Into<String>, weight: f64) -> Self {
        Self {
            phrase: phrase.into(),
            weight,
        }
    }
}

/// Categorized keyword sets, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Left-leaning political phrases.
    pub political_left: Vec<String>,
    /// Right-leaning political phrases.
    pub political_right: Vec<String>,
    /// Centrist political phrases.
    pub political_center: Vec<String>,
    /// Emotional-content phrases.
    pub emotional: Vec<String>,
    /// Cognitive-absolutism phrases.
    pub cognitive: Vec<String>,
    /// Weighted word list for the built-in sentiment analyzer.
    #[serde(default)]
    pub sentiment_weights: Vec<SentimentWeight>,
}

impl Lexicon {
    /// Load a lexicon from JSON, normalizing and validating it.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let lexicon: Lexicon = serde_json::from_str(json)
            .map_err(|e| AnalysisError::InvalidLexicon(e.to_string()))?;
        lexicon.normalized()
    }

    /// Lower-case and de-duplicate every phrase list (preserving first
    /// occurrence order), then validate.
    pub fn normalized(mut self) -> Result<Self, AnalysisError> {
        for list in [
            &mut self.political_left,
            &mut self.political_right,
            &mut self.political_center,
            &mut self.emotional,
            &mut self.cognitive,
        ] {
            normalize_phrases(list);
        }
        for entry in &mut self.sentiment_weights {
            entry.phrase = entry.phrase.trim().to_lowercase();
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        let categories = [
            ("political_left", &self.political_left),
            ("political_right", &self.political_right),
            ("political_center", &self.political_center),
            ("emotional", &self.emotional),
            ("cognitive", &self.cognitive),
        ];
        for (name, list) in categories {
            if list.is_empty() {
                return Err(AnalysisError::InvalidLexicon(format!(
                    "phrase list '{name}' is empty"
                )));
            }
            if let Some(blank) = list.iter().find(|p| p.is_empty()) {
                return Err(AnalysisError::InvalidLexicon(format!(
                    "phrase list '{name}' contains a blank phrase: {blank:?}"
                )));
            }
        }
        debug!(
            left = self.political_left.len(),
            right = self.political_right.len(),
            center = self.political_center.len(),
            emotional = self.emotional.len(),
            cognitive = self.cognitive.len(),
            "Lexicon validated"
        );
        Ok(())
    }
}

fn normalize_phrases(list: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    let mut normalized = Vec::with_capacity(list.len());
    for phrase in list.drain(..) {
        let phrase = phrase.trim().to_lowercase();
        if seen.insert(phrase.clone()) {
            normalized.push(phrase);
        }
    }
    *list = normalized;
}

impl Default for Lexicon {
    /// The built-in keyword configuration.
    fn default() -> Self {
        Self {
            political_left: vec![
                "progressive".into(),
                "liberal".into(),
                "democrat".into(),
                "socialist".into(),
                "equality".into(),
                "social justice".into(),
                "climate change".into(),
                "healthcare".into(),
                "minimum wage".into(),
            ],
            political_right: vec![
                "conservative".into(),
                "republican".into(),
                "libertarian".into(),
                "free market".into(),
                "traditional".into(),
                "patriot".into(),
                "national security".into(),
                "tax cuts".into(),
                "small government".into(),
            ],
            political_center: vec![
                "moderate".into(),
                "bipartisan".into(),
                "compromise".into(),
                "balanced".into(),
                "pragmatic".into(),
            ],
            emotional: vec![
                "sad".into(),
                "lonely".into(),
                "anxious".into(),
                "depressed".into(),
                "hopeless".into(),
                "overwhelmed".into(),
                "stressed".into(),
                "worried".into(),
                "fearful".into(),
            ],
            cognitive: vec![
                "always".into(),
                "never".into(),
                "everyone".into(),
                "nobody".into(),
                "impossible".into(),
                "guaranteed".into(),
                "certain".into(),
                "definitely".into(),
                "absolutely".into(),
            ],
            sentiment_weights: default_sentiment_weights(),
        }
    }
}

/// AFINN-style weighted word list covering the vocabulary the checker is
/// most likely to see. Negative weights dominate because the emotional
/// lexicon skews toward distress terms.
fn default_sentiment_weights() -> Vec<SentimentWeight> {
    [
        ("sad", -2.0),
        ("lonely", -2.0),
        ("anxious", -2.0),
        ("depressed", -2.0),
        ("hopeless", -2.0),
        ("overwhelmed", -2.0),
        ("stressed", -2.0),
        ("worried", -3.0),
        ("fearful", -2.0),
        ("terrible", -3.0),
        ("awful", -3.0),
        ("horrible", -3.0),
        ("hate", -3.0),
        ("miserable", -3.0),
        ("worthless", -3.0),
        ("crying", -2.0),
        ("afraid", -2.0),
        ("angry", -3.0),
        ("upset", -2.0),
        ("hurt", -2.0),
        ("pain", -2.0),
        ("alone", -2.0),
        ("tired", -2.0),
        ("happy", 3.0),
        ("glad", 3.0),
        ("good", 3.0),
        ("great", 3.0),
        ("love", 3.0),
        ("nice", 3.0),
        ("wonderful", 4.0),
        ("amazing", 4.0),
        ("excellent", 3.0),
        ("hope", 2.0),
        ("calm", 2.0),
        ("better", 2.0),
        ("support", 2.0),
        ("grateful", 3.0),
        ("excited", 3.0),
    ]
    .into_iter()
    .map(|(phrase, weight)| SentimentWeight::new(phrase, weight))
    .collect()
}
