use thiserror::Error;

/// Errors from the analysis core.
///
/// All of these are per-request failures. Nothing here is fatal to the
/// process, and none of them may corrupt another session's state.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Caller supplied an empty (or whitespace-only) message. Rejected
    /// before scoring — never silently scored as neutral.
    #[error("message text is empty")]
    EmptyMessage,

    /// Lexicon failed validation.
    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),
}
