use alma_types::{EmotionalSignal, PoliticalBias, PoliticalLean};
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::session::SessionState;

/// The reality anchor fires on every Nth message.
pub const REALITY_ANCHOR_INTERVAL: u64 = 5;

/// Minimum elapsed time between viewpoint injections for one session.
pub const VIEWPOINT_WINDOW_MS: i64 = 25_000;

/// Minimum lean magnitude before a viewpoint injection is considered.
pub const LEAN_SCORE_GATE: f64 = 0.3;

/// How long the consuming UI displays an injection before auto-dismissal.
pub const INJECTION_FADE_MS: u64 = 5_000;

/// Sentiment score below which emotional content triggers the
/// human-connection offer.
pub const HUMAN_CONNECTION_SENTIMENT_GATE: f64 = -2.0;

/// Injected source of anchor and viewpoint text.
///
/// Selection is uniform random with independent draws — repeats across
/// anchors are allowed. Implementations key the viewpoint pool on the
/// stance *opposite* to the detected lean.
pub trait PromptSource {
    fn reality_anchor(&self, rng: &mut dyn RngCore) -> String;
    fn opposing_viewpoint(&self, lean: PoliticalLean, rng: &mut dyn RngCore) -> String;
}

/// An opposing-viewpoint prompt accepted for display.
///
/// Advisory and transient: the consuming UI shows it and auto-dismisses
/// after `fade_after_ms`, independent of further messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewpointInjection {
    pub text: String,
    pub original_bias: PoliticalBias,
    pub fade_after_ms: u64,
}

/// Triggers emitted for one inbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceOutcome {
    pub show_anchor: bool,
    pub anchor_text: Option<String>,
    pub injection: Option<ViewpointInjection>,
    pub offer_human_connection: bool,
}

/// True on every 5th, 10th, 15th, ... message of a session.
///
/// Assumes [`SessionState::record_message`] already ran for the current
/// message.
pub fn should_show_reality_anchor(session: &SessionState) -> bool {
    session.query_count % REALITY_ANCHOR_INTERVAL == 0
}

/// True iff the injection window has elapsed, the message leans somewhere,
/// and the lean magnitude clears the gate.
pub fn should_inject_viewpoint(
    session: &SessionState,
    political: &PoliticalBias,
    now: DateTime<Utc>,
) -> bool {
    let elapsed_ms = (now - session.last_viewpoint_injection).num_milliseconds();
    elapsed_ms > VIEWPOINT_WINDOW_MS
        && political.lean != PoliticalLean::Neutral
        && political.score.abs() > LEAN_SCORE_GATE
}

/// True iff the message carries emotional content and the sentiment score
/// is below the connection gate.
pub fn should_offer_human_connection(emotional: &EmotionalSignal) -> bool {
    emotional.has_emotional_content
        && emotional.sentiment_score < HUMAN_CONNECTION_SENTIMENT_GATE
}

/// Stateful entry point: consume one inbound message's scores, mutate the
/// session, and emit triggers.
///
/// The message counter advances exactly once, here, before any trigger is
/// evaluated. `last_viewpoint_injection` has exactly one writer — this
/// function, when the injection trigger fires — so the trigger can never
/// double-fire within one window.
pub fn advance(
    session: &mut SessionState,
    political: &PoliticalBias,
    emotional: &EmotionalSignal,
    now: DateTime<Utc>,
    rng: &mut dyn RngCore,
    prompts: &dyn PromptSource,
) -> AdvanceOutcome {
    session.record_message();

    let show_anchor = should_show_reality_anchor(session);
    let anchor_text = if show_anchor {
        let text = prompts.reality_anchor(rng);
        info!(query_count = session.query_count, "Reality anchor shown");
        Some(text)
    } else {
        None
    };

    let injection = if should_inject_viewpoint(session, political, now) {
        session.last_viewpoint_injection = now;
        let text = prompts.opposing_viewpoint(political.lean, rng);
        info!(lean = %political.lean, score = political.score, "Opposing viewpoint injected");
        Some(ViewpointInjection {
            text,
            original_bias: *political,
            fade_after_ms: INJECTION_FADE_MS,
        })
    } else {
        None
    };

    let offer_human_connection = should_offer_human_connection(emotional);
    if offer_human_connection {
        info!(
            sentiment = emotional.sentiment_score,
            "Human connection offered"
        );
    }

    debug!(
        query_count = session.query_count,
        show_anchor,
        injected = injection.is_some(),
        offer_human_connection,
        "Session advanced"
    );

    AdvanceOutcome {
        show_anchor,
        anchor_text,
        injection,
        offer_human_connection,
    }
}
