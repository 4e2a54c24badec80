//! Request handlers.
//!
//! Both entry points go through the same scorer: `/analyze` is the
//! stateless one, `/chat` layers the cadence tracker and reply assembly
//! on top.

use alma_cadence::{advance, AdvanceOutcome, SessionState, ViewpointInjection};
use alma_respond::{generate_reply, DecisionBrief};
use alma_types::BiasReport;
use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
    pub active_sessions: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
        active_sessions: state.sessions.len(),
    })
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: BiasReport,
    pub timestamp: DateTime<Utc>,
}

/// Stateless bias analysis: score one message, no session involved.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let report = alma_scorer::analyze(&req.text, &state.lexicon, state.sentiment.as_ref())?;
    Ok(Json(AnalyzeResponse {
        report,
        timestamp: Utc::now(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Server-side session to advance. Omit to start a new one.
    pub session_id: Option<String>,
    /// Caller-carried counter for stateless operation (no server-side
    /// session is created or consulted).
    pub query_count: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub biases: BiasReport,
    pub query_count: u64,
    /// Present unless the call ran in stateless mode.
    pub session_id: Option<String>,
    pub show_reality_anchor: bool,
    pub reality_anchor: Option<String>,
    pub viewpoint_injection: Option<ViewpointInjection>,
    pub human_connection: bool,
    pub decision_brief: DecisionBrief,
    pub timestamp: DateTime<Utc>,
}

/// Stateful chat: score the message, advance the session cadence, and
/// assemble the reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let now = Utc::now();
    let report = alma_scorer::analyze(&req.message, &state.lexicon, state.sentiment.as_ref())?;
    let mut rng = rand::thread_rng();

    let (outcome, query_count, session_id) = match (req.session_id, req.query_count) {
        // Stateless mode: reconstruct from the caller's counter.
        (None, Some(count)) => {
            let mut session = SessionState::from_query_count(count, now);
            let outcome = advance(
                &mut session,
                &report.political,
                &report.emotional,
                now,
                &mut rng,
                state.prompts.as_ref(),
            );
            (outcome, session.query_count, None)
        }
        // Session mode: use the given session or start a new one.
        (session_id, _) => {
            let id = match session_id {
                Some(id) => id,
                None => state.sessions.create_session(now)?,
            };
            let (outcome, count) = state.sessions.with_session(&id, now, |session| {
                let outcome = advance(
                    session,
                    &report.political,
                    &report.emotional,
                    now,
                    &mut rng,
                    state.prompts.as_ref(),
                );
                (outcome, session.query_count)
            })?;
            (outcome, count, Some(id))
        }
    };

    let reply = generate_reply(&req.message, &report, outcome.offer_human_connection, now);

    Ok(Json(build_chat_response(
        reply,
        report,
        outcome,
        query_count,
        session_id,
        now,
    )))
}

fn build_chat_response(
    message: String,
    biases: BiasReport,
    outcome: AdvanceOutcome,
    query_count: u64,
    session_id: Option<String>,
    timestamp: DateTime<Utc>,
) -> ChatResponse {
    ChatResponse {
        message,
        biases,
        query_count,
        session_id,
        show_reality_anchor: outcome.show_anchor,
        reality_anchor: outcome.anchor_text,
        viewpoint_injection: outcome.injection,
        human_connection: outcome.offer_human_connection,
        decision_brief: DecisionBrief::default(),
        timestamp,
    }
}

/// End a conversation and destroy its session state.
pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    state.sessions.end_session(&id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message_id: Option<String>,
}

/// Accept user feedback. Logged only — there is no persistent store.
pub async fn feedback(Json(req): Json<FeedbackRequest>) -> Json<serde_json::Value> {
    info!(
        kind = req.kind.as_deref().unwrap_or("unspecified"),
        message_id = req.message_id.as_deref().unwrap_or("-"),
        feedback = %req.feedback,
        "Feedback received"
    );
    Json(serde_json::json!({ "success": true, "message": "Feedback recorded" }))
}
