//! # alma-cadence
//!
//! Per-session cadence tracking for the ALMA Bias Checker.
//!
//! Layers time- and count-based behavioral triggers on top of per-message
//! bias scores: the periodic reality anchor, the time-gated opposing
//! viewpoint injection, and the human-connection offer. This is the only
//! stateful part of the analysis core; the state is two monotonic
//! counters inside [`SessionState`], owned by the transport and passed in
//! per call.
//!
//! A session is single-writer: exactly one logical stream of inbound
//! messages, processed strictly in arrival order. Distinct sessions are
//! fully independent. The tracker never reads the clock or a random
//! source itself — both are injected by the caller.

#![deny(unsafe_code)]

pub mod session;
pub mod tracker;

pub use session::SessionState;
pub use tracker::{
    advance, should_inject_viewpoint, should_offer_human_connection,
    should_show_reality_anchor, AdvanceOutcome, PromptSource, ViewpointInjection,
    HUMAN_CONNECTION_SENTIMENT_GATE, INJECTION_FADE_MS, LEAN_SCORE_GATE,
    REALITY_ANCHOR_INTERVAL, VIEWPOINT_WINDOW_MS,
};
