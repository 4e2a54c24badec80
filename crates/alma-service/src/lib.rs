//! # alma-service
//!
//! HTTP transport for the ALMA Bias Checker.
//!
//! The service owns the mapping from session identifier to
//! [`alma_cadence::SessionState`] and serializes access to each session;
//! the analysis core only ever receives the one session relevant to the
//! current call. Scoring itself is shared between the stateless
//! `/analyze` endpoint and the stateful `/chat` endpoint — one scorer,
//! two entry points.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod sessions;
pub mod state;

pub use config::ServiceConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
