//! # alma-types
//!
//! Shared data model for the ALMA Bias Checker.
//!
//! These types form the contract between the pure bias scorer, the
//! per-session cadence tracker, the response assembler, and the transport
//! layer. Nothing in this crate performs I/O or holds mutable state.

#![deny(unsafe_code)]

pub mod bias;
pub mod error;

pub use bias::{BiasReport, CognitiveSignal, EmotionalSignal, PoliticalBias, PoliticalLean};
pub use error::AnalysisError;
