//! # alma-respond
//!
//! Response assembly for the ALMA Bias Checker: the reality reminder and
//! opposing-viewpoint prompt pools, the canned keyword reply tree, and
//! the decision brief template. Pure data and templating — the cadence
//! tracker decides *when* any of this is shown.

#![deny(unsafe_code)]

pub mod prompts;
pub mod reply;

pub use prompts::PromptLibrary;
pub use reply::{generate_reply, DecisionBrief};
