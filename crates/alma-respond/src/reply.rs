use alma_types::{BiasReport, PoliticalLean};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed decision-brief template attached to every chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionBrief {
    pub what_we_know: String,
    pub what_we_think: String,
    pub what_we_dont_know: String,
    pub how_to_find_out: String,
}

impl Default for DecisionBrief {
    fn default() -> Self {
        Self {
            what_we_know: "Based on our conversation so far...".to_string(),
            what_we_think: "I'm inferring that...".to_string(),
            what_we_dont_know: "I'm not certain about...".to_string(),
            how_to_find_out: "To better understand this, you could...".to_string(),
        }
    }
}

/// Assemble the canned reply for a message.
///
/// A keyword selection tree over the lower-cased message, falling back to
/// emotional support, then political awareness, then a generic template.
/// Appends the absolute-language nuance note and, when the cadence
/// tracker fired the trigger, the human-connection suffix.
pub fn generate_reply(
    message: &str,
    report: &BiasReport,
    offer_human_connection: bool,
    now: DateTime<Utc>,
) -> String {
    let lower = message.to_lowercase();

    let mut reply = if contains_any(&lower, &["hello", "hi", "hey"]) {
        "Hello! I'm ALMA, your AI assistant with built-in bias detection. I'm here to help you think through ideas while staying grounded in reality. What would you like to explore today?".to_string()
    } else if contains_any(&lower, &["help", "what can you do"]) {
        "I can help you with a wide range of topics while monitoring for biases and keeping our conversation grounded. I'll show you reality anchors every 5 queries, detect political/emotional/cognitive biases, and help prevent echo chambers by occasionally sharing different perspectives.".to_string()
    } else if lower.contains("weather") {
        "I don't have access to real-time weather data, but I can help you think about weather patterns, climate science, or how weather affects different aspects of life. What specifically about weather interests you?".to_string()
    } else if contains_any(&lower, &["time", "date"]) {
        format!(
            "The current time is {} UTC. I can help you with time-related questions, scheduling, or temporal reasoning. What would you like to know about time?",
            now.format("%H:%M:%S on %Y-%m-%d")
        )
    } else if contains_any(&lower, &["math", "calculate", "solve"]) {
        "I can help with mathematical concepts, problem-solving approaches, and logical reasoning. I'll walk through problems step-by-step and help you understand the underlying principles. What mathematical topic or problem would you like to explore?".to_string()
    } else if lower.contains("history") {
        "I can discuss historical events, patterns, and their implications. I'll present multiple perspectives and help you understand the complexity of historical narratives. What historical topic interests you?".to_string()
    } else if lower.contains("science") {
        "I love exploring scientific topics! I can help explain concepts, discuss research findings, and think through scientific reasoning. I'll make sure to distinguish between established facts and theories. What scientific question do you have?".to_string()
    } else if lower.contains("philosophy") {
        "Philosophy is fascinating! I can help explore ethical questions, logical reasoning, and different philosophical perspectives. I'll present various viewpoints to help you think through complex moral and conceptual issues.".to_string()
    } else if contains_any(&lower, &["advice", "should i"]) {
        "I can help you think through decisions by exploring different perspectives and potential outcomes. I'll present various viewpoints and help you consider factors you might not have thought of. Remember, I'm not a replacement for professional advice in specialized areas.".to_string()
    } else if contains_any(&lower, &["creative", "write", "story"]) {
        "I enjoy creative collaboration! I can help brainstorm ideas, develop characters, explore narrative structures, or work on various creative projects. What kind of creative endeavor interests you?".to_string()
    } else if contains_any(&lower, &["programming", "code"]) {
        "I can help with programming concepts, debugging, algorithm design, and software development best practices. I'll explain code, suggest improvements, and help you think through programming challenges. What programming topic would you like to explore?".to_string()
    } else if report.emotional.has_emotional_content {
        "I notice you might be going through something difficult. I'm here to listen and help you think through whatever you're dealing with. While I can provide perspective and support, remember that I'm an AI assistant - for serious emotional or mental health concerns, connecting with a human professional or trusted person in your life is important.".to_string()
    } else if report.political.lean != PoliticalLean::Neutral {
        format!(
            "I can see you're interested in {}-leaning perspectives on this topic. I'll do my best to provide balanced information and help you consider multiple viewpoints, including perspectives that might differ from your current stance. What specific aspect would you like to explore?",
            report.political.lean
        )
    } else {
        format!(
            "That's an interesting question about \"{message}\". Let me help you think through this systematically. I'll explore different angles and help you consider various perspectives while we discuss this topic."
        )
    };

    if report.cognitive.has_absolute_language {
        reply.push_str("\n\nI notice you used some absolute language - it's worth considering that most situations have nuance and exceptions.");
    }

    if offer_human_connection {
        reply.push_str(" I notice you might be going through a difficult time. Would you like to connect with someone you know?");
    }

    reply
}

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| lower.contains(needle))
}
