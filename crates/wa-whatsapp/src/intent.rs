//! Intent classification for inbound messages
//!
//! A fixed, ordered decision list of regex rules. Rules are evaluated
//! top-down and the first match wins, so precedence is auditable from
//! the table alone.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The classified purpose of an inbound message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Menu,
    Services,
    Pricing,
    CaseStudies,
    Schedule,
    OptOut,
    Fallback,
}

/// Ordered (pattern, intent) pairs. The patterns keep the exact boundary
/// groups the bot has always used; the opt-out rule deliberately matches
/// anywhere in the text.
static RULES: LazyLock<Vec<(Regex, Intent)>> = LazyLock::new(|| {
    vec![
        (rule(r"(^|\b)(1|services?|help)(\b|$)"), Intent::Services),
        (rule(r"(^|\b)(2|pricing|cost|budget)(\b|$)"), Intent::Pricing),
        (rule(r"(^|\b)(3|case|stud(y|ies)|results)(\b|$)"), Intent::CaseStudies),
        (rule(r"(^|\b)(4|schedule|call|meeting)(\b|$)"), Intent::Schedule),
        (rule(r"stop|unsubscribe|cancel"), Intent::OptOut),
    ]
});

fn rule(pattern: &str) -> Regex {
    // Patterns are fixed literals; a compile failure is caught by the tests.
    Regex::new(pattern).unwrap()
}

/// Classify free text into an [`Intent`].
///
/// Pure and deterministic: trims, special-cases empty text to [`Intent::Menu`],
/// lowercases, then walks the rule table first-match-wins.
pub fn classify(text: &str) -> Intent {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Intent::Menu;
    }

    let lower = trimmed.to_lowercase();
    for (pattern, intent) in RULES.iter() {
        if pattern.is_match(&lower) {
            return *intent;
        }
    }

    Intent::Fallback
}
