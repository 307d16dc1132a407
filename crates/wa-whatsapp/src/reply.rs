//! Canned reply copy
//!
//! Pure mapping from [`Intent`] to the fixed marketing copy, one slice of
//! lines per intent. No logic beyond the lookup.

use crate::intent::Intent;

const MENU: &[&str] = &[
    "Hi! I’m Clevrly’s WhatsApp assistant.",
    "Reply with:",
    "1) Services",
    "2) Pricing",
    "3) Case studies",
    "4) Schedule a call",
];

const SERVICES: &[&str] = &[
    "Here’s what we can help with:",
    "- Strategy (offer, positioning, funnel)",
    "- Creative & design (ads, landing pages)",
    "- Performance marketing (Meta/Google, CRO, analytics)",
    "",
    "What are you trying to achieve this quarter?",
];

const PRICING: &[&str] = &[
    "Pricing depends on scope (channels + creative + landing pages).",
    "Share:",
    "- Your website",
    "- Monthly ad spend (range)",
    "- Goal (leads/sales/ROAS)",
    "",
    "And I’ll suggest the best package.",
];

const CASE_STUDIES: &[&str] = &[
    "We can share relevant examples once we know your business.",
    "What industry are you in and what’s your average order value (if ecom)?",
];

const SCHEDULE: &[&str] = &[
    "Great—tell me:",
    "1) Your name",
    "2) Your timezone",
    "3) 2 preferred time slots",
    "",
    "And we’ll confirm a call.",
];

const OPT_OUT: &[&str] = &["Understood. Reply START anytime to resume."];

const FALLBACK: &[&str] = &[
    "Got it.",
    "Quick questions so we can help:",
    "1) What do you sell?",
    "2) What’s your goal (leads/sales/ROAS)?",
    "3) What’s your monthly budget range?",
];

/// The reply lines for an intent
pub fn lines(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Menu => MENU,
        Intent::Services => SERVICES,
        Intent::Pricing => PRICING,
        Intent::CaseStudies => CASE_STUDIES,
        Intent::Schedule => SCHEDULE,
        Intent::OptOut => OPT_OUT,
        Intent::Fallback => FALLBACK,
    }
}

/// Compose the reply text for an intent, joining lines with newlines
pub fn compose(intent: Intent) -> String {
    lines(intent).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_copy() {
        let text = compose(Intent::Menu);
        assert!(text.starts_with("Hi! I’m Clevrly’s WhatsApp assistant.\n"));
        assert!(text.ends_with("4) Schedule a call"));
    }

    #[test]
    fn test_opt_out_is_single_line() {
        assert_eq!(compose(Intent::OptOut), "Understood. Reply START anytime to resume.");
    }

    #[test]
    fn test_every_intent_has_copy() {
        for intent in [
            Intent::Menu,
            Intent::Services,
            Intent::Pricing,
            Intent::CaseStudies,
            Intent::Schedule,
            Intent::OptOut,
            Intent::Fallback,
        ] {
            assert!(!lines(intent).is_empty());
        }
    }

    #[test]
    fn test_services_copy() {
        let text = compose(Intent::Services);
        assert!(text.contains("Creative & design (ads, landing pages)"));
        assert!(text.ends_with("What are you trying to achieve this quarter?"));
    }

    #[test]
    fn test_fallback_copy() {
        let text = compose(Intent::Fallback);
        assert!(text.starts_with("Got it.\n"));
        assert!(text.contains("3) What’s your monthly budget range?"));
    }
}
