//! Post-generation review of assistant answers.
//!
//! The system instruction already forbids diagnosis and prescription; this
//! is the backstop. Flagged answers are kept and get a reminder appended.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcernCategory {
    Diagnostic,
    Prescriptive,
}

/// A matched phrase in an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concern {
    pub category: ConcernCategory,
    pub description: &'static str,
    pub matched: String,
}

struct SafetyPattern {
    regex: Regex,
    category: ConcernCategory,
    description: &'static str,
}

const PATTERN_SOURCES: &[(&str, ConcernCategory, &str)] = &[
    (
        r"(?i)\byou\s+(?:likely|probably|possibly|definitely|clearly)\s+have\b",
        ConcernCategory::Diagnostic,
        "Speculative diagnosis: 'you probably have'",
    ),
    (
        r"(?i)\byou\s+(?:appear|seem)\s+to\s+have\b",
        ConcernCategory::Diagnostic,
        "Implied diagnosis: 'you appear to have'",
    ),
    (
        r"(?i)\byou\s+are\s+suffering\s+from\b",
        ConcernCategory::Diagnostic,
        "Direct diagnosis: 'you are suffering from'",
    ),
    (
        r"(?i)\bthis\s+(?:means|indicates|confirms)\s+(?:that\s+)?you\s+have\b",
        ConcernCategory::Diagnostic,
        "Indirect diagnosis: 'this means you have'",
    ),
    (
        r"(?i)\byour\s+(?:diagnosis|condition)\s+is\b",
        ConcernCategory::Diagnostic,
        "Condition assertion: 'your diagnosis is'",
    ),
    (
        r"(?i)\byou\s+should\s+(?:take|stop\s+taking|start\s+taking)\b",
        ConcernCategory::Prescriptive,
        "Medication instruction: 'you should take'",
    ),
    (
        r"(?i)\b(?:take|use)\s+\d+\s*(?:mg|milligrams?|ml|tablets?|pills?|capsules?)\b",
        ConcernCategory::Prescriptive,
        "Dosage instruction: 'take 400 mg'",
    ),
    (
        r"(?i)\bI\s+(?:would\s+)?prescribe\b",
        ConcernCategory::Prescriptive,
        "Prescription: 'I prescribe'",
    ),
    (
        r"(?i)\bthe\s+(?:best|right|recommended)\s+treatment\s+(?:for\s+you\s+)?(?:is|would\s+be)\b",
        ConcernCategory::Prescriptive,
        "Treatment recommendation: 'the best treatment is'",
    ),
];

static PATTERNS: LazyLock<Vec<SafetyPattern>> = LazyLock::new(|| {
    PATTERN_SOURCES
        .iter()
        .filter_map(|&(source, category, description)| match Regex::new(source) {
            Ok(regex) => Some(SafetyPattern {
                regex,
                category,
                description,
            }),
            Err(e) => {
                tracing::error!(description, error = %e, "Skipping invalid safety pattern");
                None
            }
        })
        .collect()
});

pub const SAFETY_REMINDER: &str = "Please remember: I can only share general oral health \
information. I can't diagnose conditions or recommend treatment, so please see a qualified \
dentist or visit your nearest public clinic about your specific situation.";

/// Every concerning phrase in `text`, in pattern order.
pub fn review(text: &str) -> Vec<Concern> {
    PATTERNS
        .iter()
        .filter_map(|p| {
            p.regex.find(text).map(|m| Concern {
                category: p.category,
                description: p.description,
                matched: m.as_str().to_string(),
            })
        })
        .collect()
}

/// The answer as shown to the user: unchanged when clean, otherwise with
/// the reminder appended as its own paragraph.
pub fn with_reminder(text: &str) -> String {
    let concerns = review(text);
    if concerns.is_empty() {
        return text.to_string();
    }
    tracing::warn!(
        count = concerns.len(),
        first = concerns[0].description,
        "Assistant answer flagged by safety review"
    );
    format!("{}\n\n{SAFETY_REMINDER}", text.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        assert_eq!(PATTERNS.len(), PATTERN_SOURCES.len());
    }

    #[test]
    fn educational_answer_is_clean() {
        let text = "Brush twice a day for two minutes with a fluoride toothpaste, and floss \
                    once a day. If your gums bleed often, it is a good idea to see a dentist.";
        assert!(review(text).is_empty());
        assert_eq!(with_reminder(text), text);
    }

    #[test]
    fn diagnostic_phrasing_is_flagged() {
        let concerns = review("From what you describe, you probably have gingivitis.");
        assert_eq!(concerns.len(), 1);
        assert_eq!(concerns[0].category, ConcernCategory::Diagnostic);
        assert_eq!(concerns[0].matched, "you probably have");
    }

    #[test]
    fn dosage_is_flagged() {
        let concerns = review("Take 400 mg of ibuprofen every six hours.");
        assert!(concerns
            .iter()
            .any(|c| c.category == ConcernCategory::Prescriptive));
    }

    #[test]
    fn reminder_is_appended_once() {
        let shown = with_reminder("This means you have an abscess.\n");
        assert!(shown.starts_with("This means you have an abscess.\n\n"));
        assert!(shown.ends_with(SAFETY_REMINDER));
        assert_eq!(shown.matches(SAFETY_REMINDER).count(), 1);
    }
}
