//! Assessment scoring engine.
//!
//! Classifies an ordered sequence of raw answers into a severity tier, a
//! numeric score, a narrative result, and a fixed five-entry remedy list.
//! Deterministic and side-effect free: the same answer sequence always
//! produces the same classification.

use serde::{Deserialize, Serialize};

/// Minimum number of answers a submission must carry.
///
/// Enforced by the HTTP validation layer before [`classify`] is called;
/// `classify` itself assumes the precondition and does not re-check it.
pub const MIN_ANSWERS: usize = 5;

/// Severity tier derived from the count of affirmative answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

impl SeverityTier {
    /// Lowercase label used in API responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Low => "low",
            SeverityTier::Medium => "medium",
            SeverityTier::High => "high",
        }
    }
}

const HIGH_NARRATIVE: &str = "Based on your responses, you may be experiencing \
    significant symptoms. Professional support is recommended.";

const MEDIUM_NARRATIVE: &str =
    "You're showing some symptoms that may benefit from attention and self-care.";

const LOW_NARRATIVE: &str =
    "Your responses suggest you're managing well. Continue healthy habits.";

const HIGH_REMEDIES: [&str; 5] = [
    "Consult with a mental health professional",
    "Consider therapy or counseling",
    "Practice daily self-care routines",
    "Reach out to support networks",
    "Consider medication evaluation with a doctor",
];

const MEDIUM_REMEDIES: [&str; 5] = [
    "Practice mindfulness and meditation",
    "Maintain a consistent daily routine",
    "Engage in regular physical activity",
    "Connect with friends and family",
    "Monitor your symptoms over time",
];

const LOW_REMEDIES: [&str; 5] = [
    "Continue with your current healthy routines",
    "Stay connected with your support system",
    "Practice stress management techniques",
    "Regular mental health check-ins",
    "Help others who may be struggling",
];

/// Outcome of classifying one answer sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Narrative result shown to the respondent and persisted verbatim.
    pub narrative: &'static str,
    /// Severity tier from the threshold ladder.
    pub tier: SeverityTier,
    /// Count of affirmative answers.
    pub score: i64,
    /// Fixed remedy list for the tier.
    pub remedies: [&'static str; 5],
}

/// Classify an ordered sequence of raw answers.
///
/// The score is the number of answers equal to `"yes"` case-insensitively;
/// any other value ("no", "unsure", empty) counts as not-yes. The tier is a
/// fixed threshold ladder evaluated high to low: a score of 4 or more is
/// high, 2..=3 is medium, everything below is low. No per-question
/// weighting is applied.
///
/// # Examples
///
/// ```
/// use mindcheck_core::scoring::{classify, SeverityTier};
///
/// let answers = ["yes", "YES", "no", "unsure", "yes"];
/// let outcome = classify(&answers);
/// assert_eq!(outcome.score, 3);
/// assert_eq!(outcome.tier, SeverityTier::Medium);
/// ```
pub fn classify<S: AsRef<str>>(answers: &[S]) -> Classification {
    let score = answers
        .iter()
        .filter(|a| a.as_ref().eq_ignore_ascii_case("yes"))
        .count() as i64;

    if score >= 4 {
        Classification {
            narrative: HIGH_NARRATIVE,
            tier: SeverityTier::High,
            score,
            remedies: HIGH_REMEDIES,
        }
    } else if score >= 2 {
        Classification {
            narrative: MEDIUM_NARRATIVE,
            tier: SeverityTier::Medium,
            score,
            remedies: MEDIUM_REMEDIES,
        }
    } else {
        Classification {
            narrative: LOW_NARRATIVE,
            tier: SeverityTier::Low,
            score,
            remedies: LOW_REMEDIES,
        }
    }
}
