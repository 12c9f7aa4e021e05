//! Register (tu / vous) detection.
//!
//! [`analyze_politeness`] counts formal and informal markers among the
//! normalized tokens of a text and reports which register dominates.
//! Each token is compared against each marker on its own, so the
//! multi-word entries (`s'il vous plaît`) never match a single token and
//! only the bare pronoun inside them counts.

use serde::Serialize;

use crate::text::normalize;

// ---------------------------------------------------------------------------
// Marker tables
// ---------------------------------------------------------------------------

static FORMAL_MARKERS: &[&str] = &[
    "vous",
    "monsieur",
    "madame",
    "mademoiselle",
    "s'il vous plaît",
    "veuillez",
];

static INFORMAL_MARKERS: &[&str] = &["tu", "s'il te plaît"];

// ---------------------------------------------------------------------------
// PolitenessLevel / PolitenessReport
// ---------------------------------------------------------------------------

/// Dominant register of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolitenessLevel {
    Formal,
    Informal,
    /// Equal marker counts, including none at all.
    Mixed,
}

impl PolitenessLevel {
    fn advice(self) -> &'static str {
        match self {
            PolitenessLevel::Formal => "Perfect! You're using formal register appropriately.",
            PolitenessLevel::Informal => {
                "Good use of informal register. Remember to use 'vous' in formal situations."
            }
            PolitenessLevel::Mixed => {
                "Consider the context: use 'vous' for formal situations, 'tu' for informal ones."
            }
        }
    }
}

/// Result of [`analyze_politeness`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolitenessReport {
    pub level: PolitenessLevel,
    /// One advisory sentence for the detected level.
    pub suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classify the register of `text`.
///
/// ```
/// use voice_tutor::feedback::{analyze_politeness, PolitenessLevel};
///
/// let report = analyze_politeness("Bonjour madame, pouvez-vous m'aider?");
/// assert_eq!(report.level, PolitenessLevel::Formal);
///
/// let report = analyze_politeness("Salut, tu viens?");
/// assert_eq!(report.level, PolitenessLevel::Informal);
/// ```
pub fn analyze_politeness(text: &str) -> PolitenessReport {
    let tokens = normalize(text);
    let formal = count_markers(&tokens, FORMAL_MARKERS);
    let informal = count_markers(&tokens, INFORMAL_MARKERS);

    let level = if formal > informal {
        PolitenessLevel::Formal
    } else if informal > formal {
        PolitenessLevel::Informal
    } else {
        PolitenessLevel::Mixed
    };
    log::debug!("Politeness: formal={formal} informal={informal} → {level:?}");

    PolitenessReport {
        level,
        suggestions: vec![level.advice().to_string()],
    }
}

/// Number of tokens equal to one of `markers`.
fn count_markers(tokens: &[String], markers: &[&str]) -> usize {
    tokens
        .iter()
        .filter(|token| markers.contains(&token.as_str()))
        .count()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
