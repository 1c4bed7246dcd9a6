use crate::ErrorSpan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Option enums sent as lowercase-ish wire names, parseable from the CLI.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? } default $default:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .copied()
                    .ok_or_else(|| {
                        let known: Vec<_> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        format!("Unknown value '{}' (expected one of: {})", s, known.join(", "))
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(ParaphraseStyle {
    Standard => "standard",
    Formal => "formal",
    Casual => "casual",
    Creative => "creative",
} default Standard);

wire_enum!(CitationStyle {
    Apa => "APA",
    Mla => "MLA",
    Chicago => "Chicago",
    Harvard => "Harvard",
} default Apa);

wire_enum!(EssayHelpType {
    Structure => "structure",
    Thesis => "thesis",
    Transitions => "transitions",
    Conclusion => "conclusion",
} default Structure);

wire_enum!(RewriteStyle {
    Improve => "improve",
    Formal => "formal",
    Casual => "casual",
    Concise => "concise",
} default Improve);

wire_enum!(Tone {
    Professional => "professional",
    Friendly => "friendly",
    Assertive => "assertive",
    Diplomatic => "diplomatic",
} default Professional);

wire_enum!(EmailType {
    Professional => "professional",
    Casual => "casual",
    FollowUp => "follow-up",
} default Professional);

// Requests

#[derive(Debug, Serialize)]
pub(crate) struct TextRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct StyledRequest<'a, S: Serialize> {
    pub text: &'a str,
    pub style: S,
}

#[derive(Debug, Serialize)]
pub(crate) struct EssayRequest<'a> {
    pub text: &'a str,
    #[serde(rename = "type")]
    pub kind: EssayHelpType,
}

#[derive(Debug, Serialize)]
pub(crate) struct ToneRequest<'a> {
    pub text: &'a str,
    pub tone: Tone,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub prompt: &'a str,
    #[serde(rename = "type")]
    pub kind: EmailType,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReportRequest<'a> {
    pub text: &'a str,
    pub insights: Option<&'a DocumentInsights>,
    pub suggestions: &'a BTreeMap<String, Vec<String>>,
}

// Responses

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    pub score: u32,
    #[serde(default)]
    pub suggestions: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub errors: Vec<ErrorSpan>,
    #[serde(default)]
    pub categorized_suggestions: CategorizedSuggestions,
    #[serde(default)]
    pub document_insights: Option<DocumentInsights>,
    #[serde(default)]
    pub advanced_features: Option<AdvancedFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSuggestions {
    #[serde(default)]
    pub correctness: Vec<CategorizedSuggestion>,
    #[serde(default)]
    pub clarity: Vec<CategorizedSuggestion>,
    #[serde(default)]
    pub engagement: Vec<CategorizedSuggestion>,
    #[serde(default)]
    pub delivery: Vec<CategorizedSuggestion>,
}

impl CategorizedSuggestions {
    /// Categories in display order, with their names.
    pub fn categories(&self) -> [(&'static str, &[CategorizedSuggestion]); 4] {
        [
            ("Correctness", self.correctness.as_slice()),
            ("Clarity", self.clarity.as_slice()),
            ("Engagement", self.engagement.as_slice()),
            ("Delivery", self.delivery.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSuggestion {
    pub word: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInsights {
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub character_count: usize,
    #[serde(default)]
    pub sentence_count: usize,
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub speaking_time: u32,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub correctness_errors: usize,
    #[serde(default)]
    pub clarity_suggestions: usize,
    #[serde(default)]
    pub engagement_suggestions: usize,
    #[serde(default)]
    pub delivery_suggestions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedFeatures {
    #[serde(default)]
    pub tone_detection: Option<String>,
    #[serde(default)]
    pub ai_rewrites: Vec<RewriteProposal>,
    #[serde(default)]
    pub sentence_variety_score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewriteProposal {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoFixResponse {
    pub fixed: String,
    #[serde(default)]
    pub total_fixes: usize,
    #[serde(default)]
    pub changes: Vec<FixChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixChange {
    pub original: String,
    pub fixed: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// `-1` when the service could not locate the original phrase.
    pub position: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParaphraseResponse {
    pub style: String,
    pub paraphrased: String,
    pub confidence: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationsResponse {
    pub style: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub total_found: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub text: String,
    pub citation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiDetectionResponse {
    pub ai_probability: u32,
    pub recommendation: String,
    pub confidence: String,
    #[serde(default)]
    pub indicators: Vec<Option<String>>,
}

impl AiDetectionResponse {
    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.indicators.iter().flatten().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EssayHelpResponse {
    pub word_count: usize,
    pub estimated_grade: String,
    #[serde(default)]
    pub suggestions: Vec<EssaySuggestion>,
    #[serde(default)]
    pub improvement_areas: Vec<Option<String>>,
}

impl EssayHelpResponse {
    pub fn improvement_areas(&self) -> impl Iterator<Item = &str> {
        self.improvement_areas.iter().flatten().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EssaySuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub suggestion: String,
    #[serde(default)]
    pub example: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub title: String,
    pub rewrite: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneAdjustResponse {
    pub original: String,
    pub adjusted: String,
    pub tone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailResponse {
    pub prompt: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
}
