mod classify;
mod narrative;
mod scoring;

pub use classify::{classify, confidence, MICROSERVICES_BOUNDARY, MONOLITH_BOUNDARY};
pub use narrative::{cons, pros, reasoning, recommendations, risks, tool_suggestions};
pub use scoring::{score_questionnaire, ScoreBreakdown, ScoreCategory};

use crate::questionnaire::QuestionnaireRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Structural recommendation produced for a questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Architecture {
    Monolith,
    ModularMonolith,
    Microservices,
}

impl Architecture {
    pub const fn ordered() -> [Self; 3] {
        [Self::Monolith, Self::ModularMonolith, Self::Microservices]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monolith => "monolith",
            Self::ModularMonolith => "modular-monolith",
            Self::Microservices => "microservices",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Monolith => "Monolith",
            Self::ModularMonolith => "Modular Monolith",
            Self::Microservices => "Microservices",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|architecture| architecture.as_str() == value)
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine output consumed by renderers and exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub architecture: Architecture,
    pub score: u8,
    pub confidence: u8,
    pub reasoning: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub tool_suggestions: Vec<String>,
}

/// Recommendation together with the category scores that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub recommendation: Recommendation,
    pub breakdown: ScoreBreakdown,
}

/// Stateless engine mapping a questionnaire to a recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, input: &QuestionnaireRecord) -> Assessment {
        let breakdown = score_questionnaire(input);
        let score = breakdown.total();
        let architecture = classify(score);
        let confidence = confidence(architecture, score);

        debug!(
            score,
            confidence,
            architecture = architecture.as_str(),
            scale = breakdown.scale,
            complexity = breakdown.complexity,
            team = breakdown.team,
            devops = breakdown.devops,
            infrastructure = breakdown.infrastructure,
            "scored questionnaire"
        );

        let recommendation = Recommendation {
            architecture,
            score,
            confidence,
            reasoning: reasoning(architecture, input, &breakdown),
            pros: owned(pros(architecture)),
            cons: owned(cons(architecture)),
            risks: risks(architecture, input),
            recommendations: owned(recommendations(architecture)),
            tool_suggestions: tool_suggestions(architecture, input),
        };

        Assessment {
            recommendation,
            breakdown,
        }
    }
}

/// Entry point used by collectors that only need the recommendation.
pub fn generate_recommendation(input: &QuestionnaireRecord) -> Recommendation {
    RecommendationEngine::new().generate(input).recommendation
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
