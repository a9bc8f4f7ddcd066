//! Boundary to an external, LLM-backed recommendation source.
//!
//! The transport lives outside this crate; what lives here is the request
//! payload sent to it, validation of what comes back, and the single-shot
//! fallback to the local engine when anything about the remote path fails.

mod prompt;
mod recorded;
mod response;

pub use prompt::{build_prompt, ChatCompletionRequest, ChatMessage};
pub use recorded::RecordedResponseSource;
pub use response::{extract_json, parse_chat_completion, validate_recommendation};

use crate::engine::{Recommendation, RecommendationEngine, ScoreBreakdown};
use crate::questionnaire::QuestionnaireRecord;
use serde::Serialize;
use tracing::{info, warn};

/// Anything able to produce a recommendation on the engine's behalf.
pub trait RecommendationSource {
    fn name(&self) -> &str;
    fn recommend(&self, input: &QuestionnaireRecord) -> Result<Recommendation, RemoteError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote source unreachable: {0}")]
    Transport(String),
    #[error("remote source returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no recommendation content found in response")]
    MissingContent,
    #[error("failed to parse recommendation JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("recommendation payload rejected: {0}")]
    Schema(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOrigin {
    Remote,
    Local,
    LocalFallback,
}

impl RecommendationOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "remote source",
            Self::Local => "local engine",
            Self::LocalFallback => "local engine (remote source failed)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedRecommendation {
    pub recommendation: Recommendation,
    pub origin: RecommendationOrigin,
    /// Present whenever the local engine produced the result.
    pub breakdown: Option<ScoreBreakdown>,
}

/// Asks `source` once and substitutes a local computation on any failure.
/// No retry is attempted.
pub fn recommend_with_fallback(
    source: Option<&dyn RecommendationSource>,
    input: &QuestionnaireRecord,
) -> SourcedRecommendation {
    let Some(source) = source else {
        return local(input, RecommendationOrigin::Local);
    };

    match source.recommend(input) {
        Ok(recommendation) => {
            info!(
                source = source.name(),
                architecture = recommendation.architecture.as_str(),
                "remote recommendation accepted"
            );
            SourcedRecommendation {
                recommendation,
                origin: RecommendationOrigin::Remote,
                breakdown: None,
            }
        }
        Err(err) => {
            warn!(
                source = source.name(),
                error = %err,
                "remote recommendation failed, using local engine"
            );
            local(input, RecommendationOrigin::LocalFallback)
        }
    }
}

fn local(input: &QuestionnaireRecord, origin: RecommendationOrigin) -> SourcedRecommendation {
    let assessment = RecommendationEngine::new().generate(input);
    SourcedRecommendation {
        recommendation: assessment.recommendation,
        origin,
        breakdown: Some(assessment.breakdown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{generate_recommendation, Architecture};
    use std::cell::Cell;

    struct StubSource {
        outcome: fn() -> Result<Recommendation, RemoteError>,
        calls: Cell<usize>,
    }

    impl StubSource {
        fn new(outcome: fn() -> Result<Recommendation, RemoteError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl RecommendationSource for StubSource {
        fn name(&self) -> &str {
            "stub"
        }

        fn recommend(&self, _input: &QuestionnaireRecord) -> Result<Recommendation, RemoteError> {
            self.calls.set(self.calls.get() + 1);
            (self.outcome)()
        }
    }

    fn remote_answer() -> Result<Recommendation, RemoteError> {
        Ok(Recommendation {
            architecture: Architecture::Microservices,
            score: 81,
            confidence: 64,
            reasoning: vec!["remote says so".to_string()],
            pros: Vec::new(),
            cons: Vec::new(),
            risks: Vec::new(),
            recommendations: Vec::new(),
            tool_suggestions: Vec::new(),
        })
    }

    #[test]
    fn without_source_uses_local_engine() {
        let input = QuestionnaireRecord::default();
        let sourced = recommend_with_fallback(None, &input);
        assert_eq!(sourced.origin, RecommendationOrigin::Local);
        assert_eq!(sourced.recommendation, generate_recommendation(&input));
        assert!(sourced.breakdown.is_some());
    }

    #[test]
    fn successful_remote_answer_is_used_verbatim() {
        let source = StubSource::new(remote_answer);
        let sourced = recommend_with_fallback(Some(&source), &QuestionnaireRecord::default());
        assert_eq!(sourced.origin, RecommendationOrigin::Remote);
        assert_eq!(sourced.recommendation.confidence, 64);
        assert!(sourced.breakdown.is_none());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn every_failure_kind_falls_back_once() {
        let failures: [fn() -> Result<Recommendation, RemoteError>; 4] = [
            || Err(RemoteError::Transport("connection refused".to_string())),
            || {
                Err(RemoteError::Status {
                    status: 503,
                    body: "overloaded".to_string(),
                })
            },
            || Err(RemoteError::MissingContent),
            || Err(RemoteError::Schema("bad architecture".to_string())),
        ];

        let input = QuestionnaireRecord::default();
        for failure in failures {
            let source = StubSource::new(failure);
            let sourced = recommend_with_fallback(Some(&source), &input);
            assert_eq!(sourced.origin, RecommendationOrigin::LocalFallback);
            assert_eq!(sourced.recommendation, generate_recommendation(&input));
            assert_eq!(source.calls.get(), 1, "no retry");
        }
    }
}
