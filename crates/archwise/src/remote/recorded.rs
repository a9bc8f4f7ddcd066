use super::{parse_chat_completion, RecommendationSource, RemoteError};
use crate::engine::Recommendation;
use crate::questionnaire::QuestionnaireRecord;
use std::path::PathBuf;

/// Replays a chat completion body captured from the remote service.
#[derive(Debug, Clone)]
pub struct RecordedResponseSource {
    path: PathBuf,
}

impl RecordedResponseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecommendationSource for RecordedResponseSource {
    fn name(&self) -> &str {
        "recorded-response"
    }

    fn recommend(&self, _input: &QuestionnaireRecord) -> Result<Recommendation, RemoteError> {
        let body = std::fs::read_to_string(&self.path).map_err(|err| {
            RemoteError::Transport(format!("{}: {err}", self.path.display()))
        })?;
        parse_chat_completion(&body)
    }
}
