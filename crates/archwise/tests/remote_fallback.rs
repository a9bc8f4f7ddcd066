use archwise::engine::Architecture;
use archwise::questionnaire::QuestionnaireRecord;
use archwise::remote::{
    recommend_with_fallback, RecommendationOrigin, RecommendationSource, RecordedResponseSource,
};
use archwise::generate_recommendation;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn saved_body(content: &str) -> NamedTempFile {
    let body = json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    });
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(body.to_string().as_bytes()).expect("write body");
    file
}

#[test]
fn fenced_remote_answer_is_accepted() {
    let content = "```json\n{\"architecture\":\"microservices\",\"score\":81.6,\"confidence\":90,\"pros\":[\"scales\",7]}\n```";
    let file = saved_body(content);
    let source = RecordedResponseSource::new(file.path());

    let sourced = recommend_with_fallback(
        Some(&source as &dyn RecommendationSource),
        &QuestionnaireRecord::default(),
    );

    assert_eq!(sourced.origin, RecommendationOrigin::Remote);
    assert!(sourced.breakdown.is_none());
    assert_eq!(sourced.recommendation.architecture, Architecture::Microservices);
    assert_eq!(sourced.recommendation.score, 82);
    assert_eq!(sourced.recommendation.pros, vec!["scales".to_string()]);
    assert!(sourced.recommendation.risks.is_empty());
}

#[test]
fn unknown_architecture_falls_back_to_local_engine() {
    let file = saved_body("{\"architecture\":\"serverless\",\"score\":40}");
    let source = RecordedResponseSource::new(file.path());
    let record = QuestionnaireRecord::default();

    let sourced = recommend_with_fallback(Some(&source as &dyn RecommendationSource), &record);

    assert_eq!(sourced.origin, RecommendationOrigin::LocalFallback);
    assert_eq!(sourced.recommendation, generate_recommendation(&record));
    assert_eq!(sourced.breakdown.map(|b| b.total()), Some(6));
}

#[test]
fn missing_recording_falls_back_to_local_engine() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = RecordedResponseSource::new(dir.path().join("absent.json"));

    let sourced = recommend_with_fallback(
        Some(&source as &dyn RecommendationSource),
        &QuestionnaireRecord::default(),
    );
    assert_eq!(sourced.origin, RecommendationOrigin::LocalFallback);
}

#[test]
fn no_source_uses_local_engine_directly() {
    let sourced = recommend_with_fallback(None, &QuestionnaireRecord::default());
    assert_eq!(sourced.origin, RecommendationOrigin::Local);
    assert_eq!(sourced.recommendation.architecture, Architecture::Monolith);
}
