use super::RemoteError;
use crate::engine::{Architecture, Recommendation};
use crate::report::single_line;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pulls the first choice's content out of a chat completion body and
/// validates it as a recommendation.
pub fn parse_chat_completion(body: &str) -> Result<Recommendation, RemoteError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(RemoteError::MissingContent)?;

    let value: Value = serde_json::from_str(extract_json(&content))?;
    validate_recommendation(value)
}

/// Strips a surrounding markdown code fence, if the model added one.
pub fn extract_json(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(fenced) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let body = fenced.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    let body = body.strip_prefix('\n').unwrap_or(body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Checks the remote payload against the recommendation schema.
///
/// Only the architecture is strict. Numbers that are missing or not finite
/// become 0 (others are rounded into 0..=100); list fields that are not
/// arrays become empty and non-string entries are dropped. Line breaks in
/// list entries are collapsed so every item exports as a single bullet.
pub fn validate_recommendation(value: Value) -> Result<Recommendation, RemoteError> {
    let Value::Object(fields) = value else {
        return Err(RemoteError::Schema(
            "recommendation payload is not an object".to_string(),
        ));
    };

    let architecture = fields
        .get("architecture")
        .and_then(Value::as_str)
        .and_then(Architecture::parse)
        .ok_or_else(|| {
            RemoteError::Schema(format!(
                "invalid architecture value: {}",
                fields.get("architecture").unwrap_or(&Value::Null)
            ))
        })?;

    let number = |key: &str| -> u8 {
        fields
            .get(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
            .map(|n| n.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(0)
    };

    let strings = |key: &str| -> Vec<String> {
        fields
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|item| single_line(item).into_owned())
                    .collect()
            })
            .unwrap_or_default()
    };

    Ok(Recommendation {
        architecture,
        score: number("score"),
        confidence: number("confidence"),
        reasoning: strings("reasoning"),
        pros: strings("pros"),
        cons: strings("cons"),
        risks: strings("risks"),
        recommendations: strings("recommendations"),
        tool_suggestions: strings("toolSuggestions"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completion(content: &str) -> String {
        json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
            .to_string()
    }

    #[test]
    fn strips_language_tagged_fence() {
        assert_eq!(extract_json("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(extract_json("```\n{}\n```"), "{}");
        assert_eq!(extract_json("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn parses_fenced_recommendation() {
        let content = "```json\n{\"architecture\":\"microservices\",\"score\":78.6,\"confidence\":88,\"reasoning\":[\"big team\"],\"pros\":[],\"cons\":[],\"risks\":[],\"recommendations\":[],\"toolSuggestions\":[\"Kubernetes\"]}\n```";
        let recommendation = parse_chat_completion(&completion(content)).expect("valid payload");
        assert_eq!(recommendation.architecture, Architecture::Microservices);
        assert_eq!(recommendation.score, 79);
        assert_eq!(recommendation.confidence, 88);
        assert_eq!(recommendation.tool_suggestions, vec!["Kubernetes"]);
    }

    #[test]
    fn coerces_loose_fields() {
        let recommendation = validate_recommendation(json!({
            "architecture": "monolith",
            "score": "high",
            "confidence": 140,
            "reasoning": "not a list",
            "pros": ["simple", 3, null, "cheap"],
        }))
        .expect("architecture is valid");

        assert_eq!(recommendation.score, 0);
        assert_eq!(recommendation.confidence, 100);
        assert!(recommendation.reasoning.is_empty());
        assert_eq!(recommendation.pros, vec!["simple", "cheap"]);
        assert!(recommendation.tool_suggestions.is_empty());
    }

    #[test]
    fn flattens_multi_line_items() {
        let recommendation = validate_recommendation(json!({
            "architecture": "microservices",
            "reasoning": ["Large team\n## Risks\n- injected risk", "second"],
        }))
        .expect("architecture is valid");

        assert_eq!(
            recommendation.reasoning,
            vec!["Large team ## Risks - injected risk", "second"]
        );
    }

    #[test]
    fn rejects_unknown_architecture() {
        let err = validate_recommendation(json!({ "architecture": "serverless" }))
            .expect_err("architecture outside the enum");
        assert!(matches!(err, RemoteError::Schema(message) if message.contains("serverless")));
    }

    #[test]
    fn rejects_non_object_payload() {
        let err = validate_recommendation(json!(["monolith"])).expect_err("array rejected");
        assert!(matches!(err, RemoteError::Schema(_)));
    }

    #[test]
    fn missing_content_is_distinguished_from_bad_json() {
        let err = parse_chat_completion(r#"{"choices":[]}"#).expect_err("no choices");
        assert!(matches!(err, RemoteError::MissingContent));

        let err = parse_chat_completion(&completion("   ")).expect_err("blank content");
        assert!(matches!(err, RemoteError::MissingContent));

        let err = parse_chat_completion(&completion("I recommend a monolith."))
            .expect_err("prose is not json");
        assert!(matches!(err, RemoteError::MalformedJson(_)));

        let err = parse_chat_completion("<html>bad gateway</html>").expect_err("not json");
        assert!(matches!(err, RemoteError::MalformedJson(_)));
    }
}
