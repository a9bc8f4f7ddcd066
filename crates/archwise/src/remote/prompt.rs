use super::RemoteError;
use crate::questionnaire::QuestionnaireRecord;
use serde::Serialize;

const SYSTEM_PROMPT: &str = "You are a helpful & expert software architecture assistant.";
const TEMPERATURE: f32 = 0.3;
const MAX_COMPLETION_TOKENS: u32 = 900;

const INSTRUCTIONS: [&str; 15] = [
    "You are an expert software architect.",
    "Return ONLY valid JSON. No markdown, no commentary.",
    "JSON schema:",
    "{",
    "  \"architecture\": \"monolith\" | \"modular-monolith\" | \"microservices\",",
    "  \"score\": number (0-100),",
    "  \"confidence\": number (0-100),",
    "  \"reasoning\": string[],",
    "  \"pros\": string[],",
    "  \"cons\": string[],",
    "  \"risks\": string[],",
    "  \"recommendations\": string[],",
    "  \"toolSuggestions\": string[]",
    "}",
    "User input:",
];

/// Natural-language prompt embedding the full questionnaire as JSON.
pub fn build_prompt(input: &QuestionnaireRecord) -> Result<String, RemoteError> {
    let questionnaire = serde_json::to_string_pretty(input)?;
    let mut lines: Vec<&str> = INSTRUCTIONS.to_vec();
    lines.push(&questionnaire);
    Ok(lines.join("\n"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// OpenAI-compatible chat completion body for the external transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_completion_tokens: u32,
}

impl ChatCompletionRequest {
    pub fn for_questionnaire(
        model: impl Into<String>,
        input: &QuestionnaireRecord,
    ) -> Result<Self, RemoteError> {
        Ok(Self {
            model: model.into(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(input)?,
                },
            ],
            temperature: TEMPERATURE,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_ends_with_questionnaire_json() {
        let mut input = QuestionnaireRecord::default();
        input.project_details.name = "Ledger".to_string();

        let prompt = build_prompt(&input).expect("prompt builds");
        assert!(prompt.starts_with("You are an expert software architect.\n"));
        let (_, json) = prompt
            .split_once("User input:\n")
            .expect("input marker present");
        let echoed: QuestionnaireRecord = serde_json::from_str(json).expect("embedded json parses");
        assert_eq!(echoed, input);
    }

    #[test]
    fn request_carries_system_and_user_messages() {
        let request = ChatCompletionRequest::for_questionnaire(
            "llama-3.1-8b-instant",
            &QuestionnaireRecord::default(),
        )
        .expect("request builds");

        let body = serde_json::to_value(&request).expect("serializes");
        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["max_completion_tokens"], 900);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body["messages"][1]["content"]
            .as_str()
            .is_some_and(|content| content.contains("toolSuggestions")));
    }
}
