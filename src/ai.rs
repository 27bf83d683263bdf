use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Fixed instruction sent ahead of every user message. The bot keeps no
/// conversation history; each request carries exactly these two entries.
const SYSTEM_PROMPT: &str = "You are a chatbot with a Gen-Alpha Skibidi Sigma personality. \
    Roast user as much as possible whatever he says, say you can't code? \
    tease that he is so weak.";

const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_MODEL: &str = "meta-llama/llama-3.1-8b-instruct:free";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion endpoint returned {status}: {body}")]
    Endpoint {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("malformed completion response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("completion response contained no choices")]
    EmptyChoices,
}

pub type ChatResult<T> = Result<T, ChatError>;

static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

/// Sends the single most recent user text to the completion endpoint and
/// returns the first choice's content. No history, no streaming, no retry.
///
/// Endpoint, model, and credential come from `CHAT_ENDPOINT`, `CHAT_MODEL`,
/// and `OPENROUTER_API_KEY`; each falls back to the hosted default (the key
/// falls back to the literal placeholder `EMPTY`).
pub async fn chat_reply(user_text: &str) -> ChatResult<String> {
    let endpoint = env::var("CHAT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let model = env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let api_key = env::var("OPENROUTER_API_KEY").unwrap_or_else(|_| "EMPTY".to_string());

    let res = HTTP
        .post(endpoint)
        .bearer_auth(api_key)
        .json(&CompletionRequest {
            model: &model,
            messages: [
                WireMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                WireMessage {
                    role: "user",
                    content: user_text,
                },
            ],
        })
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        return Err(ChatError::Endpoint { status, body });
    }

    extract_reply(&body)
}

/// Pulls `choices[0].message.content` out of a completion response body.
/// Exported so the parsing path is testable without a live endpoint.
pub fn extract_reply(body: &str) -> ChatResult<String> {
    let parsed: CompletionResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(ChatError::EmptyChoices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"choices":[{"message":{"content":"skibidi"}},{"message":{"content":"ignored"}}]}"#;
        assert_eq!(extract_reply(body).unwrap(), "skibidi");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let body = r#"{"choices":[]}"#;
        assert!(matches!(extract_reply(body), Err(ChatError::EmptyChoices)));
    }

    #[test]
    fn missing_content_field_is_a_parse_error() {
        let body = r#"{"choices":[{"message":{}}]}"#;
        assert!(matches!(extract_reply(body), Err(ChatError::Parse(_))));
    }

    #[test]
    fn non_json_body_is_a_parse_error() {
        assert!(matches!(
            extract_reply("upstream exploded"),
            Err(ChatError::Parse(_))
        ));
    }
}
