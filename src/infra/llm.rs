use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::change::ChangeSummary;
use crate::domain::commit::CommitMessage;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

const SYSTEM_PROMPT: &str = "You are a git commit-message expert.
Follow the Conventional Commits spec:

1) A short subject line, eg. \"feat: add login page\"
2) A blank line
3) A body with at least one full sentence.

Output only the commit message, nothing else.";

const USER_PREAMBLE: &str = "Write a commit message from the information below.";

const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;
const MAX_TOKENS: u32 = 512;

pub struct GroqClient {
    http: Client,
    api_url: String,
    model: String,
}

impl GroqClient {
    pub fn new(api_url: String, model: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            model,
        }
    }

    fn request_body<'a>(&'a self, changes: &ChangeSummary) -> ChatRequest<'a> {
        let user_content = [USER_PREAMBLE, "", "---", changes.as_str()].join("\n");
        ChatRequest {
            model: &self.model,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
            stream: false,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
        }
    }
}

#[async_trait]
impl LanguageModelService for GroqClient {
    async fn generate_commit_message(
        &self,
        changes: &ChangeSummary,
        api_key: &str,
    ) -> AppResult<CommitMessage> {
        debug!(model = %self.model, url = %self.api_url, "requesting commit message");

        let response = self
            .http
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .json(&self.request_body(changes))
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to call Groq: {err}")))?;

        let status = response.status();
        debug!(%status, "completion response received");
        let body = response
            .text()
            .await
            .map_err(|err| AppError::LanguageModel(format!("failed to read Groq response: {err}")))?;

        if !status.is_success() {
            return Err(AppError::RemoteService {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_str(&body).map_err(|err| {
            AppError::LanguageModel(format!("failed to parse Groq response: {err}"))
        })?;

        Ok(CommitMessage::from_model_output(first_content(&payload)))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Content of the first choice, or empty when the reply has any other shape.
fn first_content(payload: &Value) -> &str {
    payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

    fn client(server: &MockServer) -> GroqClient {
        GroqClient::new(
            format!("{}{COMPLETIONS_PATH}", server.uri()),
            "deepseek-r1-distill-llama-70b".to_string(),
        )
    }

    fn summary() -> ChangeSummary {
        ChangeSummary::new("### GIT STATUS ###\nmodified: src/lib.rs\n")
    }

    #[tokio::test]
    async fn sends_fixed_request_and_cleans_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("authorization", "Bearer gsk_test"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "model": "deepseek-r1-distill-llama-70b",
                "temperature": 0.7,
                "top_p": 0.95,
                "max_tokens": 512,
                "stream": false,
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {
                        "role": "user",
                        "content": "Write a commit message from the information below.\n\n---\n### GIT STATUS ###\nmodified: src/lib.rs\n"
                    }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "<think>\nlib changed\n</think>\nfeat: add x\n\nAdds x."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let message = client(&server)
            .generate_commit_message(&summary(), "gsk_test")
            .await
            .unwrap();
        assert_eq!(message.as_str(), "feat: add x\nAdds x.");
    }

    #[tokio::test]
    async fn server_error_is_remote_service_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let error = client(&server)
            .generate_commit_message(&summary(), "gsk_test")
            .await
            .unwrap_err();
        match error {
            AppError::RemoteService { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn missing_choices_yield_empty_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "x"})))
            .mount(&server)
            .await;

        let message = client(&server)
            .generate_commit_message(&summary(), "gsk_test")
            .await
            .unwrap();
        assert!(message.is_empty());
    }

    #[tokio::test]
    async fn null_content_yields_empty_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": null}}]
            })))
            .mount(&server)
            .await;

        let message = client(&server)
            .generate_commit_message(&summary(), "gsk_test")
            .await
            .unwrap();
        assert!(message.is_empty());
    }

    #[tokio::test]
    async fn unexpected_reply_shapes_yield_empty_message() {
        let shapes = [
            json!({"choices": null}),
            json!({"choices": [null]}),
            json!({"choices": [{"message": null}]}),
            json!({"choices": [{"message": {"content": 42}}]}),
            json!({"choices": {"0": "not an array"}}),
            json!([]),
        ];

        for shape in shapes {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200).set_body_json(shape.clone()))
                .mount(&server)
                .await;

            let message = client(&server)
                .generate_commit_message(&summary(), "gsk_test")
                .await
                .unwrap_or_else(|err| panic!("{shape} raised {err}"));
            assert!(message.is_empty(), "{shape} produced {message:?}");
        }
    }

    #[tokio::test]
    async fn non_json_body_is_language_model_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let error = client(&server)
            .generate_commit_message(&summary(), "gsk_test")
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::LanguageModel(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_language_model_error() {
        let groq = GroqClient::new(
            "http://127.0.0.1:9/openai/v1/chat/completions".to_string(),
            "deepseek-r1-distill-llama-70b".to_string(),
        );
        let error = groq
            .generate_commit_message(&summary(), "gsk_test")
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::LanguageModel(_)));
    }
}
