// OpenRouter-backed build generation
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::model::{Build, GenerationError};

const API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MAX_TOKENS: u32 = 300;

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Seam for the generative collaborator: usage text and optional budget in,
/// suggested component names out.
#[async_trait::async_trait]
pub trait BuildGenerator: Send + Sync {
    async fn generate(&self, usage: &str, budget: Option<f64>)
        -> Result<Build, GenerationError>;
}

pub struct OpenRouterGenerator {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenRouterGenerator {
    pub fn new(api_key: String, model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait::async_trait]
impl BuildGenerator for OpenRouterGenerator {
    async fn generate(
        &self,
        usage: &str,
        budget: Option<f64>,
    ) -> Result<Build, GenerationError> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": build_prompt(usage, budget) }],
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(GenerationError::EmptyResponse)?;

        let cleaned = clean_response(&content);
        debug!("generated build: {}", cleaned);
        serde_json::from_str(&cleaned).map_err(|source| GenerationError::InvalidJson {
            raw: cleaned,
            source,
        })
    }
}

fn build_prompt(usage: &str, budget: Option<f64>) -> String {
    let budget_line = budget
        .map(|b| format!(" with a budget of {b:.0} USD"))
        .unwrap_or_default();
    format!(
        "User wants a PC for: {usage}{budget_line}.\n\
         Generate a JSON object with recommended PC components only, format:\n\
         \n\
         {{\n  \"CPU\": \"\",\n  \"GPU\": \"\",\n  \"RAM\": \"\",\n  \"Storage\": \"\",\n  \"Motherboard\": \"\",\n  \"PSU\": \"\"\n}}\n\
         \n\
         Do not include any extra text.\n"
    )
}

/// Models like to wrap the JSON in Markdown code fences. Strip them.
fn clean_response(message: &str) -> String {
    message
        .replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}
