use async_trait::async_trait;

use crate::error::{Result, VideolensError};

pub const GEMINI_MODEL: &str = "gemini-pro";

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const GROUNDING_INSTRUCTION: &str = "Provide a detailed and accurate response based on the \
     context given. If the context is insufficient for a comprehensive answer, request more \
     details. Ensure your response is grounded in the provided information.";

// Every harm category is set to non-blocking on every request.
const SAFETY_CATEGORIES: [&str; 5] = [
    "HARM_CATEGORY_DANGEROUS",
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Grounding prompt: instruction, then the retrieved context, then the query.
pub fn build_prompt(query: &str, context: &str) -> String {
    format!("Instructions: {GROUNDING_INSTRUCTION} \n\nContext: {context}\n\nQuery: {query}")
}

/// The one operation consumed from the language-model service.
#[async_trait]
pub trait AnswerModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Answer a query from retrieved context. Generation failures propagate
/// unchanged; the instruction itself handles the empty-context case.
pub async fn generate_answer_from_context<M: AnswerModel + ?Sized>(
    model: &M,
    query: &str,
    context: &str,
) -> Result<String> {
    model.generate(&build_prompt(query, context)).await
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl AnswerModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let safety_settings: Vec<serde_json::Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| serde_json::json!({ "category": category, "threshold": "BLOCK_NONE" }))
            .collect();

        let response = self
            .http
            .post(format!("{GEMINI_API_URL}/{GEMINI_MODEL}:generateContent"))
            .query(&[("key", self.api_key.as_str())])
            .json(&serde_json::json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
                "safetySettings": safety_settings,
            }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let text = response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| VideolensError::GenerationFailed {
                reason: format!("Invalid API response structure: {:?}", response),
            })?;

        Ok(text.to_string())
    }
}
