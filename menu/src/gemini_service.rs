use crate::config::Config;
use crate::error::MenuError;
use crate::models::*;
use async_trait::async_trait;
use reqwest::Client;

#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, MenuError>;
}

pub struct GeminiService {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    json_mode: bool,
}

impl GeminiService {
    pub fn new(config: &Config) -> Result<Self, MenuError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(MenuError::ClientBuild)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            json_mode: config.json_mode,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn build_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: 0.3,
                max_output_tokens: 2048,
                response_mime_type: self
                    .json_mode
                    .then(|| "application/json".to_string()),
            }),
        }
    }
}

#[async_trait]
impl CompletionClient for GeminiService {
    async fn complete(&self, prompt: &str) -> Result<String, MenuError> {
        let request = self.build_request(prompt);

        log::debug!("Sending {} byte prompt to {}", prompt.len(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await
            .map_err(MenuError::CompletionRequest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MenuError::CompletionApi {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(MenuError::CompletionDeserialization)?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or(MenuError::EmptyCompletion)
    }
}
