use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use sn_core::placeholders::{is_failure_placeholder, ARTICLE_TOO_SHORT};
use sn_core::{Error, Result, Rewriter, RewrittenHeadline};

use crate::parse::parse_headline_response;
use crate::prompt::{article_prompt, headline_prompt, REWRITE_PROMPT};

/// Inputs shorter than this are not genuine article content.
const MIN_ARTICLE_CHARS: usize = 100;

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Chat-completions client for the rewrite service. Transport and parse
/// failures degrade to the original text; callers never see an error for a
/// single bad rewrite.
pub struct OpenAiRewriter {
    client: Arc<Client>,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiRewriter {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::Rewrite("OpenAI API key is required".to_string())),
        };
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client: Arc::new(client),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var("OPENAI_API_KEY").ok())
    }

    async fn chat(&self, user_prompt: String, max_tokens: u32) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: REWRITE_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: 0.7,
            max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Rewrite("empty completion response".to_string()))
    }
}

impl fmt::Debug for OpenAiRewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiRewriter")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl Rewriter for OpenAiRewriter {
    fn name(&self) -> &str {
        "OpenAI"
    }

    async fn rewrite_headline(&self, title: &str, summary: &str) -> Result<RewrittenHeadline> {
        match self.chat(headline_prompt(title, summary), 300).await {
            Ok(response) => Ok(parse_headline_response(&response, title, summary)),
            Err(e) => {
                warn!("headline rewrite failed, keeping original: {}", e);
                Ok(RewrittenHeadline {
                    title: title.to_string(),
                    summary: summary.to_string(),
                })
            }
        }
    }

    async fn rewrite_article(&self, content: &str) -> Result<String> {
        // Never ask the generator to rewrite an error message.
        if is_failure_placeholder(content) {
            return Ok(content.to_string());
        }
        if content.trim().chars().count() < MIN_ARTICLE_CHARS {
            return Ok(ARTICLE_TOO_SHORT.to_string());
        }

        match self.chat(article_prompt(content), 1500).await {
            Ok(rewritten) if !rewritten.trim().is_empty() => Ok(rewritten),
            Ok(_) => Ok(content.to_string()),
            Err(e) => {
                warn!("article rewrite failed, keeping original: {}", e);
                Ok(content.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        assert!(OpenAiRewriter::new(None).is_err());
        assert!(OpenAiRewriter::new(Some(String::new())).is_err());
        assert!(OpenAiRewriter::new(Some("test-key".to_string())).is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rewriter = OpenAiRewriter::new(Some("sk-secret".to_string())).unwrap();
        let rendered = format!("{:?}", rewriter);
        assert!(!rendered.contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_placeholder_input_passes_through() {
        let rewriter = OpenAiRewriter::new(Some("test-key".to_string())).unwrap();
        let content = sn_core::placeholders::LOAD_FAILED;
        assert_eq!(rewriter.rewrite_article(content).await.unwrap(), content);
    }

    #[tokio::test]
    async fn test_short_input_short_circuits() {
        let rewriter = OpenAiRewriter::new(Some("test-key".to_string())).unwrap();
        let rewritten = rewriter.rewrite_article("Zu kurz.").await.unwrap();
        assert_eq!(rewritten, ARTICLE_TOO_SHORT);
    }

    // Exercises the degradation path: the key is fake, the request fails,
    // and the original text must come back unchanged.
    #[tokio::test]
    async fn test_headline_degrades_to_original_on_transport_failure() {
        let mut rewriter = OpenAiRewriter::new(Some("test-key".to_string())).unwrap();
        rewriter.base_url = "http://127.0.0.1:9".to_string();

        let result = rewriter
            .rewrite_headline("Schock-Titel!", "Dramatische Zusammenfassung.")
            .await
            .unwrap();
        assert_eq!(result.title, "Schock-Titel!");
        assert_eq!(result.summary, "Dramatische Zusammenfassung.");
    }
}
