use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use trivia_core::model::{Category, RawQuestion, RequestDescriptor};

use crate::error::FetchError;
use crate::source::{CategorySource, QuestionSource};
use crate::trivia::config::TriviaConfig;
use crate::trivia::wire::{categories_url, decode_categories, decode_questions, questions_url};

/// HTTP client for the Open Trivia Database.
#[derive(Clone, Debug)]
pub struct OpenTdbClient {
    client: Client,
    config: TriviaConfig,
}

impl OpenTdbClient {
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be built.
    pub fn new(config: TriviaConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &TriviaConfig {
        &self.config
    }

    async fn get_text(&self, url: url::Url) -> Result<String, FetchError> {
        debug!(%url, "trivia request");
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn questions(&self, descriptor: &RequestDescriptor) -> Result<Vec<RawQuestion>, FetchError> {
        let url = questions_url(&self.config.base_url, descriptor)?;
        let body = self.get_text(url).await?;
        decode_questions(&body)
    }
}

#[async_trait]
impl CategorySource for OpenTdbClient {
    async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = categories_url(&self.config.base_url)?;
        let body = self.get_text(url).await?;
        decode_categories(&body)
    }
}
