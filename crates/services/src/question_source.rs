use std::env;

use async_trait::async_trait;
use log::debug;
use quiz_core::model::{Question, QuizRequest};
use reqwest::Client;

use crate::error::QuestionSourceError;
use crate::wire::decode_questions;

/// Questions requested per quiz.
pub const QUESTION_LIMIT: u32 = 10;

pub const DEFAULT_BASE_URL: &str = "https://quizapi.io/api/v1";

/// Anything that can hand out a list of quiz questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch questions matching `request`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the source cannot be reached or answers badly.
    async fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>, QuestionSourceError>;
}

#[derive(Clone, Debug)]
pub struct QuestionSourceConfig {
    pub base_url: String,
    pub api_key: String,
}

impl QuestionSourceConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read `QUIZ_API_KEY` and `QUIZ_API_BASE_URL`. Returns `None` without a usable key.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("QUIZ_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("QUIZ_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Some(Self { base_url, api_key })
    }
}

/// HTTP client for the quizapi.io questions endpoint.
#[derive(Clone)]
pub struct QuizApiClient {
    client: Client,
    config: Option<QuestionSourceConfig>,
}

impl QuizApiClient {
    #[must_use]
    pub fn new(config: Option<QuestionSourceConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Build the GET request for `request` without sending it.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError::Disabled` without config, or `Http` for an invalid URL.
    pub fn build_request(
        &self,
        request: &QuizRequest,
    ) -> Result<reqwest::Request, QuestionSourceError> {
        let config = self
            .config
            .as_ref()
            .ok_or(QuestionSourceError::Disabled)?;

        let url = format!("{}/questions", config.base_url.trim_end_matches('/'));
        let mut query = vec![
            ("apiKey", config.api_key.clone()),
            ("limit", QUESTION_LIMIT.to_string()),
        ];
        if let Some(params) = request.params() {
            query.push(("difficulty", params.difficulty.as_query_value().to_string()));
            if let Some(category) = params.category {
                query.push(("tags", category.as_tag().to_string()));
            }
        }

        Ok(self.client.get(url).query(&query).build()?)
    }
}

#[async_trait]
impl QuestionSource for QuizApiClient {
    async fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>, QuestionSourceError> {
        let http_request = self.build_request(request)?;
        debug!("GET {}", http_request.url().path());

        let response = self.client.execute(http_request).await?;
        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(decode_questions(&body)?)
    }
}
