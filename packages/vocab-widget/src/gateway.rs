use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::config::ApiConfig;
use crate::model::{Envelope, Lesson, Word};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// 远程词汇服务的只读访问
///
/// 不重试、不超时、不缓存；失败原样返回给调用方。
#[allow(async_fn_in_trait)]
pub trait DataGateway {
    async fn fetch_all_lessons(&self) -> Result<Vec<Lesson>, GatewayError>;

    async fn fetch_words_for_lesson(&self, level_no: i64) -> Result<Vec<Word>, GatewayError>;

    async fn fetch_word_detail(&self, word_id: i64) -> Result<Word, GatewayError>;

    async fn fetch_all_words(&self) -> Result<Vec<Word>, GatewayError>;
}

#[derive(Clone)]
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "fetching");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GatewayError::HttpStatus { status, body });
        }

        let body = resp.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

impl DataGateway for HttpGateway {
    async fn fetch_all_lessons(&self) -> Result<Vec<Lesson>, GatewayError> {
        self.get_data("levels/all").await
    }

    async fn fetch_words_for_lesson(&self, level_no: i64) -> Result<Vec<Word>, GatewayError> {
        self.get_data(&format!("level/{level_no}")).await
    }

    async fn fetch_word_detail(&self, word_id: i64) -> Result<Word, GatewayError> {
        self.get_data(&format!("word/{word_id}")).await
    }

    async fn fetch_all_words(&self) -> Result<Vec<Word>, GatewayError> {
        self.get_data("words/all").await
    }
}
