//! HTTPページローダー
//!
//! reqwest で1ページずつ取得する。リトライ・キャッシュはしない。

use crate::config::Config;
use crate::error::{ArtworkTableError, Result};
use artwork_table_common::{page_url, parse_page_response, ArtworkPage, PageLoader};
use std::time::Duration;

pub struct HttpPageLoader {
    client: reqwest::Client,
    api_url: String,
}

impl HttpPageLoader {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()
            .map_err(|e| ArtworkTableError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.resolved_api_url(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl PageLoader for HttpPageLoader {
    async fn load(&self, page: u32) -> artwork_table_common::Result<ArtworkPage> {
        use artwork_table_common::Error;

        let url = page_url(&self.api_url, page)?;
        tracing::debug!(%url, "fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| Error::Http(e.to_string()))?;
        parse_page_response(page, &body)
    }
}
