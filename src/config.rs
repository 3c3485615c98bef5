use crate::error::{ArtworkTableError, Result};
use artwork_table_common::ARTIC_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// API URLを上書きする環境変数
pub const API_URL_ENV: &str = "ARTWORK_TABLE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: ARTIC_API_URL.into(),
            timeout_seconds: 30,
            user_agent: format!("artwork-table/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルが無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 壊れた設定ファイルでも起動できるよう、読めなければデフォルトに戻す
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!(error = %e, "config path unavailable, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArtworkTableError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artwork-table").join("config.json"))
    }

    /// 実際に使うAPI URL
    pub fn resolved_api_url(&self) -> String {
        // 環境変数を優先
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.api_url.clone(),
        }
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        self.set_api_url_at(url, &Self::config_path()?)
    }

    /// URLを検証して指定パスへ保存
    pub fn set_api_url_at(&mut self, url: String, path: &Path) -> Result<()> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ArtworkTableError::Config(format!("URLが不正です: {}", url)));
        }
        self.api_url = url.to_string();
        self.save_to(path)
    }
}
