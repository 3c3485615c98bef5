use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtworkTableError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ページ番号が不正です: {0}（1以上を指定してください）")]
    InvalidPage(u32),

    #[error("一括選択の件数が不正です: {0}")]
    InvalidBulkCount(u64),

    #[error("ページ取得エラー: {0}")]
    Fetch(#[from] artwork_table_common::Error),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, ArtworkTableError>;
