//! ページローダー
//!
//! 取得の実装（ブラウザの fetch / CLIの reqwest）は各フロントエンド側。
//! ここではURL組み立て、レスポンスのパース、ローダーの境界となるトレイトを持つ。

use std::future::Future;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{Artwork, ArtworkPage};

/// Art Institute of Chicago 作品一覧API
pub const ARTIC_API_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// 1ページ分を取得するローダー
///
/// 失敗時はエラーを返すだけで、リトライもキャッシュもしない。
pub trait PageLoader {
    fn load(&self, page: u32) -> impl Future<Output = Result<ArtworkPage>>;
}

/// ページ取得URLを組み立てる
///
/// # Arguments
/// * `base` - APIのURL（既存のクエリがあれば `&` で連結）
/// * `page` - 1始まりのページ番号
pub fn page_url(base: &str, page: u32) -> Result<String> {
    if page == 0 {
        return Err(Error::InvalidPage(page));
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!("{}{}page={}", base, separator, page))
}

/// APIレスポンス
#[derive(Deserialize)]
struct ApiResponse {
    data: Vec<Artwork>,
    pagination: ApiPagination,
}

#[derive(Deserialize)]
struct ApiPagination {
    total: u64,
}

/// レスポンス本文をパース
///
/// `data` と `pagination.total` は必須。その他のフィールドは無視する。
pub fn parse_page_response(page: u32, body: &str) -> Result<ArtworkPage> {
    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(ArtworkPage::new(page, response.data, response.pagination.total))
}
