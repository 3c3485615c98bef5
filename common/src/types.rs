//! カタログのレコード型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Artwork: 作品1件（表示フィールドは素通しデータ）
//! - ArtworkPage: 1ページ分の作品 + データセット全体の件数
//! - Column: テーブルの表示列

use serde::{Deserialize, Serialize};

/// 作品ID
pub type ArtworkId = u64;

/// 値が無い・空文字のときに表示するプレースホルダ
pub const PLACEHOLDER: &str = "N/A";

/// 作品1件
///
/// `id` 以外はすべて表示専用。API側で null / 欠落 / 空文字のいずれもあり得る。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub place_of_origin: Option<String>,

    #[serde(default)]
    pub artist_display: Option<String>,

    #[serde(default)]
    pub inscriptions: Option<String>,

    #[serde(default)]
    pub date_start: Option<i64>,

    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Artwork {
    /// 指定列の表示文字列
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Title => display_text(self.title.as_deref()),
            Column::PlaceOfOrigin => display_text(self.place_of_origin.as_deref()),
            Column::Artist => display_text(self.artist_display.as_deref()),
            Column::Inscriptions => display_text(self.inscriptions.as_deref()),
            Column::StartDate => display_year(self.date_start),
            Column::EndDate => display_year(self.date_end),
        }
    }
}

/// 文字列フィールドの表示値（None / 空文字は "N/A"）
pub fn display_text(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// 年フィールドの表示値
pub fn display_year(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// テーブルの表示列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    PlaceOfOrigin,
    Artist,
    Inscriptions,
    StartDate,
    EndDate,
}

impl Column {
    /// 表示順の全列
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::PlaceOfOrigin,
        Column::Artist,
        Column::Inscriptions,
        Column::StartDate,
        Column::EndDate,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Title => "TITLE",
            Column::PlaceOfOrigin => "PLACE OF ORIGIN",
            Column::Artist => "ARTIST",
            Column::Inscriptions => "INSCRIPTIONS",
            Column::StartDate => "START DATE",
            Column::EndDate => "END DATE",
        }
    }
}

/// 1ページ分の作品
///
/// `page` は取得時に指定した1始まりのページ番号。
/// `total` はサーバが返したデータセット全体の件数で、手元のデータとは一致しないことがある。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkPage {
    pub page: u32,
    pub records: Vec<Artwork>,
    pub total: u64,
}

impl ArtworkPage {
    pub fn new(page: u32, records: Vec<Artwork>, total: u64) -> Self {
        Self { page, records, total }
    }

    /// ページ内のID一覧（表示順）
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
