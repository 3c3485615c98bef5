//! ページ計算
//!
//! 1ページ12件固定（サーバとは交渉しないクライアント側の前提）。
//! ページ番号は1始まり、グローバルインデックスは0始まり。

/// 1ページあたりの件数
pub const PAGE_SIZE: u32 = 12;

/// ページャに並べるページリンク数
pub const PAGE_LINK_SIZE: u32 = 5;

/// データセット全体での0始まりの位置
///
/// `(page - 1) * PAGE_SIZE + position`
pub fn global_index(page: u32, position: usize) -> u64 {
    first_row_offset(page) + position as u64
}

/// ページ先頭行のオフセット
pub fn first_row_offset(page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(PAGE_SIZE)
}

/// ページャのイベント `(first, rows)` をページ番号に変換
///
/// `rows` が0のときは変換できないので None
pub fn page_from_offset(first: u64, rows: u64) -> Option<u32> {
    if rows == 0 {
        return None;
    }
    u32::try_from(first / rows + 1).ok()
}

/// 総ページ数
pub fn page_count(total: u64) -> u32 {
    let count = total.div_ceil(u64::from(PAGE_SIZE));
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// ページャの表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub page: u32,
    pub total: u64,
}

impl Paginator {
    pub fn new(page: u32, total: u64) -> Self {
        Self { page, total }
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total)
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.page_count()
    }

    pub fn previous(&self) -> Option<u32> {
        (!self.is_first()).then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (!self.is_last()).then(|| self.page + 1)
    }

    pub fn last(&self) -> u32 {
        self.page_count().max(1)
    }

    /// "Showing {first} to {last} of {total} entries"
    pub fn report(&self) -> String {
        let offset = first_row_offset(self.page);
        let first = if self.total == 0 { 0 } else { offset + 1 };
        let last = (offset + u64::from(PAGE_SIZE)).min(self.total);
        format!("Showing {} to {} of {} entries", first, last, self.total)
    }

    /// 表示するページリンク（1始まり、昇順）
    ///
    /// 現在ページを中央寄せにし、端では詰めて常に最大 PAGE_LINK_SIZE 個並べる。
    pub fn links(&self) -> Vec<u32> {
        let count = i64::from(self.page_count());
        if count == 0 {
            return Vec::new();
        }

        let current = i64::from(self.page) - 1;
        let link_size = i64::from(PAGE_LINK_SIZE);
        let visible = link_size.min(count);

        let mut start = 0.max((current as f64 - visible as f64 / 2.0).ceil() as i64);
        let end = (count - 1).min(start + visible - 1);
        let delta = link_size - (end - start + 1);
        start = 0.max(start - delta);

        (start..=end).map(|p| (p + 1) as u32).collect()
    }
}
