//! テーブルビューの状態
//!
//! ページ番号・読み込み中フラグ・表示中レコード・総件数・選択状態を1つの構造体で持ち、
//! ページローダーと選択の整合をまとめて扱う。

use serde::Serialize;

use crate::error::{Error, Result};
use crate::loader::PageLoader;
use crate::pagination::{global_index, Paginator};
use crate::selection::{parse_bulk_input, PageCheckState, SelectionReconciler};
use crate::types::{Artwork, ArtworkId, ArtworkPage};

/// 発行済みのページ取得要求
///
/// `id` は単調増加。最新の要求以外への応答は破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub id: u64,
    pub page: u32,
}

/// 取得結果の反映結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// レコードと総件数を差し替えた
    Applied,
    /// 取得失敗。表示中のレコードはそのまま
    Failed,
    /// 新しい要求が出ているので破棄した
    Stale,
}

/// 描画用の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub artwork: Artwork,
    pub global_index: u64,
    pub selected: bool,
}

/// ビュー状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    page: u32,
    loading: bool,
    current: ArtworkPage,
    selection: SelectionReconciler,
    latest_request: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            loading: false,
            current: ArtworkPage::new(1, Vec::new(), 0),
            selection: SelectionReconciler::new(),
            latest_request: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 要求中（または表示中）のページ番号
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn records(&self) -> &[Artwork] {
        &self.current.records
    }

    pub fn total_count(&self) -> u64 {
        self.current.total
    }

    /// 手元にあるページ（レコードが属するページ番号つき）
    pub fn resident_page(&self) -> &ArtworkPage {
        &self.current
    }

    pub fn selection(&self) -> &SelectionReconciler {
        &self.selection
    }

    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.page, self.current.total)
    }

    /// ページ取得を開始する
    ///
    /// ページ番号を更新し、読み込み中にして要求チケットを返す。
    pub fn begin_load(&mut self, page: u32) -> Result<PageRequest> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }
        self.latest_request += 1;
        self.page = page;
        self.loading = true;
        Ok(PageRequest {
            id: self.latest_request,
            page,
        })
    }

    /// 取得結果を反映する
    pub fn finish_load(&mut self, request: PageRequest, result: Result<ArtworkPage>) -> LoadOutcome {
        if request.id != self.latest_request {
            tracing::warn!(
                request = request.id,
                latest = self.latest_request,
                page = request.page,
                "discarding stale page response"
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                tracing::debug!(page = page.page, records = page.len(), total = page.total, "page loaded");
                self.current = page;
                LoadOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(page = request.page, error = %e, "error fetching page");
                // ページャと表示行を一致させる
                self.page = self.current.page;
                LoadOutcome::Failed
            }
        }
    }

    /// ページを取得して反映する
    pub async fn navigate<L: PageLoader>(&mut self, loader: &L, page: u32) -> Result<LoadOutcome> {
        let request = self.begin_load(page)?;
        let result = loader.load(request.page).await;
        Ok(self.finish_load(request, result))
    }

    /// 表示中の行と選択状態
    pub fn rows(&self) -> Vec<RowView> {
        self.current
            .records
            .iter()
            .enumerate()
            .map(|(pos, artwork)| {
                let index = global_index(self.current.page, pos);
                RowView {
                    artwork: artwork.clone(),
                    global_index: index,
                    selected: self.selection.is_selected(artwork.id, index),
                }
            })
            .collect()
    }

    pub fn selected_ids_on_page(&self) -> Vec<ArtworkId> {
        self.selection.selected_ids_on_page(&self.current)
    }

    pub fn page_check_state(&self) -> PageCheckState {
        self.selection.page_check_state(&self.current)
    }

    pub fn selected_count(&self) -> u64 {
        self.selection.selected_count()
    }

    /// "Selected: {n} rows"
    pub fn selected_label(&self) -> String {
        format!("Selected: {} rows", self.selected_count())
    }

    /// オーバーレイの入力値で一括選択する
    ///
    /// 不正な入力では状態を変えずにエラーを返す。
    pub fn submit_bulk(&mut self, input: &str) -> Result<u64> {
        let n = parse_bulk_input(input)?;
        self.activate_bulk(n)?;
        Ok(n)
    }

    /// 検証済みの件数で一括選択する
    pub fn activate_bulk(&mut self, n: u64) -> Result<()> {
        self.selection.activate_bulk(n)
    }

    /// 表示中ページの新しい選択内容を反映する
    pub fn set_page_selection<N>(&mut self, newly_selected: N)
    where
        N: IntoIterator<Item = ArtworkId>,
    {
        self.selection.set_page_selection(self.current.ids(), newly_selected);
    }

    pub fn toggle_row(&mut self, id: ArtworkId) {
        self.selection.toggle_row(&self.current, id);
    }

    pub fn set_page_all(&mut self, selected: bool) {
        self.selection.set_page_all(&self.current, selected);
    }
}
