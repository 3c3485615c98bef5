//! 行選択の整合
//!
//! 選択状態は2つのモードのどちらか一方だけを取る:
//! - Explicit: 明示的に選ばれた作品IDの集合
//! - BulkPrefix(n): データセット先頭からn件（ページ順）が選択済み
//!
//! 一括モードを有効にすると明示集合は空になり、明示的な編集を行うと一括モードは解除される。
//! 後に行った操作が常に勝つ。

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::pagination::global_index;
use crate::types::{ArtworkId, ArtworkPage};

/// 選択モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Explicit(HashSet<ArtworkId>),
    BulkPrefix(u64),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Explicit(HashSet::new())
    }
}

/// ヘッダーチェックボックスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCheckState {
    None,
    Some,
    All,
}

/// 選択状態を保持し、ページごとの選択可否を答える
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionReconciler {
    selection: Selection,
}

impl SelectionReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &Selection {
        &self.selection
    }

    /// 一括モードの件数（無効時は0）
    pub fn bulk_count(&self) -> u64 {
        match self.selection {
            Selection::BulkPrefix(n) => n,
            Selection::Explicit(_) => 0,
        }
    }

    /// 明示モードのID集合（一括モード中は空）
    pub fn explicit_ids(&self) -> HashSet<ArtworkId> {
        match &self.selection {
            Selection::Explicit(ids) => ids.clone(),
            Selection::BulkPrefix(_) => HashSet::new(),
        }
    }

    /// 行が選択されているか
    ///
    /// # Arguments
    /// * `id` - 作品ID
    /// * `global_index` - データセット全体での0始まりの位置
    pub fn is_selected(&self, id: ArtworkId, global_index: u64) -> bool {
        match &self.selection {
            Selection::BulkPrefix(n) => global_index < *n,
            Selection::Explicit(ids) => ids.contains(&id),
        }
    }

    /// 表示中ページの選択内容を丸ごと差し替える
    ///
    /// 1. `loaded` に含まれるIDを明示集合から除く
    /// 2. `newly_selected` のIDを追加する
    /// 3. 一括モードを解除する
    ///
    /// 他ページの明示選択はそのまま残る。一括モード由来の暗黙の選択は、
    /// 表示中ページで `newly_selected` に含まれたもの以外すべて失われる。
    pub fn set_page_selection<L, N>(&mut self, loaded: L, newly_selected: N)
    where
        L: IntoIterator<Item = ArtworkId>,
        N: IntoIterator<Item = ArtworkId>,
    {
        let mut ids = match std::mem::take(&mut self.selection) {
            Selection::Explicit(ids) => ids,
            Selection::BulkPrefix(n) => {
                tracing::debug!(bulk_count = n, "bulk selection replaced by page edit");
                HashSet::new()
            }
        };

        for id in loaded {
            ids.remove(&id);
        }
        ids.extend(newly_selected);

        self.selection = Selection::Explicit(ids);
    }

    /// 先頭n件の一括選択を有効にする
    ///
    /// n はデータセット件数で丸めない。0 は拒否して状態を変えない。
    pub fn activate_bulk(&mut self, n: u64) -> Result<()> {
        if n == 0 {
            return Err(Error::InvalidBulkCount(n.to_string()));
        }
        tracing::debug!(bulk_count = n, "bulk selection activated");
        self.selection = Selection::BulkPrefix(n);
        Ok(())
    }

    /// 選択件数の表示用の値
    ///
    /// 一括モードでは入力値そのもので、データセット件数を超えることもある。
    pub fn selected_count(&self) -> u64 {
        match &self.selection {
            Selection::BulkPrefix(n) => *n,
            Selection::Explicit(ids) => ids.len() as u64,
        }
    }

    /// ページ内で選択されている行のID（表示順）
    pub fn selected_ids_on_page(&self, page: &ArtworkPage) -> Vec<ArtworkId> {
        page.records
            .iter()
            .enumerate()
            .filter(|(pos, r)| self.is_selected(r.id, global_index(page.page, *pos)))
            .map(|(_, r)| r.id)
            .collect()
    }

    pub fn page_check_state(&self, page: &ArtworkPage) -> PageCheckState {
        let selected = self.selected_ids_on_page(page).len();
        if selected == 0 {
            PageCheckState::None
        } else if selected == page.len() {
            PageCheckState::All
        } else {
            PageCheckState::Some
        }
    }

    /// 1行の選択を反転してページ単位で確定する
    pub fn toggle_row(&mut self, page: &ArtworkPage, id: ArtworkId) {
        if !page.contains(id) {
            return;
        }
        let mut selected = self.selected_ids_on_page(page);
        if let Some(pos) = selected.iter().position(|&s| s == id) {
            selected.remove(pos);
        } else {
            selected.push(id);
        }
        self.set_page_selection(page.ids(), selected);
    }

    /// ページ全行の選択/解除
    pub fn set_page_all(&mut self, page: &ArtworkPage, selected: bool) {
        let newly_selected: Vec<ArtworkId> = if selected { page.ids().collect() } else { Vec::new() };
        self.set_page_selection(page.ids(), newly_selected);
    }
}

/// 一括選択の入力値をパース
///
/// 空・数値以外・0以下は拒否する。
pub fn parse_bulk_input(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidBulkCount(trimmed.to_string()))?;
    if value <= 0 {
        return Err(Error::InvalidBulkCount(trimmed.to_string()));
    }
    Ok(value as u64)
}
