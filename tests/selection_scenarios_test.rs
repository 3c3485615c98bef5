//! 行選択シナリオテスト
//!
//! ページ送りと明示選択・一括選択の組み合わせを、メモリ上のローダーで検証

use artwork_table_common::{
    global_index, Artwork, ArtworkId, ArtworkPage, LoadOutcome, PageLoader, Result, ViewState,
};
use std::collections::HashSet;

/// 作品IDが 1..=total で並ぶカタログ
struct InMemoryCatalog {
    total: u64,
}

impl PageLoader for InMemoryCatalog {
    async fn load(&self, page: u32) -> Result<ArtworkPage> {
        let start = global_index(page, 0);
        let end = (start + 12).min(self.total);
        let records = (start..end)
            .map(|i| Artwork {
                id: i + 1,
                title: Some(format!("Artwork #{}", i + 1)),
                ..Default::default()
            })
            .collect();
        Ok(ArtworkPage::new(page, records, self.total))
    }
}

fn selected_on_page(view: &ViewState) -> Vec<ArtworkId> {
    view.rows()
        .into_iter()
        .filter(|r| r.selected)
        .map(|r| r.artwork.id)
        .collect()
}

/// シナリオA: 明示選択はページを離れて戻っても残る
#[tokio::test]
async fn test_scenario_a_explicit_selection_persists_across_pages() {
    let catalog = InMemoryCatalog { total: 120 };
    let mut view = ViewState::new();
    view.navigate(&catalog, 1).await.unwrap();
    assert_eq!(view.records().iter().map(|r| r.id).collect::<Vec<_>>(), (1..=12u64).collect::<Vec<_>>());

    view.set_page_selection(vec![3, 7]);
    assert_eq!(view.selected_count(), 2);

    view.navigate(&catalog, 2).await.unwrap();
    assert!(selected_on_page(&view).is_empty());

    view.navigate(&catalog, 1).await.unwrap();
    assert_eq!(selected_on_page(&view), vec![3, 7]);
}

/// シナリオB: 一括15件はページ1全行とページ2の先頭3行
#[tokio::test]
async fn test_scenario_b_bulk_prefix_spans_pages() {
    let catalog = InMemoryCatalog { total: 120 };
    let mut view = ViewState::new();
    view.navigate(&catalog, 1).await.unwrap();

    view.submit_bulk("15").unwrap();
    assert_eq!(view.selected_count(), 15);
    assert_eq!(selected_on_page(&view).len(), 12);

    view.navigate(&catalog, 2).await.unwrap();
    let flags: Vec<bool> = view.rows().iter().map(|r| r.selected).collect();
    assert_eq!(flags, vec![true, true, true, false, false, false, false, false, false, false, false, false]);
    let globals: Vec<u64> = view.rows().iter().filter(|r| r.selected).map(|r| r.global_index).collect();
    assert_eq!(globals, vec![12, 13, 14]);
}

/// シナリオC: 一括中にページ2で1行外すと一括は解除され、他ページの暗黙の選択は失われる
#[tokio::test]
async fn test_scenario_c_page_edit_overrides_bulk() {
    let catalog = InMemoryCatalog { total: 120 };
    let mut view = ViewState::new();
    view.navigate(&catalog, 1).await.unwrap();
    view.submit_bulk("15").unwrap();
    view.navigate(&catalog, 2).await.unwrap();

    let mut selection = selected_on_page(&view);
    assert_eq!(selection, vec![13, 14, 15]);
    selection.retain(|&id| id != 14);
    view.set_page_selection(selection);

    assert_eq!(view.selection().bulk_count(), 0);
    assert_eq!(view.selection().explicit_ids(), HashSet::from([13, 15]));
    assert_eq!(view.selected_count(), 2);

    view.navigate(&catalog, 1).await.unwrap();
    assert!(selected_on_page(&view).is_empty());
}

/// シナリオD: 0・空の一括入力は何もしない
#[tokio::test]
async fn test_scenario_d_invalid_bulk_input_is_noop() {
    let catalog = InMemoryCatalog { total: 120 };
    let mut view = ViewState::new();
    view.navigate(&catalog, 1).await.unwrap();
    view.set_page_selection(vec![1]);

    assert!(view.submit_bulk("0").is_err());
    assert!(view.submit_bulk("").is_err());
    assert_eq!(view.selected_count(), 1);
    assert_eq!(selected_on_page(&view), vec![1]);

    view.submit_bulk("5").unwrap();
    assert!(view.submit_bulk("").is_err());
    assert_eq!(view.selected_count(), 5);
}

/// データセットより大きい一括値は丸めずにそのまま件数表示される
#[tokio::test]
async fn test_bulk_larger_than_total_is_reported_verbatim() {
    let catalog = InMemoryCatalog { total: 20 };
    let mut view = ViewState::new();
    view.navigate(&catalog, 2).await.unwrap();
    assert_eq!(view.records().len(), 8);

    view.submit_bulk("500").unwrap();
    assert_eq!(view.selected_label(), "Selected: 500 rows");
    assert_eq!(selected_on_page(&view).len(), 8);
}

/// ページ編集は表示中ページ以外の明示選択を変えない
#[tokio::test]
async fn test_page_edit_does_not_touch_other_pages() {
    let catalog = InMemoryCatalog { total: 120 };
    let mut view = ViewState::new();

    for page in 1..=4u32 {
        view.navigate(&catalog, page).await.unwrap();
        let first_id = view.records()[0].id;
        view.set_page_selection(vec![first_id]);
    }
    assert_eq!(view.selected_count(), 4);

    view.navigate(&catalog, 3).await.unwrap();
    view.set_page_all(true);
    view.set_page_all(false);

    assert_eq!(view.selection().explicit_ids(), HashSet::from([1, 13, 37]));
}

/// 一括モード中は明示IDに関係なく先頭n件が選択
#[tokio::test]
async fn test_bulk_prefix_holds_for_every_index_below_count() {
    let catalog = InMemoryCatalog { total: 120 };
    let mut view = ViewState::new();
    view.navigate(&catalog, 1).await.unwrap();
    view.set_page_selection(vec![2, 4, 6]);
    view.submit_bulk("30").unwrap();
    assert!(view.selection().explicit_ids().is_empty());

    for page in 1..=4u32 {
        view.navigate(&catalog, page).await.unwrap();
        for row in view.rows() {
            assert_eq!(row.selected, row.global_index < 30, "global index {}", row.global_index);
        }
    }
}

/// 取得失敗は前の表示を保ち、次の取得で回復する
#[tokio::test]
async fn test_failed_load_then_recovery() {
    struct Flaky;

    impl PageLoader for Flaky {
        async fn load(&self, page: u32) -> Result<ArtworkPage> {
            if page == 2 {
                return Err(artwork_table_common::Error::Http("connection reset".into()));
            }
            InMemoryCatalog { total: 120 }.load(page).await
        }
    }

    let mut view = ViewState::new();
    assert_eq!(view.navigate(&Flaky, 1).await.unwrap(), LoadOutcome::Applied);
    assert_eq!(view.navigate(&Flaky, 2).await.unwrap(), LoadOutcome::Failed);
    assert_eq!(view.records()[0].id, 1);
    assert!(!view.loading());

    assert_eq!(view.navigate(&Flaky, 3).await.unwrap(), LoadOutcome::Applied);
    assert_eq!(view.records()[0].id, 25);
}
