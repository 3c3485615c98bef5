//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use artwork_table_common::{page_from_offset, ArtworkId, PageLoader, ViewState, ARTIC_API_URL};
use crate::api::artic::FetchPageLoader;
use crate::components::{
    artwork_table::ArtworkTable,
    bulk_select_overlay::BulkSelectOverlay,
    page_controls::PageControls,
    selection_summary::SelectionSummary,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // ビュー状態（ページ・読み込み中・表示行・選択をまとめて保持）
    let state = RwSignal::new(ViewState::new());
    let (overlay_open, set_overlay_open) = signal(false);

    // ページ取得。古い要求への応答は ViewState 側で破棄される
    let load_page = move |page: u32| {
        let Some(Ok(request)) = state.try_update(|s| s.begin_load(page)) else {
            return;
        };
        spawn_local(async move {
            let loader = FetchPageLoader::new(ARTIC_API_URL);
            let result = loader.load(request.page).await;
            if let Err(e) = &result {
                gloo::console::error!("Error fetching data:", e.to_string());
            }
            state.update(|s| {
                s.finish_load(request, result);
            });
        });
    };

    load_page(1);

    // ページャ: (first, rows) → ページ番号
    let on_page = move |first: u64, rows: u64| {
        if let Some(page) = page_from_offset(first, rows) {
            load_page(page);
        }
    };

    // 行のチェック切替
    let on_toggle_row = move |id: ArtworkId| {
        state.update(|s| s.toggle_row(id));
    };

    // ヘッダーの全選択/全解除
    let on_toggle_page = move |selected: bool| {
        state.update(|s| s.set_page_all(selected));
    };

    // 一括選択。不正な入力ではオーバーレイを開いたままにする
    let on_bulk_submit = move |value: String| {
        let accepted = state.try_update(|s| s.submit_bulk(&value).is_ok()).unwrap_or(false);
        if accepted {
            set_overlay_open.set(false);
        }
    };

    let on_toggle_overlay = move |_| {
        set_overlay_open.update(|open| *open = !*open);
    };

    let label = Signal::derive(move || state.with(|s| s.selected_label()));
    let paginator = Signal::derive(move || state.with(|s| s.paginator()));
    let loading = Signal::derive(move || state.with(|s| s.loading()));

    view! {
        <div class="container">
            <SelectionSummary label=label on_toggle_overlay=on_toggle_overlay />

            <BulkSelectOverlay open=overlay_open on_submit=on_bulk_submit />

            <ArtworkTable
                state=state
                on_toggle_row=on_toggle_row
                on_toggle_page=on_toggle_page
            />

            <PageControls paginator=paginator disabled=loading on_page=on_page />
        </div>
    }
}
