//! 選択件数表示コンポーネント
//!
//! クリックで一括選択オーバーレイを開閉する

use leptos::prelude::*;

#[component]
pub fn SelectionSummary<F>(
    label: Signal<String>,
    on_toggle_overlay: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div
            class="selection-summary"
            on:click={
                let on_toggle_overlay = on_toggle_overlay.clone();
                move |_| on_toggle_overlay(())
            }
        >
            <span class="selection-label">{move || label.get()}</span>
            <span class="chevron">"▾"</span>
        </div>
    }
}
