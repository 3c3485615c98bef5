//! ページャコンポーネント
//!
//! ページ変更は `(first, rows)` で親へ通知する

use leptos::prelude::*;
use artwork_table_common::{pagination::first_row_offset, Paginator, PAGE_SIZE};

#[component]
pub fn PageControls<F>(
    paginator: Signal<Paginator>,
    disabled: Signal<bool>,
    on_page: F,
) -> impl IntoView
where
    F: Fn(u64, u64) + 'static + Clone + Send + Sync,
{
    let emit = move |page: u32| {
        let on_page = on_page.clone();
        move |_: leptos::ev::MouseEvent| on_page(first_row_offset(page), u64::from(PAGE_SIZE))
    };

    let first_button = {
        let emit = emit.clone();
        move || {
            let p = paginator.get();
            view! {
                <button class="page-btn" disabled={p.is_first() || disabled.get()} on:click={emit(1)}>"«"</button>
            }
        }
    };

    let prev_button = {
        let emit = emit.clone();
        move || {
            let p = paginator.get();
            let target = p.previous().unwrap_or(1);
            view! {
                <button class="page-btn" disabled={p.is_first() || disabled.get()} on:click={emit(target)}>"‹"</button>
            }
        }
    };

    let page_links = {
        let emit = emit.clone();
        move || {
            let p = paginator.get();
            p.links()
                .into_iter()
                .map(|page| {
                    let class = if page == p.page { "page-btn page-current" } else { "page-btn" };
                    view! {
                        <button class=class disabled={disabled.get()} on:click={emit(page)}>{page}</button>
                    }
                })
                .collect_view()
        }
    };

    let next_button = {
        let emit = emit.clone();
        move || {
            let p = paginator.get();
            let target = p.next().unwrap_or(p.page);
            view! {
                <button class="page-btn" disabled={p.is_last() || disabled.get()} on:click={emit(target)}>"›"</button>
            }
        }
    };

    let last_button = move || {
        let p = paginator.get();
        view! {
            <button class="page-btn" disabled={p.is_last() || disabled.get()} on:click={emit(p.last())}>"»"</button>
        }
    };

    view! {
        <div class="page-controls">
            <span class="page-report">{move || paginator.get().report()}</span>
            {first_button}
            {prev_button}
            {page_links}
            {next_button}
            {last_button}
        </div>
    }
}
