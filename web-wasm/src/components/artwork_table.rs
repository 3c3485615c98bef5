//! 作品テーブルコンポーネント

use leptos::prelude::*;
use artwork_table_common::{ArtworkId, Column, PageCheckState, RowView, ViewState};

#[component]
pub fn ArtworkTable<FR, FP>(
    state: RwSignal<ViewState>,
    on_toggle_row: FR,
    on_toggle_page: FP,
) -> impl IntoView
where
    FR: Fn(ArtworkId) + 'static + Clone + Send + Sync,
    FP: Fn(bool) + 'static + Clone + Send + Sync,
{
    let check_state = move || state.with(|s| s.page_check_state());
    let is_loading = move || state.with(|s| s.loading());

    view! {
        <div class="table-wrapper" class:loading=is_loading>
            <Show when=is_loading>
                <div class="table-loading">"Loading..."</div>
            </Show>
            <table class="artwork-table">
                <thead>
                    <tr>
                        <th class="select-col">
                            <input
                                type="checkbox"
                                prop:checked=move || check_state() == PageCheckState::All
                                prop:indeterminate=move || check_state() == PageCheckState::Some
                                on:change={
                                    let on_toggle_page = on_toggle_page.clone();
                                    move |ev| on_toggle_page(event_target_checked(&ev))
                                }
                            />
                        </th>
                        {Column::ALL
                            .iter()
                            .map(|column| view! { <th>{column.header()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.with(|s| s.rows())
                        key=|row| (row.artwork.id, row.selected)
                        children=move |row: RowView| {
                            let on_toggle_row = on_toggle_row.clone();
                            view! { <ArtworkRow row=row on_toggle_row=on_toggle_row /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ArtworkRow<FR>(row: RowView, on_toggle_row: FR) -> impl IntoView
where
    FR: Fn(ArtworkId) + 'static + Clone + Send + Sync,
{
    let id = row.artwork.id;
    let cells = Column::ALL
        .iter()
        .map(|column| view! { <td>{row.artwork.cell(*column)}</td> })
        .collect_view();

    view! {
        <tr class:selected=row.selected>
            <td class="select-col">
                <input
                    type="checkbox"
                    prop:checked=row.selected
                    on:change=move |_| on_toggle_row(id)
                />
            </td>
            {cells}
        </tr>
    }
}
