//! 一括選択オーバーレイコンポーネント
//!
//! 入力値はそのまま親へ渡す。受理されたかどうかで閉じるかを親が決める。

use leptos::prelude::*;

#[component]
pub fn BulkSelectOverlay<F>(
    open: ReadSignal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let (input, set_input) = signal(String::new());

    view! {
        <Show when=move || open.get()>
            <div class="bulk-overlay">
                <p>"Select rows:"</p>
                <input
                    type="number"
                    min="1"
                    step="1"
                    placeholder="Enter number"
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                    }
                />
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_submit = on_submit.clone();
                        move |_| on_submit(input.get_untracked())
                    }
                >
                    "Submit"
                </button>
            </div>
        </Show>
    }
}
