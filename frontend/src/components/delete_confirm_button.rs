//! 行内删除确认按钮

use leptos::prelude::*;

/// 先显示删除按钮，点击后变为“确认 / 取消”
///
/// 传入 `confirming` 时，外部也可以直接打开确认状态。
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(default = "Delete")] label: &'static str,
    #[prop(optional)] confirming: Option<RwSignal<bool>>,
) -> impl IntoView {
    let confirming = confirming.unwrap_or_else(|| RwSignal::new(false));
    let set_confirming = confirming.write_only();

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    class="btn btn-ghost btn-xs text-error"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    {label}
                </button>
            }
        >
            <span class="inline-flex items-center gap-1">
                <span class="text-xs">"Sure?"</span>
                <button
                    class="btn btn-error btn-xs"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="btn btn-ghost btn-xs"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
