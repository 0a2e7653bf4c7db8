//! 通用数据表
//!
//! 列定义、筛选、排序和分页规则都来自核心库的 [`TableRow`] / [`TableState`]，
//! 这里只负责渲染和把点击转成状态变化。

use leptos::prelude::*;
use pancakes_shop::table::{self, SortDirection, TableRow, TableState};

#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    /// 每行最后一列的操作按钮
    #[prop(optional, into)]
    actions: Option<Callback<T, AnyView>>,
    #[prop(default = "Nothing here yet")] empty_text: &'static str,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(TableState::default());
    let columns = T::columns();
    let has_actions = actions.is_some();

    let header = columns
        .iter()
        .map(|column| {
            let column = *column;
            let indicator = move || match state.with(|s| s.sort_direction(column.key)) {
                Some(SortDirection::Asc) => " ▲",
                Some(SortDirection::Desc) => " ▼",
                None => "",
            };
            if column.sortable {
                view! {
                    <th
                        class="cursor-pointer select-none"
                        on:click=move |_| state.update(|s| s.toggle_sort(column.key))
                    >
                        {column.label}
                        {indicator}
                    </th>
                }
                .into_any()
            } else {
                view! { <th>{column.label}</th> }.into_any()
            }
        })
        .collect_view();

    let column_count = columns.len() + usize::from(has_actions);
    let body = move || {
        let current = state.get();
        rows.with(|all| {
            let page = table::apply(all, &current);
            if page.rows.is_empty() {
                return view! {
                    <tr>
                        <td colspan=column_count class="text-center text-base-content/60 py-8">
                            {empty_text}
                        </td>
                    </tr>
                }
                .into_any();
            }
            page.rows
                .into_iter()
                .map(|row| {
                    let cells = T::columns()
                        .into_iter()
                        .map(|c| view! { <td>{row.cell(c.key).to_string()}</td> })
                        .collect_view();
                    let action = actions.map(|cb| {
                        view! { <td class="whitespace-nowrap text-right">{cb.run(row.clone())}</td> }
                    });
                    view! {
                        <tr class="hover">
                            {cells}
                            {action}
                        </tr>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let summary = move || {
        let current = state.get();
        rows.with(|all| {
            let page = table::apply(all, &current);
            (page.page, page.page_count, page.total)
        })
    };

    view! {
        <div class="space-y-3">
            <input
                type="search"
                placeholder="Filter..."
                class="input input-bordered input-sm w-full max-w-xs"
                prop:value=move || state.with(|s| s.filter.clone())
                on:input=move |ev| state.update(|s| s.set_filter(event_target_value(&ev)))
            />
            <div class="overflow-x-auto">
                <table class="table table-zebra table-sm">
                    <thead>
                        <tr>
                            {header}
                            {has_actions.then(|| view! { <th></th> })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            <div class="flex items-center justify-between text-sm">
                <span class="text-base-content/60">
                    {move || {
                        let (page, count, total) = summary();
                        format!("Page {} of {} · {} rows", page + 1, count, total)
                    }}
                </span>
                <div class="join">
                    <button
                        class="join-item btn btn-sm"
                        disabled=move || summary().0 == 0
                        on:click=move |_| {
                            let (page, _, _) = summary();
                            state.update(|s| s.page = page.saturating_sub(1));
                        }
                    >
                        "«"
                    </button>
                    <button
                        class="join-item btn btn-sm"
                        disabled=move || {
                            let (page, count, _) = summary();
                            page + 1 >= count
                        }
                        on:click=move |_| {
                            let (page, _, _) = summary();
                            state.update(|s| s.page = page + 1);
                        }
                    >
                        "»"
                    </button>
                </div>
            </div>
        </div>
    }
}
