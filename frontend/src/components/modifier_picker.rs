//! 加料选择弹窗
//!
//! 菜单页点了带加料的菜品后弹出。选好的加料 id 和展示用明细一起放进购物车。

use leptos::prelude::*;
use pancakes_shared::protocol::ItemModifiersRequest;
use pancakes_shared::{MAX_LINE_QUANTITY, MenuItem, ModifierGroup};
use pancakes_shop::cart::{ModifierSelection, NewCartItem};

use crate::cart::use_cart;
use crate::components::common::{ErrorAlert, money, query_view};
use crate::query::use_query;

#[component]
pub fn ModifierPicker(item: MenuItem, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let item_id = item.id;
    let groups = use_query(move || ItemModifiersRequest { item_id });
    let item = StoredValue::new(item);

    let selection = RwSignal::new(ModifierSelection::default());
    let quantity = RwSignal::new(1i64);
    let note = RwSignal::new(String::new());
    let problems = RwSignal::new(Vec::<String>::new());

    let cart = use_cart();

    let render_group = move |group: ModifierGroup| {
        let group = StoredValue::new(group);
        let hint = group.with_value(|g| match (g.required, g.max_select) {
            (true, Some(1)) => "Required · choose one".to_string(),
            (true, _) => "Required".to_string(),
            (false, Some(max)) => format!("Optional · up to {}", max),
            (false, None) => "Optional".to_string(),
        });
        let options = group
            .with_value(|g| g.options.clone())
            .into_iter()
            .map(|option| {
                let group_id = group.with_value(|g| g.id);
                let option_id = option.id;
                let input_type = if group.with_value(ModifierGroup::is_single_choice) {
                    "radio"
                } else {
                    "checkbox"
                };
                let price = (option.price_delta != 0.0).then(|| format!("+{}", money(option.price_delta)));
                view! {
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type=input_type
                            class=if input_type == "radio" { "radio radio-sm" } else { "checkbox checkbox-sm" }
                            disabled=!option.is_available
                            prop:checked=move || selection.with(|s| s.is_selected(group_id, option_id))
                            on:change=move |_| {
                                group.with_value(|g| selection.update(|s| s.toggle(g, option_id)));
                            }
                        />
                        <span class="label-text flex-1">{option.name.clone()}</span>
                        <span class="label-text-alt">{price}</span>
                    </label>
                }
            })
            .collect_view();

        view! {
            <div class="border border-base-300 rounded-box p-3">
                <div class="flex items-baseline justify-between mb-1">
                    <h4 class="font-semibold">{group.with_value(|g| g.name.clone())}</h4>
                    <span class="text-xs text-base-content/60">{hint}</span>
                </div>
                {options}
            </div>
        }
    };

    let on_add = move |_| {
        let Some(loaded) = groups.with(|s| s.data.clone()) else {
            return;
        };
        let missing = selection.with(|s| s.missing(&loaded));
        if !missing.is_empty() {
            problems.set(missing);
            return;
        }
        let (ids, detail) = selection.with(|s| (s.option_ids(), s.detail(&loaded)));
        let mut new_item = item.with_value(|i| NewCartItem::new(i.id, i.name.clone(), i.price))
            .quantity(quantity.get_untracked())
            .modifiers(ids)
            .mods_detail(detail);
        let note = note.get_untracked();
        if !note.trim().is_empty() {
            new_item = new_item.note(note);
        }
        cart.add(new_item);
        on_close.run(());
    };

    let unit_price = move || {
        let extra = groups.with(|s| {
            s.data
                .as_ref()
                .map_or(0.0, |g| selection.with(|sel| sel.extra(g)))
        });
        item.with_value(|i| i.price) + extra
    };

    view! {
        <div class="modal modal-open">
            <div class="modal-box max-w-lg space-y-4">
                <h3 class="font-bold text-lg">{item.with_value(|i| i.name.clone())}</h3>
                {query_view(groups, move |loaded: Vec<ModifierGroup>| {
                    let mut loaded = loaded;
                    loaded.sort_by_key(|g| g.position);
                    loaded.into_iter().map(render_group).collect_view()
                })}
                <div class="form-control">
                    <label class="label"><span class="label-text">"Note"</span></label>
                    <input
                        type="text"
                        class="input input-bordered input-sm"
                        placeholder="No onions, extra napkins..."
                        prop:value=move || note.get()
                        on:input=move |ev| note.set(event_target_value(&ev))
                    />
                </div>
                <div class="flex items-center gap-2">
                    <button class="btn btn-sm" on:click=move |_| quantity.update(|q| *q = (*q - 1).max(1))>"−"</button>
                    <span class="w-8 text-center">{move || quantity.get()}</span>
                    <button
                        class="btn btn-sm"
                        on:click=move |_| quantity.update(|q| *q = (*q + 1).min(i64::from(MAX_LINE_QUANTITY)))
                    >
                        "+"
                    </button>
                    <span class="ml-auto font-semibold">
                        {move || money(unit_price() * quantity.get() as f64)}
                    </span>
                </div>
                {move || {
                    problems
                        .get()
                        .into_iter()
                        .map(|p| view! { <ErrorAlert message=p /> })
                        .collect_view()
                }}
                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn-primary"
                        disabled=move || groups.with(|s| s.data.is_none())
                        on:click=on_add
                    >
                        "Add to cart"
                    </button>
                </div>
            </div>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        </div>
    }
}
