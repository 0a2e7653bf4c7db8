//! 菜单页：分类、搜索、加入购物车

use std::collections::BTreeSet;

use leptos::prelude::*;
use pancakes_shared::MenuItem;
use pancakes_shared::protocol::MenuRequest;
use pancakes_shop::cart::NewCartItem;

use crate::cart::use_cart;
use crate::components::common::{money, query_view};
use crate::components::modifier_picker::ModifierPicker;
use crate::query::use_query_with;

#[component]
pub fn MenuPage() -> impl IntoView {
    let category = RwSignal::new(Option::<String>::None);
    let search = RwSignal::new(String::new());
    let picking = RwSignal::new(Option::<MenuItem>::None);

    // 分类标签来自不带过滤条件的完整菜单
    let all = use_query_with(MenuRequest::default, |resources, req| async move {
        resources.menu(&req).await
    });
    let filtered = use_query_with(
        move || MenuRequest {
            category: category.get(),
            search: Some(search.get()),
        },
        |resources, req| async move { resources.menu(&req).await },
    );

    let categories = move || {
        all.with(|s| {
            s.data
                .iter()
                .flatten()
                .filter_map(|item| item.category.clone())
                .collect::<BTreeSet<_>>()
        })
    };

    let tab = move |value: Option<String>, label: String| {
        let active = value.clone();
        view! {
            <a
                role="tab"
                class=move || if category.get() == active { "tab tab-active" } else { "tab" }
                on:click=move |_| category.set(value.clone())
            >
                {label}
            </a>
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center gap-4">
                <h1 class="text-3xl font-bold flex-1">"Menu"</h1>
                <input
                    type="search"
                    placeholder="Search pancakes..."
                    class="input input-bordered w-full max-w-xs"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <div role="tablist" class="tabs tabs-boxed w-fit">
                {tab(None, "All".to_string())}
                {move || {
                    categories()
                        .into_iter()
                        .map(|c| tab(Some(c.clone()), c))
                        .collect_view()
                }}
            </div>
            {query_view(filtered, move |items: Vec<MenuItem>| {
                if items.is_empty() {
                    return view! {
                        <p class="text-center text-base-content/60 py-12">"Nothing matches your search."</p>
                    }
                    .into_any();
                }
                let mut items = items;
                items.sort_by_key(|i| i.position);
                view! {
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {items.into_iter().map(|item| view! { <MenuCard item=item picking=picking /> }).collect_view()}
                    </div>
                }
                .into_any()
            })}
            {move || {
                picking
                    .get()
                    .map(|item| {
                        view! {
                            <ModifierPicker item=item on_close=Callback::new(move |_| picking.set(None)) />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn MenuCard(item: MenuItem, picking: RwSignal<Option<MenuItem>>) -> impl IntoView {
    let cart = use_cart();
    let available = item.is_available;
    let stored = StoredValue::new(item.clone());

    let on_add = move |_| {
        let item = stored.get_value();
        if item.has_modifiers {
            picking.set(Some(item));
        } else {
            cart.add(NewCartItem::new(item.id, item.name, item.price));
        }
    };

    view! {
        <div class="card bg-base-100 shadow-sm">
            {item.image_url.clone().map(|src| view! {
                <figure><img src=src alt=item.name.clone() class="h-40 w-full object-cover" /></figure>
            })}
            <div class="card-body">
                <h2 class="card-title">
                    {item.name.clone()}
                    {(!available).then(|| view! { <span class="badge badge-ghost">"Sold out"</span> })}
                </h2>
                <p class="text-sm text-base-content/70">{item.description.clone()}</p>
                <div class="card-actions items-center justify-between">
                    <span class="font-semibold">{money(item.price)}</span>
                    <button class="btn btn-primary btn-sm" disabled=!available on:click=on_add>
                        {if item.has_modifiers { "Customize" } else { "Add" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
