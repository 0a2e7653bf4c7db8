//! 菜单管理：菜品增删改、上下架、关联加料组

use std::collections::BTreeSet;

use leptos::prelude::*;
use pancakes_shared::protocol::{
    AdminMenuRequest, AdminModifierGroupsRequest, CreateMenuItemRequest, DeleteMenuItemRequest,
    ItemModifiersRequest, SetItemModifierGroupsRequest, UpdateMenuItemRequest,
};
use pancakes_shared::{MenuItem, ModifierGroup};
use pancakes_shop::error::FieldError;

use crate::components::common::{
    CheckboxField, FormField, Modal, QueryStatus, SubmitButton, non_blank, parse_amount, query_view, rows_of,
};
use crate::components::data_table::DataTable;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::query::{use_mutation, use_query};

#[derive(Clone)]
enum Editing {
    New,
    Item(MenuItem),
    Modifiers(MenuItem),
}

#[component]
pub fn MenuAdminPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let available = RwSignal::new(Option::<bool>::None);
    let editing = RwSignal::new(Option::<Editing>::None);
    let mutation = use_mutation();

    let items = use_query(move || AdminMenuRequest {
        category: Some(category.get()),
        search: Some(search.get()),
        available: available.get(),
    });

    let actions = Callback::new(move |item: MenuItem| {
        let id = item.id;
        let is_available = item.is_available;
        let for_edit = item.clone();
        view! {
            <button
                class="btn btn-ghost btn-xs"
                on:click=move |_| mutation.run_with_toast(
                    UpdateMenuItemRequest { id, is_available: Some(!is_available), ..Default::default() },
                    if is_available { "Marked as sold out" } else { "Back on the menu" },
                )
            >
                {if is_available { "Sold out" } else { "Available" }}
            </button>
            <button class="btn btn-ghost btn-xs" on:click=move |_| editing.set(Some(Editing::Item(for_edit.clone())))>
                "Edit"
            </button>
            <button class="btn btn-ghost btn-xs" on:click=move |_| editing.set(Some(Editing::Modifiers(item.clone())))>
                "Modifiers"
            </button>
            <DeleteConfirmButton on_confirm=move |_| mutation.run_with_toast(DeleteMenuItemRequest { id }, "Item deleted") />
        }
        .into_any()
    });

    let close = Callback::new(move |_| editing.set(None));

    view! {
        <div class="flex flex-wrap items-end gap-2">
            <input
                type="search"
                placeholder="Search"
                class="input input-bordered input-sm"
                on:change=move |ev| search.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Category"
                class="input input-bordered input-sm"
                on:change=move |ev| category.set(event_target_value(&ev))
            />
            <select
                class="select select-bordered select-sm"
                on:change=move |ev| available.set(match event_target_value(&ev).as_str() {
                    "yes" => Some(true),
                    "no" => Some(false),
                    _ => None,
                })
            >
                <option value="">"Any availability"</option>
                <option value="yes">"Available"</option>
                <option value="no">"Sold out"</option>
            </select>
            <button class="btn btn-primary btn-sm ml-auto" on:click=move |_| editing.set(Some(Editing::New))>
                "New item"
            </button>
        </div>
        <QueryStatus state=items />
        <DataTable rows=rows_of(items) actions=actions />
        {move || {
            editing.get().map(|mode| match mode {
                Editing::New => view! { <ItemEditor existing=None on_close=close /> }.into_any(),
                Editing::Item(item) => view! { <ItemEditor existing=Some(item) on_close=close /> }.into_any(),
                Editing::Modifiers(item) => view! { <GroupAssignment item=item on_close=close /> }.into_any(),
            })
        }}
    }
}

#[component]
fn ItemEditor(existing: Option<MenuItem>, on_close: Callback<()>) -> impl IntoView {
    let mutation = use_mutation();
    let id = existing.as_ref().map(|i| i.id);
    let title = if existing.is_some() { "Edit item" } else { "New item" };

    let name = RwSignal::new(existing.as_ref().map(|i| i.name.clone()).unwrap_or_default());
    let description = RwSignal::new(existing.as_ref().map(|i| i.description.clone()).unwrap_or_default());
    let price = RwSignal::new(existing.as_ref().map(|i| format!("{:.2}", i.price)).unwrap_or_default());
    let category = RwSignal::new(existing.as_ref().and_then(|i| i.category.clone()).unwrap_or_default());
    let image_url = RwSignal::new(existing.as_ref().and_then(|i| i.image_url.clone()).unwrap_or_default());
    let position = RwSignal::new(existing.as_ref().map(|i| i.position.to_string()).unwrap_or_else(|| "0".into()));
    let is_available = RwSignal::new(existing.as_ref().is_none_or(|i| i.is_available));
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut found = Vec::new();
        if name.get().trim().is_empty() {
            found.push(FieldError::new("name", "Name is required"));
        }
        let amount = parse_amount(&mut found, "price", &price.get());
        let order = match position.get().trim().parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => {
                found.push(FieldError::new("position", "Enter a whole number"));
                None
            }
        };
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        let done = move |_| on_close.run(());
        match id {
            Some(id) => mutation.run_then(
                UpdateMenuItemRequest {
                    id,
                    name: Some(name.get().trim().to_string()),
                    description: Some(description.get().trim().to_string()),
                    price: amount,
                    category: Some(category.get().trim().to_string()),
                    image_url: Some(image_url.get().trim().to_string()),
                    is_available: Some(is_available.get()),
                    position: order,
                },
                "Item saved",
                done,
            ),
            None => mutation.run_then(
                CreateMenuItemRequest {
                    name: name.get().trim().to_string(),
                    description: description.get().trim().to_string(),
                    price: amount.unwrap_or_default(),
                    category: non_blank(&category.get()),
                    image_url: non_blank(&image_url.get()),
                    is_available: is_available.get(),
                },
                "Item created",
                done,
            ),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="space-y-1" on:submit=on_submit>
                <FormField label="Name" name="name" value=name errors=errors />
                <FormField label="Description" name="description" value=description errors=errors />
                <div class="grid grid-cols-2 gap-2">
                    <FormField label="Price" name="price" value=price errors=errors />
                    <FormField label="Position" name="position" value=position errors=errors />
                </div>
                <FormField label="Category" name="category" value=category errors=errors />
                <FormField label="Image URL" name="image_url" input_type="url" value=image_url errors=errors />
                <CheckboxField label="Available" value=is_available />
                <div class="modal-action">
                    <SubmitButton label="Save" pending=mutation.pending_signal() />
                </div>
            </form>
        </Modal>
    }
}

/// 为菜品选择加料组
#[component]
fn GroupAssignment(item: MenuItem, on_close: Callback<()>) -> impl IntoView {
    let mutation = use_mutation();
    let item_id = item.id;
    let all_groups = use_query(|| AdminModifierGroupsRequest);
    let attached = use_query(move || ItemModifiersRequest { item_id });
    let chosen = RwSignal::new(BTreeSet::<u32>::new());

    // 已关联的组加载后作为初始勾选
    Effect::new(move |_| {
        if let Some(groups) = attached.with(|s| s.data.clone()) {
            chosen.set(groups.iter().map(|g| g.id).collect());
        }
    });

    let on_save = move |_| {
        let group_ids = chosen.with(|c| c.iter().copied().collect());
        mutation.run_then(
            SetItemModifierGroupsRequest { item_id, group_ids },
            "Modifier groups updated",
            move |_| on_close.run(()),
        );
    };

    view! {
        <Modal title=format!("Modifiers for {}", item.name) on_close=on_close>
            {query_view(all_groups, move |groups: Vec<ModifierGroup>| {
                if groups.is_empty() {
                    return view! { <p class="text-base-content/60">"No modifier groups yet."</p> }.into_any();
                }
                groups
                    .into_iter()
                    .map(|group| {
                        let group_id = group.id;
                        let count = format!("{} options", group.options.len());
                        view! {
                            <label class="label cursor-pointer justify-start gap-3">
                                <input
                                    type="checkbox"
                                    class="checkbox checkbox-sm"
                                    prop:checked=move || chosen.with(|c| c.contains(&group_id))
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        chosen.update(|c| {
                                            if on { c.insert(group_id); } else { c.remove(&group_id); }
                                        });
                                    }
                                />
                                <span class="label-text">{group.name}</span>
                                <span class="label-text-alt">{count}</span>
                            </label>
                        }
                    })
                    .collect_view()
                    .into_any()
            })}
            <div class="modal-action">
                <button class="btn btn-primary" disabled=move || mutation.pending() on:click=on_save>"Save"</button>
            </div>
        </Modal>
    }
}
