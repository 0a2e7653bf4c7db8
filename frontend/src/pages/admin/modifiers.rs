//! 加料组与选项管理

use leptos::prelude::*;
use pancakes_shared::protocol::{
    AdminModifierGroupsRequest, CreateModifierGroupRequest, CreateModifierOptionRequest,
    DeleteModifierGroupRequest, DeleteModifierOptionRequest, UpdateModifierGroupRequest,
    UpdateModifierOptionRequest,
};
use pancakes_shared::{ModifierGroup, ModifierOption};
use pancakes_shop::error::FieldError;

use crate::components::common::{
    CheckboxField, FormField, Modal, QueryStatus, SubmitButton, money, parse_amount, parse_count, rows_of,
};
use crate::components::data_table::DataTable;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::query::{use_mutation, use_query};

#[component]
pub fn ModifiersPage() -> impl IntoView {
    let groups = use_query(|| AdminModifierGroupsRequest);
    let mutation = use_mutation();
    let selected = RwSignal::new(Option::<u32>::None);
    // None: 关闭；Some(None): 新建；Some(Some(group)): 编辑
    let editing = RwSignal::new(Option::<Option<ModifierGroup>>::None);

    let actions = Callback::new(move |group: ModifierGroup| {
        let id = group.id;
        view! {
            <button class="btn btn-ghost btn-xs" on:click=move |_| selected.set(Some(id))>"Options"</button>
            <button class="btn btn-ghost btn-xs" on:click=move |_| editing.set(Some(Some(group.clone())))>"Edit"</button>
            <DeleteConfirmButton on_confirm=move |_| {
                if selected.get_untracked() == Some(id) {
                    selected.set(None);
                }
                mutation.run_with_toast(DeleteModifierGroupRequest { id }, "Group deleted");
            } />
        }
        .into_any()
    });

    let selected_group = move || {
        let id = selected.get()?;
        groups.with(|s| s.data.as_ref()?.iter().find(|g| g.id == id).cloned())
    };
    let close = Callback::new(move |_| editing.set(None));

    view! {
        <div class="flex justify-end">
            <button class="btn btn-primary btn-sm" on:click=move |_| editing.set(Some(None))>"New group"</button>
        </div>
        <QueryStatus state=groups />
        <DataTable rows=rows_of(groups) actions=actions />
        {move || selected_group().map(|group| view! { <OptionsPanel group=group on_close=Callback::new(move |_| selected.set(None)) /> })}
        {move || editing.get().map(|existing| view! { <GroupEditor existing=existing on_close=close /> })}
    }
}

#[component]
fn GroupEditor(existing: Option<ModifierGroup>, on_close: Callback<()>) -> impl IntoView {
    let mutation = use_mutation();
    let id = existing.as_ref().map(|g| g.id);
    let title = if existing.is_some() { "Edit group" } else { "New group" };

    let name = RwSignal::new(existing.as_ref().map(|g| g.name.clone()).unwrap_or_default());
    let min_select = RwSignal::new(existing.as_ref().map_or(0, |g| g.min_select).to_string());
    let max_select = RwSignal::new(
        existing
            .as_ref()
            .and_then(|g| g.max_select)
            .map(|m| m.to_string())
            .unwrap_or_default(),
    );
    let required = RwSignal::new(existing.as_ref().is_some_and(|g| g.required));
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut found = Vec::new();
        let group_name = name.get().trim().to_string();
        if group_name.is_empty() {
            found.push(FieldError::new("name", "Name is required"));
        }
        let min = parse_count(&mut found, "min_select", &min_select.get()).map(Option::unwrap_or_default);
        let max = parse_count(&mut found, "max_select", &max_select.get());
        if let (Some(min), Some(Some(max))) = (min, max) {
            if max < min.max(1) {
                found.push(FieldError::new("max_select", "Maximum must be at least the minimum"));
            }
        }
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        let done = move |_| on_close.run(());
        match id {
            Some(id) => mutation.run_then(
                UpdateModifierGroupRequest {
                    id,
                    name: Some(group_name),
                    min_select: min,
                    max_select: max.flatten(),
                    required: Some(required.get()),
                },
                "Group saved",
                done,
            ),
            None => mutation.run_then(
                CreateModifierGroupRequest {
                    name: group_name,
                    min_select: min.unwrap_or_default(),
                    max_select: max.flatten(),
                    required: required.get(),
                },
                "Group created",
                done,
            ),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="space-y-1" on:submit=on_submit>
                <FormField label="Name" name="name" value=name errors=errors placeholder="Toppings" />
                <div class="grid grid-cols-2 gap-2">
                    <FormField label="Min picks" name="min_select" value=min_select errors=errors />
                    <FormField label="Max picks" name="max_select" value=max_select errors=errors placeholder="No limit" />
                </div>
                <CheckboxField label="Required" value=required />
                <div class="modal-action">
                    <SubmitButton label="Save" pending=mutation.pending_signal() />
                </div>
            </form>
        </Modal>
    }
}

/// 选中组的选项列表和新增表单
#[component]
fn OptionsPanel(group: ModifierGroup, on_close: Callback<()>) -> impl IntoView {
    let mutation = use_mutation();
    let group_id = group.id;
    let name = RwSignal::new(String::new());
    let price = RwSignal::new("0.00".to_string());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut found = Vec::new();
        let option_name = name.get().trim().to_string();
        if option_name.is_empty() {
            found.push(FieldError::new("option_name", "Name is required"));
        }
        let delta = parse_amount(&mut found, "price_delta", &price.get());
        errors.set(found.clone());
        let Some(price_delta) = delta.filter(|_| found.is_empty()) else {
            return;
        };
        mutation.run_then(
            CreateModifierOptionRequest {
                group_id,
                name: option_name,
                price_delta,
                is_available: true,
            },
            "Option added",
            move |_| {
                name.set(String::new());
                price.set("0.00".to_string());
            },
        );
    };

    let rows = group
        .options
        .iter()
        .cloned()
        .map(|option| view! { <OptionRow group_id=group_id option=option /> })
        .collect_view();

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{format!("Options in {}", group.name)}</h2>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
                <table class="table table-sm">
                    <thead>
                        <tr><th>"Name"</th><th>"Price"</th><th>"Available"</th><th></th></tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <form class="flex flex-wrap items-end gap-2" on:submit=on_add>
                    <FormField label="New option" name="option_name" value=name errors=errors />
                    <FormField label="Extra price" name="price_delta" value=price errors=errors />
                    <SubmitButton label="Add" pending=mutation.pending_signal() class="btn btn-secondary" />
                </form>
            </div>
        </div>
    }
}

#[component]
fn OptionRow(group_id: u32, option: ModifierOption) -> impl IntoView {
    let mutation = use_mutation();
    let option_id = option.id;
    let is_available = option.is_available;

    view! {
        <tr>
            <td>{option.name.clone()}</td>
            <td>{money(option.price_delta)}</td>
            <td>
                <input
                    type="checkbox"
                    class="toggle toggle-sm"
                    prop:checked=is_available
                    on:change=move |_| mutation.run_with_toast(
                        UpdateModifierOptionRequest {
                            group_id,
                            option_id,
                            is_available: Some(!is_available),
                            ..Default::default()
                        },
                        "Option updated",
                    )
                />
            </td>
            <td class="text-right">
                <DeleteConfirmButton on_confirm=move |_| {
                    mutation.run_with_toast(DeleteModifierOptionRequest { group_id, option_id }, "Option deleted")
                } />
            </td>
        </tr>
    }
}
