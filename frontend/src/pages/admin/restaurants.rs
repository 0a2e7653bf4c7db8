use leptos::prelude::*;
use pancakes_shared::Restaurant;
use pancakes_shared::protocol::{
    AdminRestaurantsRequest, CreateRestaurantRequest, DeleteRestaurantRequest, UpdateRestaurantRequest,
};
use pancakes_shop::error::FieldError;

use crate::components::common::{CheckboxField, FormField, Modal, QueryStatus, SubmitButton, non_blank, rows_of};
use crate::components::data_table::DataTable;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::query::{use_mutation, use_query};

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    let restaurants = use_query(|| AdminRestaurantsRequest);
    let mutation = use_mutation();
    let editing = RwSignal::new(Option::<Option<Restaurant>>::None);

    let actions = Callback::new(move |restaurant: Restaurant| {
        let id = restaurant.id;
        view! {
            <button class="btn btn-ghost btn-xs" on:click=move |_| editing.set(Some(Some(restaurant.clone())))>"Edit"</button>
            <DeleteConfirmButton on_confirm=move |_| mutation.run_with_toast(DeleteRestaurantRequest { id }, "Restaurant deleted") />
        }
        .into_any()
    });
    let close = Callback::new(move |_| editing.set(None));

    view! {
        <div class="flex justify-end">
            <button class="btn btn-primary btn-sm" on:click=move |_| editing.set(Some(None))>"New restaurant"</button>
        </div>
        <QueryStatus state=restaurants />
        <DataTable rows=rows_of(restaurants) actions=actions />
        {move || editing.get().map(|existing| view! { <RestaurantEditor existing=existing on_close=close /> })}
    }
}

#[component]
fn RestaurantEditor(existing: Option<Restaurant>, on_close: Callback<()>) -> impl IntoView {
    let mutation = use_mutation();
    let id = existing.as_ref().map(|r| r.id);
    let title = if existing.is_some() { "Edit restaurant" } else { "New restaurant" };

    let name = RwSignal::new(existing.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let address = RwSignal::new(existing.as_ref().map(|r| r.address.clone()).unwrap_or_default());
    let phone = RwSignal::new(existing.as_ref().and_then(|r| r.phone.clone()).unwrap_or_default());
    let is_active = RwSignal::new(existing.as_ref().is_none_or(|r| r.is_active));
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut found = Vec::new();
        if name.get().trim().is_empty() {
            found.push(FieldError::new("name", "Name is required"));
        }
        if address.get().trim().is_empty() {
            found.push(FieldError::new("address", "Address is required"));
        }
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        let done = move |_| on_close.run(());
        match id {
            Some(id) => mutation.run_then(
                UpdateRestaurantRequest {
                    id,
                    name: Some(name.get().trim().to_string()),
                    address: Some(address.get().trim().to_string()),
                    phone: Some(phone.get().trim().to_string()),
                    is_active: Some(is_active.get()),
                },
                "Restaurant saved",
                done,
            ),
            None => mutation.run_then(
                CreateRestaurantRequest {
                    name: name.get().trim().to_string(),
                    address: address.get().trim().to_string(),
                    phone: non_blank(&phone.get()),
                    is_active: is_active.get(),
                },
                "Restaurant created",
                done,
            ),
        }
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="space-y-1" on:submit=on_submit>
                <FormField label="Name" name="name" value=name errors=errors />
                <FormField label="Address" name="address" value=address errors=errors />
                <FormField label="Phone" name="phone" input_type="tel" value=phone errors=errors />
                <CheckboxField label="Active" value=is_active />
                <div class="modal-action">
                    <SubmitButton label="Save" pending=mutation.pending_signal() />
                </div>
            </form>
        </Modal>
    }
}
