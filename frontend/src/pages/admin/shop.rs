//! 店铺设置表单

use leptos::prelude::*;
use pancakes_shared::ShopSettings;
use pancakes_shared::protocol::{AdminShopRequest, UpdateShopRequest};
use pancakes_shop::error::FieldError;

use crate::components::common::{CheckboxField, FormField, SubmitButton, non_blank, parse_amount, query_view};
use crate::query::{use_mutation, use_query};

#[component]
pub fn ShopSettingsPage() -> impl IntoView {
    let settings = use_query(|| AdminShopRequest);

    view! {
        {query_view(settings, |current: ShopSettings| view! { <ShopForm current=current /> })}
    }
}

#[component]
fn ShopForm(current: ShopSettings) -> impl IntoView {
    let mutation = use_mutation();

    let name = RwSignal::new(current.name.clone());
    let address = RwSignal::new(current.address.clone().unwrap_or_default());
    let phone = RwSignal::new(current.phone.clone().unwrap_or_default());
    let open_time = RwSignal::new(current.open_time.clone().unwrap_or_default());
    let close_time = RwSignal::new(current.close_time.clone().unwrap_or_default());
    let delivery_fee = RwSignal::new(format!("{:.2}", current.delivery_fee));
    let min_order = RwSignal::new(format!("{:.2}", current.min_order));
    let is_open = RwSignal::new(current.is_open);
    let delivery_enabled = RwSignal::new(current.delivery_enabled);
    let pickup_enabled = RwSignal::new(current.pickup_enabled);
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut found = Vec::new();
        if name.get().trim().is_empty() {
            found.push(FieldError::new("name", "Shop name is required"));
        }
        let fee = parse_amount(&mut found, "delivery_fee", &delivery_fee.get());
        let minimum = parse_amount(&mut found, "min_order", &min_order.get());
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        mutation.run_with_toast(
            UpdateShopRequest {
                name: non_blank(&name.get()),
                is_open: Some(is_open.get()),
                address: Some(address.get().trim().to_string()),
                phone: Some(phone.get().trim().to_string()),
                open_time: non_blank(&open_time.get()),
                close_time: non_blank(&close_time.get()),
                delivery_fee: fee,
                min_order: minimum,
                delivery_enabled: Some(delivery_enabled.get()),
                pickup_enabled: Some(pickup_enabled.get()),
            },
            "Shop settings saved",
        );
    };

    view! {
        <form class="card bg-base-100 shadow-sm max-w-2xl" on:submit=on_submit>
            <div class="card-body grid gap-2 md:grid-cols-2">
                <FormField label="Name" name="name" value=name errors=errors />
                <FormField label="Phone" name="phone" input_type="tel" value=phone errors=errors />
                <div class="md:col-span-2">
                    <FormField label="Address" name="address" value=address errors=errors />
                </div>
                <FormField label="Opens at" name="open_time" input_type="time" value=open_time errors=errors />
                <FormField label="Closes at" name="close_time" input_type="time" value=close_time errors=errors />
                <FormField label="Delivery fee" name="delivery_fee" value=delivery_fee errors=errors />
                <FormField label="Minimum order" name="min_order" value=min_order errors=errors />
                <CheckboxField label="Open for orders" value=is_open />
                <CheckboxField label="Delivery" value=delivery_enabled />
                <CheckboxField label="Pickup" value=pickup_enabled />
                <div class="md:col-span-2 flex justify-end">
                    <SubmitButton label="Save settings" pending=mutation.pending_signal() />
                </div>
            </div>
        </form>
    }
}
