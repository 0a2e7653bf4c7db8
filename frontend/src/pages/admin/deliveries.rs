//! 配送调度：指派骑手、修改状态，定时刷新

use leptos::prelude::*;
use pancakes_shared::protocol::{AdminDeliveriesRequest, AdminUsersRequest, UpdateDeliveryRequest};
use pancakes_shared::{Delivery, DeliveryStatus, Role, User};

use crate::components::common::{QueryStatus, rows_of};
use crate::components::data_table::DataTable;
use crate::query::{use_mutation, use_polling, use_query, use_shop};

#[component]
pub fn DeliveriesPage() -> impl IntoView {
    let period = use_shop().config().deliveries_poll;
    let status = RwSignal::new(Option::<DeliveryStatus>::None);
    let deliveries = use_polling(move || AdminDeliveriesRequest { status: status.get() }, period);
    let couriers = use_query(|| AdminUsersRequest {
        role: Some(Role::Courier),
        search: None,
    });
    let mutation = use_mutation();

    let actions = Callback::new(move |delivery: Delivery| {
        let id = delivery.id;
        let assigned = delivery.courier_id;
        let current = delivery.status;
        let options = couriers.with(|s| s.data.clone().unwrap_or_default());

        view! {
            <select
                class="select select-bordered select-xs"
                on:change=move |ev| {
                    if let Ok(courier_id) = event_target_value(&ev).parse::<u32>() {
                        mutation.run_with_toast(
                            UpdateDeliveryRequest { id, courier_id: Some(courier_id), ..Default::default() },
                            "Courier assigned",
                        );
                    }
                }
            >
                <option value="" selected=assigned.is_none()>"Unassigned"</option>
                {options
                    .into_iter()
                    .filter(|u: &User| u.is_active)
                    .map(|u| {
                        let selected = assigned == Some(u.id);
                        view! { <option value=u.id.to_string() selected=selected>{u.display_name().to_string()}</option> }
                    })
                    .collect_view()}
            </select>
            <select
                class="select select-bordered select-xs"
                on:change=move |ev| {
                    if let Some(status) = DeliveryStatus::parse(&event_target_value(&ev)) {
                        mutation.run_with_toast(
                            UpdateDeliveryRequest { id, status: Some(status), ..Default::default() },
                            "Delivery updated",
                        );
                    }
                }
            >
                {DeliveryStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str() selected=s == current>{s.label()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    });

    view! {
        <select
            class="select select-bordered select-sm"
            on:change=move |ev| status.set(DeliveryStatus::parse(&event_target_value(&ev)))
        >
            <option value="">"All statuses"</option>
            {DeliveryStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                .collect_view()}
        </select>
        <QueryStatus state=deliveries />
        <DataTable rows=rows_of(deliveries) actions=actions empty_text="No deliveries" />
    }
}
