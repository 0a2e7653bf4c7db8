use leptos::prelude::*;
use pancakes_shared::protocol::{AdminOrdersRequest, UpdateOrderStatusRequest};
use pancakes_shared::{Order, OrderStatus, OrderType};

use crate::components::common::{QueryStatus, non_blank, rows_of};
use crate::components::data_table::DataTable;
use crate::query::{use_mutation, use_query};

/// 后台可以改成任意状态；已完结的订单不再提供选项
fn status_select(
    current: OrderStatus,
    on_pick: impl Fn(OrderStatus) + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <select
            class="select select-bordered select-xs"
            disabled=current.is_final()
            on:change=move |ev| {
                if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                    on_pick(status);
                }
            }
        >
            {OrderStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.as_str() selected=s == current>{s.label()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let status = RwSignal::new(Option::<OrderStatus>::None);
    let order_type = RwSignal::new(Option::<OrderType>::None);
    let date = RwSignal::new(String::new());
    let orders = use_query(move || AdminOrdersRequest {
        status: status.get(),
        order_type: order_type.get(),
        date: non_blank(&date.get()),
    });
    let mutation = use_mutation();

    let actions = Callback::new(move |order: Order| {
        let id = order.id;
        status_select(order.status, move |status| {
            mutation.run_with_toast(UpdateOrderStatusRequest { id, status }, "Order status updated");
        })
        .into_any()
    });

    view! {
        <div class="flex flex-wrap gap-2">
            <select
                class="select select-bordered select-sm"
                on:change=move |ev| status.set(OrderStatus::parse(&event_target_value(&ev)))
            >
                <option value="">"All statuses"</option>
                {OrderStatus::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
            <select
                class="select select-bordered select-sm"
                on:change=move |ev| order_type.set(OrderType::parse(&event_target_value(&ev)))
            >
                <option value="">"Delivery and pickup"</option>
                <option value="delivery">"Delivery"</option>
                <option value="pickup">"Pickup"</option>
            </select>
            <input
                type="date"
                class="input input-bordered input-sm"
                on:change=move |ev| date.set(event_target_value(&ev))
            />
        </div>
        <QueryStatus state=orders />
        <DataTable rows=rows_of(orders) actions=actions empty_text="No orders match these filters" />
    }
}
