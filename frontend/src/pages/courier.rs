//! 骑手页面：我的配送 + 可接订单

use leptos::prelude::*;
use pancakes_shared::protocol::{AssignOrderRequest, AvailableOrdersRequest, CourierDeliveriesRequest, UpdateCourierDeliveryRequest};
use pancakes_shared::{Delivery, DeliveryStatus, Order};

use crate::components::common::{money, query_view};
use crate::query::{use_mutation, use_polling, use_shop};

pub fn delivery_badge(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::Pending => "badge badge-warning",
        DeliveryStatus::Assigned => "badge badge-info",
        DeliveryStatus::PickedUp => "badge badge-accent",
        DeliveryStatus::Delivered => "badge badge-success",
        DeliveryStatus::Failed => "badge badge-error",
    }
}

#[component]
pub fn CourierPage() -> impl IntoView {
    let period = use_shop().config().deliveries_poll;
    let status = RwSignal::new(Option::<DeliveryStatus>::None);
    let deliveries = use_polling(move || CourierDeliveriesRequest { status: status.get() }, period);
    let available = use_polling(|| AvailableOrdersRequest, period);

    view! {
        <div class="grid gap-8 lg:grid-cols-2">
            <section class="space-y-4">
                <div class="flex items-center gap-4">
                    <h2 class="text-2xl font-bold flex-1">"My deliveries"</h2>
                    <select
                        class="select select-bordered select-sm"
                        on:change=move |ev| status.set(DeliveryStatus::parse(&event_target_value(&ev)))
                    >
                        <option value="">"All"</option>
                        {DeliveryStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                {query_view(deliveries, |list: Vec<Delivery>| {
                    if list.is_empty() {
                        return view! { <p class="text-base-content/60">"No deliveries assigned."</p> }.into_any();
                    }
                    list.into_iter().map(|d| view! { <DeliveryCard delivery=d /> }).collect_view().into_any()
                })}
            </section>
            <section class="space-y-4">
                <h2 class="text-2xl font-bold">"Available orders"</h2>
                {query_view(available, |orders: Vec<Order>| {
                    if orders.is_empty() {
                        return view! { <p class="text-base-content/60">"Nothing waiting right now."</p> }.into_any();
                    }
                    orders.into_iter().map(|o| view! { <AvailableOrderCard order=o /> }).collect_view().into_any()
                })}
            </section>
        </div>
    }
}

#[component]
fn DeliveryCard(delivery: Delivery) -> impl IntoView {
    let mutation = use_mutation();
    let id = delivery.id;
    let next = delivery.status.courier_next();
    let can_fail = !matches!(delivery.status, DeliveryStatus::Delivered | DeliveryStatus::Failed);

    let advance = move |status: DeliveryStatus| {
        mutation.run_with_toast(UpdateCourierDeliveryRequest { id, status }, "Delivery updated");
    };

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body gap-2">
                <div class="flex items-center gap-2">
                    <h3 class="card-title flex-1">{format!("Order #{}", delivery.order_id)}</h3>
                    <span class=delivery_badge(delivery.status)>{delivery.status.label()}</span>
                </div>
                <p>{delivery.address.clone()}</p>
                <p class="text-sm text-base-content/60">
                    {delivery.phone.clone()}
                    {delivery.order_total.map(|t| format!(" · {}", money(t)))}
                </p>
                <div class="card-actions justify-end">
                    {can_fail.then(|| view! {
                        <button
                            class="btn btn-ghost btn-sm text-error"
                            disabled=move || mutation.pending()
                            on:click=move |_| advance(DeliveryStatus::Failed)
                        >
                            "Report failed"
                        </button>
                    })}
                    {next.map(|status| view! {
                        <button
                            class="btn btn-primary btn-sm"
                            disabled=move || mutation.pending()
                            on:click=move |_| advance(status)
                        >
                            {format!("Mark {}", status.label().to_lowercase())}
                        </button>
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AvailableOrderCard(order: Order) -> impl IntoView {
    let mutation = use_mutation();
    let order_id = order.id;

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body gap-2">
                <div class="flex items-center gap-2">
                    <h3 class="card-title flex-1">{format!("Order #{}", order.id)}</h3>
                    <span class="font-semibold">{money(order.total)}</span>
                </div>
                <p>{order.address.clone().unwrap_or_default()}</p>
                <p class="text-sm text-base-content/60">
                    {format!("{} items · {}", order.items.len(), order.created_at.format("%H:%M"))}
                </p>
                <div class="card-actions justify-end">
                    <button
                        class="btn btn-primary btn-sm"
                        disabled=move || mutation.pending()
                        on:click=move |_| mutation.run_with_toast(AssignOrderRequest { order_id }, "Order assigned to you")
                    >
                        "Take this order"
                    </button>
                </div>
            </div>
        </div>
    }
}
