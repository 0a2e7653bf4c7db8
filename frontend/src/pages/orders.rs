//! 我的订单

use leptos::prelude::*;
use pancakes_shared::protocol::MyOrdersRequest;
use pancakes_shared::{Order, OrderStatus, OrderType};

use crate::components::common::{money, query_view};
use crate::query::use_query;

/// 状态徽章的样式
pub fn status_badge(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge-warning",
        OrderStatus::Confirmed | OrderStatus::Preparing => "badge badge-info",
        OrderStatus::Ready | OrderStatus::OutForDelivery => "badge badge-accent",
        OrderStatus::Delivered | OrderStatus::PickedUp => "badge badge-success",
        OrderStatus::Cancelled => "badge badge-ghost",
    }
}

#[component]
pub fn MyOrdersPage() -> impl IntoView {
    let status = RwSignal::new(Option::<OrderStatus>::None);
    let orders = use_query(move || MyOrdersRequest { status: status.get() });

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <div class="flex items-center gap-4">
                <h1 class="text-3xl font-bold flex-1">"My orders"</h1>
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
            </div>
            {query_view(orders, |orders: Vec<Order>| {
                if orders.is_empty() {
                    return view! { <p class="text-center text-base-content/60 py-12">"No orders yet."</p> }
                        .into_any();
                }
                let mut orders = orders;
                orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                orders.into_iter().map(|order| view! { <OrderCard order=order /> }).collect_view().into_any()
            })}
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let lines = order
        .items
        .iter()
        .map(|line| {
            let mods = line
                .modifiers
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            view! {
                <li class="flex justify-between">
                    <span>
                        {format!("{} × {}", line.quantity, line.name)}
                        {(!mods.is_empty()).then(|| view! { <span class="text-base-content/60">{format!(" ({})", mods)}</span> })}
                    </span>
                    <span>{money(line.unit_price * f64::from(line.quantity))}</span>
                </li>
            }
        })
        .collect_view();
    let kind = match order.order_type {
        OrderType::Delivery => "Delivery",
        OrderType::Pickup => "Pickup",
    };

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body gap-2">
                <div class="flex items-center gap-2">
                    <h2 class="card-title flex-1">{format!("Order #{}", order.id)}</h2>
                    <span class="badge badge-outline">{kind}</span>
                    <span class=status_badge(order.status)>{order.status.label()}</span>
                </div>
                <div class="text-sm text-base-content/60">
                    {order.created_at.format("%Y-%m-%d %H:%M").to_string()}
                    {order.address.clone().map(|a| format!(" · {}", a))}
                </div>
                <ul class="text-sm space-y-1">{lines}</ul>
                {order.notes.clone().map(|n| view! { <p class="text-sm italic">{n}</p> })}
                <div class="flex justify-end gap-4 text-sm">
                    {(order.delivery_fee > 0.0).then(|| format!("Delivery {}", money(order.delivery_fee)))}
                    <span class="font-bold">{format!("Total {}", money(order.total))}</span>
                </div>
            </div>
        </div>
    }
}
