//! 自提柜台：等待取餐的订单，定时刷新

use leptos::prelude::*;
use pancakes_shared::protocol::{AdminPickupsRequest, UpdatePickupRequest};
use pancakes_shared::{Order, OrderStatus};

use crate::components::common::{QueryStatus, rows_of};
use crate::components::data_table::DataTable;
use crate::query::{use_mutation, use_polling, use_shop};

/// 柜台上的下一步操作
fn next_step(status: OrderStatus) -> Option<(OrderStatus, &'static str)> {
    match status {
        OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::Preparing => {
            Some((OrderStatus::Ready, "Mark ready"))
        }
        OrderStatus::Ready => Some((OrderStatus::PickedUp, "Picked up")),
        _ => None,
    }
}

#[component]
pub fn PickupsPage() -> impl IntoView {
    let period = use_shop().config().pickups_poll;
    let status = RwSignal::new(Option::<OrderStatus>::None);
    let pickups = use_polling(move || AdminPickupsRequest { status: status.get() }, period);
    let mutation = use_mutation();

    let actions = Callback::new(move |order: Order| {
        let order_id = order.id;
        let step = next_step(order.status);
        let cancellable = !order.status.is_final();
        view! {
            {step.map(|(next, label)| view! {
                <button
                    class="btn btn-primary btn-xs"
                    on:click=move |_| mutation.run_with_toast(UpdatePickupRequest { order_id, status: next }, "Pickup updated")
                >
                    {label}
                </button>
            })}
            {cancellable.then(|| view! {
                <button
                    class="btn btn-ghost btn-xs text-error"
                    on:click=move |_| mutation.run_with_toast(
                        UpdatePickupRequest { order_id, status: OrderStatus::Cancelled },
                        "Pickup cancelled",
                    )
                >
                    "Cancel"
                </button>
            })}
        }
        .into_any()
    });

    view! {
        <select
            class="select select-bordered select-sm"
            on:change=move |ev| status.set(OrderStatus::parse(&event_target_value(&ev)))
        >
            <option value="">"Waiting and ready"</option>
            {OrderStatus::ALL
                .into_iter()
                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                .collect_view()}
        </select>
        <QueryStatus state=pickups />
        <DataTable rows=rows_of(pickups) actions=actions empty_text="No pickups waiting" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_steps() {
        assert_eq!(next_step(OrderStatus::Preparing), Some((OrderStatus::Ready, "Mark ready")));
        assert_eq!(next_step(OrderStatus::Ready).map(|(s, _)| s), Some(OrderStatus::PickedUp));
        assert_eq!(next_step(OrderStatus::PickedUp), None);
        assert_eq!(next_step(OrderStatus::Cancelled), None);
    }
}
