use leptos::prelude::*;
use pancakes_shared::MAX_LINE_QUANTITY;
use pancakes_shop::cart::CartItem;
use pancakes_shop::route::AppRoute;

use crate::cart::use_cart;
use crate::components::common::money;
use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::web::router::Link;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Your cart"</h1>
            <Show
                when=move || !cart.is_empty()
                fallback=|| view! {
                    <div class="text-center py-12 space-y-4">
                        <p class="text-base-content/60">"Your cart is empty."</p>
                        <Link to=AppRoute::Menu class="btn btn-primary">"Browse the menu"</Link>
                    </div>
                }
            >
                <div class="card bg-base-100 shadow-sm">
                    <div class="card-body divide-y divide-base-200">
                        <For
                            each=move || cart.lines()
                            key=|line| (line.key(), line.quantity)
                            children=move |line| view! { <CartLine line=line /> }
                        />
                    </div>
                </div>
                <div class="flex items-center justify-between">
                    <DeleteConfirmButton on_confirm=move |_| cart.clear() label="Empty cart" />
                    <div class="flex items-center gap-4">
                        <span class="text-lg">"Subtotal " <b>{move || money(cart.subtotal())}</b></span>
                        <Link to=AppRoute::Checkout class="btn btn-primary">"Checkout"</Link>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// 减一后的数量；减到 0 意味着移除该行，返回 `None` 由用户确认
fn decrement(quantity: u32) -> Option<i64> {
    let next = i64::from(quantity) - 1;
    (next > 0).then_some(next)
}

#[component]
fn CartLine(line: CartItem) -> impl IntoView {
    let cart = use_cart();
    let key = StoredValue::new(line.key());
    let quantity = i64::from(line.quantity);
    let current = line.quantity;
    let confirming = RwSignal::new(false);
    let labels = line
        .mods_detail
        .as_ref()
        .map(|d| d.labels().join(", "))
        .filter(|l| !l.is_empty());

    view! {
        <div class="flex items-center gap-4 py-3">
            <div class="flex-1">
                <div class="font-semibold">{line.name.clone()}</div>
                {labels.map(|l| view! { <div class="text-sm text-base-content/70">{l}</div> })}
                {line.note.clone().map(|n| view! { <div class="text-sm italic">"“" {n} "”"</div> })}
                <div class="text-sm">{money(line.unit_price())} " each"</div>
            </div>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    on:click=move |_| match decrement(current) {
                        Some(next) => key.with_value(|k| cart.set_line_qty(k, next)),
                        None => confirming.set(true),
                    }
                >
                    "−"
                </button>
                <span class="join-item btn btn-sm btn-disabled">{line.quantity}</span>
                <button
                    class="join-item btn btn-sm"
                    disabled=line.quantity >= MAX_LINE_QUANTITY
                    on:click=move |_| key.with_value(|k| cart.set_line_qty(k, quantity + 1))
                >
                    "+"
                </button>
            </div>
            <span class="w-20 text-right font-semibold">{money(line.line_total())}</span>
            <DeleteConfirmButton
                on_confirm=move |_| key.with_value(|k| cart.remove_line(k))
                label="✕"
                confirming=confirming
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_unit_needs_confirmation() {
        assert_eq!(decrement(3), Some(2));
        assert_eq!(decrement(2), Some(1));
        assert_eq!(decrement(1), None);
    }
}
