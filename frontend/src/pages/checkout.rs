//! 结算页
//!
//! 草稿每次输入都写回本地存储；下单成功后清空购物车并跳到“我的订单”。

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shared::protocol::ShopRequest;
use pancakes_shared::{OrderType, ShopSettings};
use pancakes_shop::checkout::{self, CheckoutDraft, DraftField};
use pancakes_shop::error::{ErrorKind, FieldError, field_error};
use pancakes_shop::route::AppRoute;

use crate::auth::use_auth;
use crate::cart::use_cart;
use crate::components::common::{ErrorAlert, FormAlert, SubmitButton, money, query_view};
use crate::query::{use_query_with, use_shop};
use crate::toast::use_toasts;
use crate::web::BrowserStorage;
use crate::web::router::{Link, use_router};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = use_cart();
    let auth = use_auth();
    let shop_ctx = use_shop();
    let toasts = use_toasts();
    let router = use_router();

    let shop = use_query_with(|| ShopRequest, |resources, _| async move { resources.shop().await });

    let mut initial = CheckoutDraft::load(&BrowserStorage);
    if let Some(user) = untrack(|| auth.user()) {
        initial.prefill_from(&user);
    }
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(settings) = shop.with(|s| s.data.clone()) else {
            return;
        };
        let snapshot = cart.snapshot();
        let found = draft.with(|d| checkout::validate(d, &snapshot, &settings));
        errors.set(found.clone());
        if !found.is_empty() {
            return;
        }

        let req = draft.with(|d| checkout::build_order(&snapshot, d));
        pending.set(true);
        server_error.set(None);
        spawn_local(async move {
            let result = checkout::place_order(&shop_ctx.resources(), &req).await;
            pending.try_set(false);
            match result {
                Ok(order) => {
                    cart.clear();
                    draft.update(|d| d.reset_after_order(&BrowserStorage));
                    shop_ctx.notify();
                    toasts.success(format!("Order #{} placed", order.id));
                    router.go(AppRoute::MyOrders);
                }
                Err(e) if e.kind == ErrorKind::Unauthorized => {}
                Err(e) => {
                    server_error.try_set(Some(e.user_message().to_string()));
                }
            }
        });
    };

    let order_type = move || draft.with(|d| d.order_type);

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Checkout"</h1>
            <Show
                when=move || !cart.is_empty()
                fallback=|| view! {
                    <div class="text-center py-12 space-y-4">
                        <p class="text-base-content/60">"Your cart is empty."</p>
                        <Link to=AppRoute::Menu class="btn btn-primary">"Browse the menu"</Link>
                    </div>
                }
            >
                {query_view(shop, move |settings: ShopSettings| {
                    let settings = StoredValue::new(settings);
                    let general = move || {
                        errors.with(|errs| {
                            ["cart", "shop", "order_type"]
                                .into_iter()
                                .filter_map(|f| field_error(errs, f).map(str::to_string))
                                .collect::<Vec<_>>()
                        })
                    };
                    view! {
                        <form class="card bg-base-100 shadow-sm" on:submit=on_submit>
                            <div class="card-body space-y-2">
                                {move || general().into_iter().map(|m| view! { <ErrorAlert message=m /> }).collect_view()}
                                <FormAlert message=server_error />
                                <div class="join">
                                    {[OrderType::Delivery, OrderType::Pickup]
                                        .into_iter()
                                        .map(|t| {
                                            let enabled = settings.with_value(|s| match t {
                                                OrderType::Delivery => s.delivery_enabled,
                                                OrderType::Pickup => s.pickup_enabled,
                                            });
                                            view! {
                                                <input
                                                    type="radio"
                                                    name="order_type"
                                                    class="join-item btn"
                                                    aria-label=if t == OrderType::Delivery { "Delivery" } else { "Pickup" }
                                                    disabled=!enabled
                                                    prop:checked=move || order_type() == t
                                                    on:change=move |_| {
                                                        draft.update(|d| d.update(&BrowserStorage, DraftField::OrderType, t.as_str()))
                                                    }
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <Show when=move || order_type() == OrderType::Delivery>
                                    <DraftInput label="Delivery address" field=DraftField::Address name="address" draft=draft errors=errors />
                                </Show>
                                <DraftInput label="Phone" field=DraftField::Phone name="phone" draft=draft errors=errors />
                                <DraftInput label="Notes for the kitchen" field=DraftField::Notes name="notes" draft=draft errors=errors />
                                <div class="divider my-1"></div>
                                <div class="flex justify-between"><span>"Subtotal"</span><span>{move || money(cart.subtotal())}</span></div>
                                <Show when=move || order_type() == OrderType::Delivery>
                                    <div class="flex justify-between">
                                        <span>"Delivery fee"</span>
                                        <span>{money(settings.with_value(|s| s.delivery_fee))}</span>
                                    </div>
                                </Show>
                                <div class="flex justify-between font-bold text-lg">
                                    <span>"Total"</span>
                                    <span>
                                        {move || {
                                            let snapshot = cart.snapshot();
                                            let total = draft.with(|d| settings.with_value(|s| checkout::estimated_total(&snapshot, d, s)));
                                            money(total)
                                        }}
                                    </span>
                                </div>
                                <p class="text-xs text-base-content/60">"Final prices are confirmed by the shop."</p>
                                <SubmitButton label="Place order" pending=pending />
                            </div>
                        </form>
                    }
                })}
            </Show>
        </div>
    }
}

/// 绑定到草稿某个字段的输入框
#[component]
fn DraftInput(
    label: &'static str,
    field: DraftField,
    /// 校验错误里的字段名
    name: &'static str,
    draft: RwSignal<CheckoutDraft>,
    errors: RwSignal<Vec<FieldError>>,
) -> impl IntoView {
    let error = move || errors.with(|errs| field_error(errs, name).map(str::to_string));

    view! {
        <div class="form-control">
            <label class="label" for=name><span class="label-text">{label}</span></label>
            <input
                id=name
                type="text"
                class=move || if error().is_some() { "input input-bordered input-error" } else { "input input-bordered" }
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.update(&BrowserStorage, field, &value));
                }
            />
            {move || error().map(|e| view! { <span class="label-text-alt text-error mt-1">{e}</span> })}
        </div>
    }
}
