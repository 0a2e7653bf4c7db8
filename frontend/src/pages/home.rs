use leptos::prelude::*;
use pancakes_shared::ShopSettings;
use pancakes_shared::protocol::ShopRequest;
use pancakes_shop::route::AppRoute;

use crate::components::common::{money, query_view};
use crate::query::use_query_with;
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    let shop = use_query_with(|| ShopRequest, |resources, _| async move { resources.shop().await });

    view! {
        <div class="hero min-h-[60vh] bg-base-200 rounded-box">
            <div class="hero-content text-center">
                {query_view(shop, |shop: ShopSettings| {
                    let hours = match (shop.open_time.clone(), shop.close_time.clone()) {
                        (Some(open), Some(close)) => Some(format!("Open {} – {}", open, close)),
                        _ => None,
                    };
                    let modes = match (shop.delivery_enabled, shop.pickup_enabled) {
                        (true, true) => "Delivery or pickup",
                        (true, false) => "Delivery only",
                        (false, true) => "Pickup only",
                        (false, false) => "Not taking orders",
                    };
                    view! {
                        <div class="max-w-md space-y-4">
                            <h1 class="text-5xl font-bold">{shop.name.clone()}</h1>
                            {if shop.is_open {
                                view! { <span class="badge badge-success">"Open now"</span> }.into_any()
                            } else {
                                view! { <span class="badge badge-warning">"Closed"</span> }.into_any()
                            }}
                            <p class="text-base-content/70">{hours}</p>
                            <p>{modes}</p>
                            {(shop.min_order > 0.0)
                                .then(|| view! { <p class="text-sm">"Minimum order " {money(shop.min_order)}</p> })}
                            {(shop.delivery_enabled && shop.delivery_fee > 0.0)
                                .then(|| view! { <p class="text-sm">"Delivery fee " {money(shop.delivery_fee)}</p> })}
                            <p class="text-sm text-base-content/60">
                                {shop.address.clone()}
                                {shop.phone.clone().map(|p| format!(" · {}", p))}
                            </p>
                            <Link to=AppRoute::Menu class="btn btn-primary">"See the menu"</Link>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
