//! 顶部导航栏，链接按当前角色显示

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shared::Role;
use pancakes_shared::protocol::ShopRequest;
use pancakes_shop::route::{AdminPage, AppRoute};

use crate::auth::{logout, use_auth};
use crate::cart::use_cart;
use crate::query::use_query_with;
use crate::toast::use_toasts;
use crate::web::router::{Link, use_router};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let cart = use_cart();
    let router = use_router();
    let toasts = use_toasts();
    let shop = use_query_with(|| ShopRequest, |resources, _| async move { resources.shop().await });

    let shop_name = move || {
        shop.with(|s| s.data.as_ref().map(|shop| shop.name.clone()))
            .unwrap_or_else(|| "Pancakes Shop".to_string())
    };
    let is_closed = move || shop.with(|s| s.data.as_ref().is_some_and(|shop| !shop.is_open));

    let has_role = move |role: Role| auth.has_role(role);
    let signed_in = move || auth.is_authenticated();

    let on_logout = move |_| {
        spawn_local(async move {
            logout(auth).await;
            toasts.info("Signed out");
            router.go(AppRoute::Home);
        });
    };

    view! {
        <div class="navbar bg-base-100 shadow-sm px-4">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">
                    "🥞 "
                    {shop_name}
                </Link>
                <Show when=is_closed>
                    <span class="badge badge-warning">"Closed"</span>
                </Show>
            </div>
            <div class="flex-none gap-1">
                <Link to=AppRoute::Menu class="btn btn-ghost btn-sm">"Menu"</Link>
                <Show when=move || has_role(Role::Customer)>
                    <Link to=AppRoute::MyOrders class="btn btn-ghost btn-sm">"My orders"</Link>
                </Show>
                <Show when=move || has_role(Role::Courier)>
                    <Link to=AppRoute::Courier class="btn btn-ghost btn-sm">"Deliveries"</Link>
                </Show>
                <Show when=move || has_role(Role::Admin)>
                    <Link to=AppRoute::Admin(AdminPage::Dashboard) class="btn btn-ghost btn-sm">
                        "Admin"
                    </Link>
                </Show>
                <Link to=AppRoute::Cart class="btn btn-ghost btn-sm">
                    "Cart"
                    <Show when=move || { cart.count() > 0 }>
                        <span class="badge badge-primary badge-sm">{move || cart.count()}</span>
                    </Show>
                </Link>
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <Link to=AppRoute::Login class="btn btn-primary btn-sm">"Sign in"</Link>
                    }
                >
                    <Link to=AppRoute::Profile class="btn btn-ghost btn-sm">
                        {move || auth.user().map(|u| u.display_name().to_string()).unwrap_or_default()}
                    </Link>
                    <button class="btn btn-outline btn-sm" on:click=on_logout>"Sign out"</button>
                </Show>
            </div>
        </div>
    }
}
