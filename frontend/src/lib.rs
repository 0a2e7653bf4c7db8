//! Pancakes Shop 前端应用
//!
//! 采用 Context-Driven 架构：
//! - `web`: 浏览器 API 封装（fetch、LocalStorage、定时器、History 路由）
//! - `query`: 远程资源查询与写操作
//! - `auth` / `cart` / `toast`: 全局状态
//! - `components` / `pages`: UI 层

mod auth;
mod cart;
mod panic_hook;
mod query;
mod toast;
mod components {
    pub mod common;
    pub mod data_table;
    pub mod delete_confirm_button;
    pub mod modifier_picker;
    pub mod navbar;
}
mod pages {
    pub mod admin;
    pub mod cart;
    pub mod checkout;
    pub mod courier;
    pub mod home;
    pub mod login;
    pub mod menu;
    pub mod orders;
    pub mod password;
    pub mod profile;
}
pub(crate) mod web;

use std::rc::Rc;

use leptos::prelude::*;
use pancakes_shop::{
    ApiClient, AppRoute, JsonSlot, Resources, Session, SessionStatus, ShopConfig, SystemClock,
    UnauthorizedInterceptor, shared_cache,
};

use crate::auth::{AuthContext, SessionExpired, init_auth};
use crate::cart::CartContext;
use crate::components::navbar::Navbar;
use crate::pages::admin::admin_view;
use crate::pages::cart::CartPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::courier::CourierPage;
use crate::pages::home::HomePage;
use crate::pages::login::{LoginPage, RegisterPage};
use crate::pages::menu::MenuPage;
use crate::pages::orders::MyOrdersPage;
use crate::pages::password::{ConfirmEmailChangePage, ForgotPasswordPage, ResetPasswordPage};
use crate::pages::profile::ProfilePage;
use crate::query::ShopContext;
use crate::toast::{ToastContext, ToastHost};
use crate::web::router::{RouterOutlet, provide_router};
use crate::web::{BrowserStorage, FetchClient};

pub use panic_hook::install as install_panic_hook;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Menu => view! { <MenuPage /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Checkout => view! { <CheckoutPage /> }.into_any(),
        AppRoute::MyOrders => view! { <MyOrdersPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword { token } => view! { <ResetPasswordPage token=token /> }.into_any(),
        AppRoute::ConfirmEmailChange { token } => {
            view! { <ConfirmEmailChangePage token=token /> }.into_any()
        }
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::Courier => view! { <CourierPage /> }.into_any(),
        AppRoute::Admin(page) => admin_view(page),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// 构建时注入的配置（trunk / cargo 环境变量）
fn build_config() -> ShopConfig {
    ShopConfig::from_lookup(|name| {
        let value = match name {
            "PANCAKES_API_BASE" => option_env!("PANCAKES_API_BASE"),
            "PANCAKES_STALE_SECS" => option_env!("PANCAKES_STALE_SECS"),
            "PANCAKES_TOAST_MS" => option_env!("PANCAKES_TOAST_MS"),
            "PANCAKES_UNAUTHORIZED_COOLDOWN_MS" => option_env!("PANCAKES_UNAUTHORIZED_COOLDOWN_MS"),
            "PANCAKES_STATS_POLL_SECS" => option_env!("PANCAKES_STATS_POLL_SECS"),
            "PANCAKES_PICKUPS_POLL_SECS" => option_env!("PANCAKES_PICKUPS_POLL_SECS"),
            "PANCAKES_DELIVERIES_POLL_SECS" => option_env!("PANCAKES_DELIVERIES_POLL_SECS"),
            "PANCAKES_CART_KEY" => option_env!("PANCAKES_CART_KEY"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = build_config();
    tracing::info!(api_base = %config.api_base, "starting Pancakes Shop");

    // 1. 会话状态与缓存版本号，路由守卫和 401 处理都依赖它们
    let status = RwSignal::new(SessionStatus::Loading);
    let revision = RwSignal::new(0u64);
    let router = provide_router(status.into());

    // 2. 提示消息
    let toasts = ToastContext::new(config.toast_ttl);
    provide_context(toasts);

    // 3. 请求链路：fetch -> ApiClient(401 拦截) -> Resources(缓存)
    let clock = Rc::new(SystemClock);
    let cache = shared_cache();
    let interceptor = UnauthorizedInterceptor::new(
        cache.clone(),
        clock.clone(),
        Rc::new(SessionExpired { status, revision, router }),
        config.unauthorized_cooldown,
    );
    let api = ApiClient::new(config.api_base.clone(), Rc::new(FetchClient))
        .with_unauthorized_handler(Rc::new(interceptor));
    let resources = Resources::new(api, cache, clock, config.stale_time);

    let cart_key = config.cart_storage_key.clone();
    let shop = ShopContext::new(resources.clone(), revision, config);
    provide_context(shop);

    // 4. 认证：启动时读取当前用户
    let auth = AuthContext::new(Session::new(resources), status, shop);
    provide_context(auth);
    init_auth(auth);

    // 5. 购物车从 LocalStorage 恢复
    let cart = CartContext::new(JsonSlot::new(Rc::new(BrowserStorage), cart_key), toasts);
    provide_context(cart);

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <main class="container mx-auto p-4">
                <RouterOutlet matcher=route_matcher />
            </main>
            <ToastHost />
        </div>
    }
}
