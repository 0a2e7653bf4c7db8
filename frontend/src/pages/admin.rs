//! 后台管理
//!
//! 所有后台页面共用左侧导航；路由守卫保证只有管理员能进入。

use leptos::prelude::*;
use pancakes_shop::route::{AdminPage, AppRoute};

use crate::web::router::{Link, use_router};

mod dashboard;
mod deliveries;
mod menu;
mod modifiers;
mod orders;
mod pickups;
mod restaurants;
mod shop;
mod users;

/// 后台页面出口
pub fn admin_view(page: AdminPage) -> AnyView {
    let content = match page {
        AdminPage::Dashboard => view! { <dashboard::DashboardPage /> }.into_any(),
        AdminPage::Shop => view! { <shop::ShopSettingsPage /> }.into_any(),
        AdminPage::Menu => view! { <menu::MenuAdminPage /> }.into_any(),
        AdminPage::Modifiers => view! { <modifiers::ModifiersPage /> }.into_any(),
        AdminPage::Restaurants => view! { <restaurants::RestaurantsPage /> }.into_any(),
        AdminPage::Users => view! { <users::UsersPage /> }.into_any(),
        AdminPage::Orders => view! { <orders::OrdersPage /> }.into_any(),
        AdminPage::Deliveries => view! { <deliveries::DeliveriesPage /> }.into_any(),
        AdminPage::Pickups => view! { <pickups::PickupsPage /> }.into_any(),
    };
    view! {
        <div class="flex flex-col md:flex-row gap-6">
            <AdminSidebar />
            <div class="flex-1 min-w-0 space-y-4">
                <h1 class="text-2xl font-bold">{page.label()}</h1>
                {content}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn AdminSidebar() -> impl IntoView {
    // 切换页面时整个后台视图会重新渲染，这里读一次即可
    let here = use_router().current_route().get_untracked();

    view! {
        <ul class="menu bg-base-100 rounded-box w-full md:w-56 shrink-0">
            {AdminPage::ALL
                .into_iter()
                .map(|page| {
                    let class = if here == AppRoute::Admin(page) { "active" } else { "" };
                    view! {
                        <li>
                            <Link to=AppRoute::Admin(page) class=class>
                                {page.label()}
                            </Link>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
