use leptos::prelude::*;
use pancakes_shared::DashboardStats;
use pancakes_shared::protocol::AdminStatsRequest;
use pancakes_shop::route::{AdminPage, AppRoute};

use crate::components::common::{money, query_view};
use crate::query::{use_polling, use_shop};
use crate::web::router::Link;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let period = use_shop().config().stats_poll;
    let stats = use_polling(|| AdminStatsRequest, period);

    view! {
        {query_view(stats, |stats: DashboardStats| view! {
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                <div class="stat">
                    <div class="stat-title">"Orders today"</div>
                    <div class="stat-value">{stats.orders_today}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Revenue today"</div>
                    <div class="stat-value text-primary">{money(stats.revenue_today)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Pending orders"</div>
                    <div class="stat-value">{stats.pending_orders}</div>
                    <div class="stat-desc">
                        <Link to=AppRoute::Admin(AdminPage::Orders) class="link">"Review"</Link>
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Active deliveries"</div>
                    <div class="stat-value">{stats.active_deliveries}</div>
                    <div class="stat-desc">
                        <Link to=AppRoute::Admin(AdminPage::Deliveries) class="link">"Track"</Link>
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Pickups waiting"</div>
                    <div class="stat-value">{stats.pickups_waiting}</div>
                    <div class="stat-desc">
                        <Link to=AppRoute::Admin(AdminPage::Pickups) class="link">"Open counter"</Link>
                    </div>
                </div>
            </div>
        })}
        <p class="text-xs text-base-content/50">
            {format!("Refreshes every {} seconds", period.as_secs())}
        </p>
    }
}
