//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航只负责更新地址和当前路由；能否进入由核心库的 [`AppRoute::guard`] 判断，
//! 守卫结论随会话状态变化自动重新计算。

use leptos::prelude::*;
use pancakes_shop::route::{AppRoute, GuardDecision};
use pancakes_shop::session::SessionStatus;
use tracing::info;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径（含查询串）
fn current_url() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过注入的会话状态信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionStatus>,
}

impl RouterService {
    fn new(session: Signal<SessionStatus>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_url()));
        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前路由的守卫结论
    pub fn decision(&self) -> GuardDecision {
        let route = self.current_route.get();
        self.session.with(|status| route.guard(status))
    }

    pub fn navigate(&self, path: &str) {
        self.go(AppRoute::from_path(path));
    }

    pub fn go(&self, route: AppRoute) {
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 重定向：替换当前历史记录，后退时不会回到被拒绝的页面
    pub fn redirect(&self, route: AppRoute) {
        replace_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 浏览器后退/前进
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_url()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 监听器与页面同生命周期
        closure.forget();
    }

    /// 路由或会话状态变化时执行守卫重定向
    fn setup_guard_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            if let GuardDecision::Redirect(target) = router.decision() {
                info!(from = %router.current_route.get_untracked(), to = %target, "route guard redirect");
                router.redirect(target);
            }
        });
    }
}

/// 创建路由服务、提供到 Context 并初始化监听
pub fn provide_router(session: Signal<SessionStatus>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_guard_redirect();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure provide_router was called.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 会话确认中显示加载状态，守卫放行后渲染页面。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.decision() {
        GuardDecision::Allow => matcher(router.current_route().get()),
        GuardDecision::Pending | GuardDecision::Redirect(_) => view! {
            <div class="flex items-center justify-center min-h-[50vh]">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 站内链接，不刷新页面
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();
    let on_click = move |ev: web_sys::MouseEvent| {
        // 保留新标签页打开等浏览器默认行为
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() {
            return;
        }
        ev.prevent_default();
        router.go(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
