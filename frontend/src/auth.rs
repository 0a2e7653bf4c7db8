//! 认证模块
//!
//! 会话状态保存在一个信号里，路由守卫和导航栏都从这里读取。
//! 实际的会话逻辑（当前用户缓存、登录、登出）在核心库的 [`Session`] 中。

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shared::{Role, User};
use pancakes_shared::protocol::UpdateProfileRequest;
use pancakes_shop::error::ShopResult;
use pancakes_shop::route::AppRoute;
use pancakes_shop::session::{Navigator, Session, SessionStatus};
use tracing::warn;

use crate::query::ShopContext;
use crate::web::router::RouterService;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Session, LocalStorage>,
    status: RwSignal<SessionStatus>,
    shop: ShopContext,
}

impl AuthContext {
    pub fn new(session: Session, status: RwSignal<SessionStatus>, shop: ShopContext) -> Self {
        Self {
            session: StoredValue::new_local(session),
            status,
            shop,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn user(&self) -> Option<User> {
        self.status.with(|s| s.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.with(SessionStatus::is_authenticated)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.status.with(|s| s.has_role(role))
    }

    /// 不改变登录状态的账户操作（注册、找回密码等）直接使用
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    fn set_status(&self, status: SessionStatus) {
        self.status.set(status);
        // 换了身份，缓存已被清空
        self.shop.notify();
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动时确认一次会话
pub fn init_auth(ctx: AuthContext) {
    let session = ctx.session();
    spawn_local(async move {
        let status = match session.load_current_user().await {
            Ok(user) => SessionStatus::from_user(user),
            Err(e) => {
                warn!(error = %e, "session check failed, continuing as guest");
                SessionStatus::Anonymous
            }
        };
        ctx.status.set(status);
    });
}

pub async fn login(ctx: AuthContext, email: String, password: String) -> ShopResult<User> {
    let user = ctx.session().login(&email, &password).await?;
    ctx.set_status(SessionStatus::Authenticated(user.clone()));
    Ok(user)
}

/// 注销总是成功；导航由路由守卫根据会话状态处理
pub async fn logout(ctx: AuthContext) {
    ctx.session().logout().await;
    ctx.set_status(SessionStatus::Anonymous);
}

pub async fn update_profile(ctx: AuthContext, req: UpdateProfileRequest) -> ShopResult<User> {
    let user = ctx.session().update_profile(&req).await?;
    ctx.status.set(SessionStatus::Authenticated(user.clone()));
    Ok(user)
}

// =========================================================
// 会话失效
// =========================================================

/// 全局 401 拦截器的跳转实现
pub struct SessionExpired {
    pub status: RwSignal<SessionStatus>,
    pub revision: RwSignal<u64>,
    pub router: RouterService,
}

impl Navigator for SessionExpired {
    fn redirect(&self, path: &str) {
        self.status.set(SessionStatus::Anonymous);
        self.revision.update(|r| *r += 1);
        self.router.redirect(AppRoute::from_path(path));
    }
}
