//! 数据请求 hooks
//!
//! 页面通过 `use_query` 读取远程资源，通过 `use_mutation` 执行写操作。
//! 写操作成功或会话变化时递增 `revision`，所有挂载中的查询重新读取：
//! 新鲜的缓存直接返回，已失效的才会发请求。

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use pancakes_shared::protocol::ApiRequest;
use pancakes_shop::cache::QueryState;
use pancakes_shop::config::ShopConfig;
use pancakes_shop::error::{ErrorKind, ShopResult};
use pancakes_shop::resources::{Invalidates, Resources};

use crate::toast::ToastContext;
use crate::web::use_interval;

/// 远程资源上下文
#[derive(Clone, Copy)]
pub struct ShopContext {
    resources: StoredValue<Resources, LocalStorage>,
    revision: RwSignal<u64>,
    config: StoredValue<ShopConfig>,
}

impl ShopContext {
    pub fn new(resources: Resources, revision: RwSignal<u64>, config: ShopConfig) -> Self {
        Self {
            resources: StoredValue::new_local(resources),
            revision,
            config: StoredValue::new(config),
        }
    }

    pub fn resources(&self) -> Resources {
        self.resources.get_value()
    }

    pub fn config(&self) -> ShopConfig {
        self.config.get_value()
    }

    /// 缓存发生了变化，通知所有查询重新读取
    pub fn notify(&self) {
        self.revision.update(|r| *r += 1);
    }
}

pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>().expect("ShopContext should be provided")
}

// =========================================================
// 查询
// =========================================================

/// 通用查询
///
/// `request` 中读取的信号变化时（比如过滤条件）会重新查询。
/// 较早发出的请求晚于新请求返回时，结果被丢弃。
pub fn use_query_with<T, Req, Fut>(
    request: impl Fn() -> Req + 'static,
    fetch: impl Fn(Resources, Req) -> Fut + 'static,
) -> ReadSignal<QueryState<T>>
where
    T: Clone + Send + Sync + 'static,
    Req: 'static,
    Fut: Future<Output = ShopResult<T>> + 'static,
{
    let shop = use_shop();
    let state = RwSignal::new(QueryState::<T>::default());
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        shop.revision.track();
        let req = request();
        let current = generation.get_value() + 1;
        generation.set_value(current);
        state.update(|s| *s = std::mem::take(s).reloading());

        let pending = fetch(shop.resources(), req);
        spawn_local(async move {
            let result = pending.await;
            if generation.try_get_value() != Some(current) {
                return;
            }
            match result {
                Ok(data) => {
                    state.try_set(QueryState::success(data));
                }
                Err(e) => {
                    state.try_update(|s| *s = std::mem::take(s).failed(e.user_message()));
                }
            }
        });
    });

    state.read_only()
}

/// 读取接口；响应结构不符时报错
pub fn use_query<R>(request: impl Fn() -> R + 'static) -> ReadSignal<QueryState<R::Response>>
where
    R: ApiRequest + 'static,
    R::Response: Clone + Send + Sync,
{
    use_query_with(request, |resources, req| async move { resources.query(&req).await })
}

/// 定时刷新的查询，每次都绕过缓存
pub fn use_polling<R>(
    request: impl Fn() -> R + 'static,
    period: Duration,
) -> ReadSignal<QueryState<R::Response>>
where
    R: ApiRequest + 'static,
    R::Response: Clone + Send + Sync,
{
    let tick = RwSignal::new(0u64);
    use_interval(period, move || tick.update(|t| *t += 1));
    use_query_with(
        move || {
            tick.track();
            request()
        },
        |resources, req| async move { resources.refetch(&req).await },
    )
}

// =========================================================
// 写操作
// =========================================================

#[derive(Clone, Copy)]
pub struct Mutation {
    shop: ShopContext,
    toasts: ToastContext,
    pending: RwSignal<bool>,
}

pub fn use_mutation() -> Mutation {
    Mutation {
        shop: use_shop(),
        toasts: expect_context::<ToastContext>(),
        pending: RwSignal::new(false),
    }
}

impl Mutation {
    pub fn pending(&self) -> bool {
        self.pending.get()
    }

    pub fn pending_signal(&self) -> Signal<bool> {
        self.pending.into()
    }

    /// 执行写操作；成功后相关查询自动刷新
    pub fn run<R, F>(&self, req: R, on_done: F)
    where
        R: ApiRequest + Invalidates + 'static,
        F: FnOnce(ShopResult<R::Response>) + 'static,
    {
        let shop = self.shop;
        let pending = self.pending;
        pending.set(true);
        spawn_local(async move {
            let result = shop.resources().mutate(&req).await;
            pending.try_set(false);
            if result.is_ok() {
                shop.notify();
            }
            on_done(result);
        });
    }

    /// 执行写操作并用提示消息报告结果
    pub fn run_with_toast<R>(&self, req: R, success: &'static str)
    where
        R: ApiRequest + Invalidates + 'static,
    {
        self.run_then(req, success, |_| {});
    }

    /// 同 [`Mutation::run_with_toast`]，成功后再执行 `on_ok`（比如关闭弹窗）
    pub fn run_then<R, F>(&self, req: R, success: &'static str, on_ok: F)
    where
        R: ApiRequest + Invalidates + 'static,
        F: FnOnce(R::Response) + 'static,
    {
        let toasts = self.toasts;
        self.run(req, move |result| match result {
            Ok(response) => {
                toasts.success(success);
                on_ok(response);
            }
            // 会话失效由全局拦截器处理
            Err(e) if e.kind == ErrorKind::Unauthorized => {}
            Err(e) => toasts.error(e.user_message()),
        });
    }
}
