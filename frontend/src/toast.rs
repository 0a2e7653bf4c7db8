//! 提示消息上下文
//!
//! 任何组件都可以通过 [`use_toasts`] 弹出提示，到期后自动消失。

use std::time::Duration;

use leptos::prelude::*;
use pancakes_shop::clock::{Clock, SystemClock};
use pancakes_shop::toast::{ToastKind, Toasts};

use crate::web::after;

/// 定时器与时钟的误差余量
const EXPIRY_SLACK: Duration = Duration::from_millis(50);

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Toasts>,
    ttl: Duration,
}

impl ToastContext {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: RwSignal::new(Toasts::default()),
            ttl,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let ttl = self.ttl;
        self.toasts.update(|t| {
            t.push(kind, message, SystemClock.now(), ttl);
        });

        let toasts = self.toasts;
        after(ttl + EXPIRY_SLACK, move || {
            toasts.try_update(|t| t.expire(SystemClock.now()));
        });
    }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 右上角的提示消息列表
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ctx.toasts.with(|t| t.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div role="alert" class=toast.kind.alert_class()>
                            <span>{toast.message}</span>
                            <button
                                class="btn btn-ghost btn-xs"
                                on:click=move |_| ctx.toasts.update(|t| t.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
