//! 定时器封装模块
//!
//! 基于 `gloo-timers`。定时器挂在当前组件的 owner 上，组件卸载时自动取消。

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

fn millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX)
}

/// 周期性执行 `callback`，直到当前组件卸载
pub fn use_interval<F>(period: Duration, callback: F)
where
    F: FnMut() + 'static,
{
    let handle = StoredValue::new_local(Some(Interval::new(millis(period), callback)));
    on_cleanup(move || {
        // drop 即取消
        handle.try_update_value(|interval| interval.take());
    });
}

/// 延迟执行一次，不随组件取消
pub fn after<F>(delay: Duration, callback: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis(delay), callback).forget();
}
