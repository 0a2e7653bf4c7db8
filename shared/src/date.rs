//! 时间类型模块
//!
//! `Timestamp`: 可序列化的毫秒时间戳，用于缓存过期、提示消息过期和冷却窗口的计算。

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::time::Duration;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 当前时间
    ///
    /// 浏览器中读取 `Date.now()`，原生环境读取系统时钟。
    #[cfg(target_arch = "wasm32")]
    pub fn now() -> Self {
        Self(js_sys::Date::now() as i64)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn now() -> Self {
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        Self(ms)
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl Add<Duration> for Timestamp {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.as_millis() as i64)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    /// 计算两个时间戳之间的差值（负值截断为 0）
    fn sub(self, rhs: Timestamp) -> Self::Output {
        let diff_ms = (self.0 - rhs.0).max(0);
        Duration::from_millis(diff_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let t = Timestamp::new(1_000);
        let later = t + Duration::from_secs(2);
        assert_eq!(later.as_millis(), 3_000);
        assert_eq!(later - t, Duration::from_secs(2));
        // 反向相减不会出现负值
        assert_eq!(t - later, Duration::ZERO);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Timestamp::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
