//! LocalStorage 封装模块
//!
//! 通过 `gloo-storage` 实现核心库的 [`KeyValueStore`]。值都是 JSON 字符串，
//! 这里按原样存取，解析交给核心库。

use gloo_storage::{LocalStorage, Storage};
use pancakes_shop::persist::KeyValueStore;

/// 浏览器本地存储
///
/// 隐私模式或配额用尽时读写会失败，调用方按“不存在”或“未保存”处理。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let raw = LocalStorage::raw();
        raw.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn delete(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
