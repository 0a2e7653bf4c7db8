//! 购物车上下文
//!
//! 启动时从 LocalStorage 恢复一次，之后每次变更由核心库写回。

use leptos::prelude::*;
use pancakes_shop::cart::{Cart, CartItem, CartStore, LineKey, NewCartItem};
use pancakes_shop::persist::JsonSlot;

use crate::toast::ToastContext;

#[derive(Clone, Copy)]
pub struct CartContext {
    store: RwSignal<CartStore<JsonSlot>, LocalStorage>,
    toasts: ToastContext,
}

impl CartContext {
    pub fn new(slot: JsonSlot, toasts: ToastContext) -> Self {
        Self {
            store: RwSignal::new_local(CartStore::hydrate(slot)),
            toasts,
        }
    }

    pub fn count(&self) -> u32 {
        self.store.with(|s| s.cart().count())
    }

    pub fn subtotal(&self) -> f64 {
        self.store.with(|s| s.cart().subtotal())
    }

    pub fn is_empty(&self) -> bool {
        self.store.with(|s| s.cart().is_empty())
    }

    pub fn lines(&self) -> Vec<CartItem> {
        self.store.with(|s| s.cart().lines().to_vec())
    }

    /// 当前购物车的副本（结算时使用）
    pub fn snapshot(&self) -> Cart {
        self.store.with(|s| s.cart().clone())
    }

    pub fn add(&self, item: NewCartItem) {
        if let Some(event) = self.store.try_update(|s| s.add(item)) {
            self.toasts.success(event.message());
        }
    }

    pub fn remove_line(&self, key: &LineKey) {
        if let Some(Some(event)) = self.store.try_update(|s| s.remove_line(key)) {
            self.toasts.info(event.message());
        }
    }

    /// 数量为 0 时移除该行
    pub fn set_line_qty(&self, key: &LineKey, quantity: i64) {
        if let Some(Some(event)) = self.store.try_update(|s| s.set_line_qty(key, quantity)) {
            self.toasts.info(event.message());
        }
    }

    pub fn clear(&self) {
        self.store.update(|s| s.clear());
    }
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
