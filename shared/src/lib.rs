//! Pancakes Shop 共享类型
//!
//! 后端 REST 接口的数据模型与请求定义。前端核心库与 Leptos 应用共同依赖此 crate，
//! 保证两端对同一份 JSON 结构的理解一致。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// 购物车单行数量上限
pub const MAX_LINE_QUANTITY: u32 = 99;

fn default_true() -> bool {
    true
}

// =========================================================
// 用户与角色
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
    Courier,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Customer, Role::Courier];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
            Role::Courier => "courier",
        }
    }

    /// 大小写不敏感地解析角色名
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn matches(&self, raw: &str) -> bool {
        Self::parse(raw) == Some(*self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 当前登录用户
///
/// `role` 保留后端原始字符串（历史数据里存在 "Admin"、"COURIER" 等写法），
/// 比较时统一走 [`Role::parse`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        role.matches(&self.role)
    }

    /// 界面上显示的名字，没有昵称时退回邮箱
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

// =========================================================
// 店铺设置
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    pub name: String,
    pub is_open: bool,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub delivery_fee: f64,
    pub min_order: f64,
    pub delivery_enabled: bool,
    pub pickup_enabled: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            name: "Pancakes Shop".to_string(),
            is_open: true,
            address: None,
            phone: None,
            open_time: None,
            close_time: None,
            delivery_fee: 0.0,
            min_order: 0.0,
            delivery_enabled: true,
            pickup_enabled: true,
        }
    }
}

// =========================================================
// 菜单与加料
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub has_modifiers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierOption {
    pub id: u32,
    #[serde(default)]
    pub group_id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub price_delta: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierGroup {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub min_select: u32,
    #[serde(default)]
    pub max_select: Option<u32>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub options: Vec<ModifierOption>,
}

impl ModifierGroup {
    /// 是否为单选组（选择新项会替换旧项）
    pub fn is_single_choice(&self) -> bool {
        self.max_select == Some(1)
    }
}

// =========================================================
// 订单
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::Pickup => "pickup",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "delivery" => Some(OrderType::Delivery),
            "pickup" => Some(OrderType::Pickup),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::PickedUp,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::PickedUp => "Picked up",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// 订单是否已结束（不会再变化）
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::PickedUp | OrderStatus::Cancelled
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineModifier {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub price_delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub modifiers: Vec<OrderLineModifier>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub status: OrderStatus,
    pub order_type: OrderType,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    pub total: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

// =========================================================
// 配送
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    Assigned,
    PickedUp,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 5] = [
        DeliveryStatus::Pending,
        DeliveryStatus::Assigned,
        DeliveryStatus::PickedUp,
        DeliveryStatus::Delivered,
        DeliveryStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Assigned => "assigned",
            DeliveryStatus::PickedUp => "picked_up",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Failed => "failed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Assigned => "Assigned",
            DeliveryStatus::PickedUp => "Picked up",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Failed => "Failed",
        }
    }

    /// 骑手端可推进到的下一个状态
    pub fn courier_next(&self) -> Option<Self> {
        match self {
            DeliveryStatus::Pending | DeliveryStatus::Assigned => Some(DeliveryStatus::PickedUp),
            DeliveryStatus::PickedUp => Some(DeliveryStatus::Delivered),
            DeliveryStatus::Delivered | DeliveryStatus::Failed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: u32,
    pub order_id: u32,
    #[serde(default)]
    pub courier_id: Option<u32>,
    #[serde(default)]
    pub courier_name: Option<String>,
    pub status: DeliveryStatus,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub order_total: Option<f64>,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
}

// =========================================================
// 其他后台资源
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub orders_today: u32,
    pub revenue_today: f64,
    pub pending_orders: u32,
    pub active_deliveries: u32,
    pub pickups_waiting: u32,
}

/// 只带一条提示信息的响应（注册、找回密码等）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse(" Courier "), Some(Role::Courier));
        assert_eq!(Role::parse("manager"), None);
        assert!(Role::Customer.matches("Customer"));
    }

    #[test]
    fn test_user_role_accessors() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","role":"Admin"}"#,
        )
        .unwrap();
        assert!(user.has_role(Role::Admin));
        assert!(!user.has_role(Role::Courier));
        assert_eq!(user.display_name(), "a@b.c");
        assert!(user.is_active);
    }

    #[test]
    fn test_shop_settings_defaults_for_missing_fields() {
        let shop: ShopSettings = serde_json::from_str(r#"{"name":"Flip"}"#).unwrap();
        assert_eq!(shop.name, "Flip");
        assert!(shop.is_open);
        assert!(shop.delivery_enabled);
    }

    #[test]
    fn test_order_status_wire_names() {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
        assert_eq!(OrderStatus::parse("picked_up"), Some(OrderStatus::PickedUp));
        assert!(OrderStatus::Cancelled.is_final());
    }

    #[test]
    fn test_courier_status_progression() {
        assert_eq!(
            DeliveryStatus::Assigned.courier_next(),
            Some(DeliveryStatus::PickedUp)
        );
        assert_eq!(
            DeliveryStatus::PickedUp.courier_next(),
            Some(DeliveryStatus::Delivered)
        );
        assert_eq!(DeliveryStatus::Delivered.courier_next(), None);
    }
}
