use crate::{
    Delivery, DeliveryStatus, DashboardStats, MenuItem, MessageResponse, ModifierGroup,
    ModifierOption, Order, OrderStatus, OrderType, Restaurant, Role, ShopSettings, User,
};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether the request struct is sent as a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Path parameters are `#[serde(skip)]` fields, GET filters come out of [`ApiRequest::query`],
/// everything else is the JSON body.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned + 'static;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path, with path parameters filled in.
    fn path(&self) -> String;
    /// Query parameters. Empty values must already be filtered out.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Collects query parameters, dropping unset and blank values.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opt<T: ToString>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.trim().is_empty() {
                self.0.push((key, value.trim().to_string()));
            }
        }
        self
    }

    pub fn finish(self) -> Vec<(&'static str, String)> {
        self.0
    }
}

// =========================================================
// Auth / Account
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ApiRequest for RegisterRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/users/register".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/users/login".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/users/logout".into()
    }
}

/// Session check. Answers 401 for anonymous visitors.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserRequest;

pub const CURRENT_USER_PATH: &str = "/api/auth/me";
pub const LEGACY_CURRENT_USER_PATH: &str = "/api/users/me";

impl ApiRequest for CurrentUserRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        CURRENT_USER_PATH.into()
    }
}

/// Older deployments only expose the session check under `/api/users/me`.
#[derive(Debug, Clone, Serialize)]
pub struct LegacyCurrentUserRequest;

impl ApiRequest for LegacyCurrentUserRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        LEGACY_CURRENT_USER_PATH.into()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Changing the email only sends a confirmation link; the account keeps the old one until confirmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        LEGACY_CURRENT_USER_PATH.into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ApiRequest for ForgotPasswordRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/users/forgot-password".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

impl ApiRequest for ResetPasswordRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/users/reset-password".into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmEmailChangeRequest {
    pub token: String,
}

impl ApiRequest for ConfirmEmailChangeRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/users/confirm-email-change".into()
    }
}

// =========================================================
// Storefront
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct ShopRequest;

impl ApiRequest for ShopRequest {
    type Response = ShopSettings;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/shop".into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuRequest {
    #[serde(skip)]
    pub category: Option<String>,
    #[serde(skip)]
    pub search: Option<String>,
}

impl ApiRequest for MenuRequest {
    type Response = Vec<MenuItem>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/menu".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("category", self.category.as_ref())
            .opt("search", self.search.as_ref())
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemModifiersRequest {
    #[serde(skip)]
    pub item_id: u32,
}

impl ApiRequest for ItemModifiersRequest {
    type Response = Vec<ModifierGroup>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/menu/{}/modifiers", self.item_id)
    }
}

/// One cart line as submitted at checkout. Only modifier ids travel; prices are recomputed server-side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemInput {
    pub item_id: u32,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceOrderRequest {
    pub order_type: OrderType,
    pub items: Vec<OrderItemInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApiRequest for PlaceOrderRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/orders".into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MyOrdersRequest {
    #[serde(skip)]
    pub status: Option<OrderStatus>,
}

impl ApiRequest for MyOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/orders/my".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("status", self.status.map(|s| s.as_str()))
            .finish()
    }
}

// =========================================================
// Admin: shop settings
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct AdminShopRequest;

impl ApiRequest for AdminShopRequest {
    type Response = ShopSettings;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/shop".into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateShopRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_enabled: Option<bool>,
}

impl ApiRequest for UpdateShopRequest {
    type Response = ShopSettings;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        "/api/admin/shop".into()
    }
}

// =========================================================
// Admin: menu
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminMenuRequest {
    #[serde(skip)]
    pub category: Option<String>,
    #[serde(skip)]
    pub search: Option<String>,
    #[serde(skip)]
    pub available: Option<bool>,
}

impl ApiRequest for AdminMenuRequest {
    type Response = Vec<MenuItem>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/menu".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("category", self.category.as_ref())
            .opt("search", self.search.as_ref())
            .opt("available", self.available)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
}

impl ApiRequest for CreateMenuItemRequest {
    type Response = MenuItem;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/admin/menu".into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMenuItemRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl ApiRequest for UpdateMenuItemRequest {
    type Response = MenuItem;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/menu/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMenuItemRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DeleteMenuItemRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/admin/menu/{}", self.id)
    }
}

/// Replaces the set of modifier groups attached to a menu item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetItemModifierGroupsRequest {
    #[serde(skip)]
    pub item_id: u32,
    pub group_ids: Vec<u32>,
}

impl ApiRequest for SetItemModifierGroupsRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("/api/admin/menu/{}/modifier-groups", self.item_id)
    }
}

// =========================================================
// Admin: modifier groups / options
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct AdminModifierGroupsRequest;

impl ApiRequest for AdminModifierGroupsRequest {
    type Response = Vec<ModifierGroup>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/modifier-groups".into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateModifierGroupRequest {
    pub name: String,
    pub min_select: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_select: Option<u32>,
    pub required: bool,
}

impl ApiRequest for CreateModifierGroupRequest {
    type Response = ModifierGroup;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/admin/modifier-groups".into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateModifierGroupRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_select: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_select: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl ApiRequest for UpdateModifierGroupRequest {
    type Response = ModifierGroup;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/modifier-groups/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteModifierGroupRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DeleteModifierGroupRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/admin/modifier-groups/{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateModifierOptionRequest {
    #[serde(skip)]
    pub group_id: u32,
    pub name: String,
    pub price_delta: f64,
    pub is_available: bool,
}

impl ApiRequest for CreateModifierOptionRequest {
    type Response = ModifierOption;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/admin/modifier-groups/{}/options", self.group_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateModifierOptionRequest {
    #[serde(skip)]
    pub group_id: u32,
    #[serde(skip)]
    pub option_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl ApiRequest for UpdateModifierOptionRequest {
    type Response = ModifierOption;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!(
            "/api/admin/modifier-groups/{}/options/{}",
            self.group_id, self.option_id
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteModifierOptionRequest {
    #[serde(skip)]
    pub group_id: u32,
    #[serde(skip)]
    pub option_id: u32,
}

impl ApiRequest for DeleteModifierOptionRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!(
            "/api/admin/modifier-groups/{}/options/{}",
            self.group_id, self.option_id
        )
    }
}

// =========================================================
// Admin: restaurants
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct AdminRestaurantsRequest;

impl ApiRequest for AdminRestaurantsRequest {
    type Response = Vec<Restaurant>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/restaurants".into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_active: bool,
}

impl ApiRequest for CreateRestaurantRequest {
    type Response = Restaurant;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/admin/restaurants".into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateRestaurantRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ApiRequest for UpdateRestaurantRequest {
    type Response = Restaurant;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/restaurants/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteRestaurantRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DeleteRestaurantRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/admin/restaurants/{}", self.id)
    }
}

// =========================================================
// Admin: users
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminUsersRequest {
    #[serde(skip)]
    pub role: Option<Role>,
    #[serde(skip)]
    pub search: Option<String>,
}

impl ApiRequest for AdminUsersRequest {
    type Response = Vec<User>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/users".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("role", self.role)
            .opt("search", self.search.as_ref())
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ApiRequest for UpdateUserRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/users/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserRequest {
    #[serde(skip)]
    pub id: u32,
}

impl ApiRequest for DeleteUserRequest {
    type Response = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    fn path(&self) -> String {
        format!("/api/admin/users/{}", self.id)
    }
}

// =========================================================
// Admin: orders / deliveries / pickups / stats
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminOrdersRequest {
    #[serde(skip)]
    pub status: Option<OrderStatus>,
    #[serde(skip)]
    pub order_type: Option<OrderType>,
    /// `YYYY-MM-DD`
    #[serde(skip)]
    pub date: Option<String>,
}

impl ApiRequest for AdminOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/orders".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("status", self.status.map(|s| s.as_str()))
            .opt("type", self.order_type.map(|t| t.as_str()))
            .opt("date", self.date.as_ref())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOrderStatusRequest {
    #[serde(skip)]
    pub id: u32,
    pub status: OrderStatus,
}

impl ApiRequest for UpdateOrderStatusRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/orders/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminDeliveriesRequest {
    #[serde(skip)]
    pub status: Option<DeliveryStatus>,
}

impl ApiRequest for AdminDeliveriesRequest {
    type Response = Vec<Delivery>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/deliveries".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("status", self.status.map(|s| s.as_str()))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDeliveryRequest {
    #[serde(skip)]
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

impl ApiRequest for UpdateDeliveryRequest {
    type Response = Delivery;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/deliveries/{}", self.id)
    }
}

/// Pickup orders waiting at the counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdminPickupsRequest {
    #[serde(skip)]
    pub status: Option<OrderStatus>,
}

impl ApiRequest for AdminPickupsRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/pickups".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("status", self.status.map(|s| s.as_str()))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePickupRequest {
    #[serde(skip)]
    pub order_id: u32,
    pub status: OrderStatus,
}

impl ApiRequest for UpdatePickupRequest {
    type Response = Order;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/admin/pickups/{}", self.order_id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminStatsRequest;

impl ApiRequest for AdminStatsRequest {
    type Response = DashboardStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/admin/stats".into()
    }
}

// =========================================================
// Courier
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourierDeliveriesRequest {
    #[serde(skip)]
    pub status: Option<DeliveryStatus>,
}

impl ApiRequest for CourierDeliveriesRequest {
    type Response = Vec<Delivery>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/courier/deliveries".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        QueryParams::new()
            .opt("status", self.status.map(|s| s.as_str()))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCourierDeliveryRequest {
    #[serde(skip)]
    pub id: u32,
    pub status: DeliveryStatus,
}

impl ApiRequest for UpdateCourierDeliveryRequest {
    type Response = Delivery;
    const METHOD: HttpMethod = HttpMethod::Patch;
    fn path(&self) -> String {
        format!("/api/courier/deliveries/{}", self.id)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableOrdersRequest;

impl ApiRequest for AvailableOrdersRequest {
    type Response = Vec<Order>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/courier/available-orders".into()
    }
}

/// Courier takes an unassigned delivery order.
#[derive(Debug, Clone, Serialize)]
pub struct AssignOrderRequest {
    #[serde(skip)]
    pub order_id: u32,
}

impl ApiRequest for AssignOrderRequest {
    type Response = Delivery;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        format!("/api/courier/available-orders/{}/assign", self.order_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_omitted() {
        let req = MenuRequest {
            category: Some("  ".to_string()),
            search: Some("berry".to_string()),
        };
        assert_eq!(req.query(), vec![("search", "berry".to_string())]);
        assert!(MenuRequest::default().query().is_empty());
    }

    #[test]
    fn test_path_parameters_are_not_in_body() {
        let req = UpdateMenuItemRequest {
            id: 7,
            price: Some(4.5),
            ..Default::default()
        };
        assert_eq!(req.path(), "/api/admin/menu/7");
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"price":4.5}"#);
    }

    #[test]
    fn test_admin_orders_query_uses_wire_names() {
        let req = AdminOrdersRequest {
            status: Some(OrderStatus::OutForDelivery),
            order_type: Some(OrderType::Pickup),
            date: None,
        };
        assert_eq!(
            req.query(),
            vec![
                ("status", "out_for_delivery".to_string()),
                ("type", "pickup".to_string()),
            ]
        );
    }

    #[test]
    fn test_only_write_methods_carry_bodies() {
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}
