use crate::model::order::{Order as OrderModel, OrderDetail as OrderDetailModel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderDetailResponse {
    pub id: i32,
    pub order_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<OrderDetailModel> for OrderDetailResponse {
    fn from(value: OrderDetailModel) -> Self {
        OrderDetailResponse {
            id: value.order_detail_id,
            order_id: value.order_id,
            variant_id: value.variant_id,
            quantity: value.quantity,
            price: value.price,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub discount_id: Option<i32>,
    pub note: Option<String>,
    pub ship_address: String,
    pub ship_date: String,
    pub payment: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub order_details: Vec<OrderDetailResponse>,
    /// MoMo pay URL, only present right after a successful payment setup.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub short_link: Option<String>,
}

impl OrderResponse {
    pub fn with_details(order: OrderModel, details: Vec<OrderDetailModel>) -> Self {
        let mut response = OrderResponse::from(order);
        response.order_details = details.into_iter().map(OrderDetailResponse::from).collect();
        response
    }
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.order_id,
            user_id: value.user_id,
            discount_id: value.discount_id,
            note: value.note,
            ship_address: value.ship_address,
            ship_date: value.ship_date.to_string(),
            payment: value.payment,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
            order_details: Vec::new(),
            short_link: None,
        }
    }
}
