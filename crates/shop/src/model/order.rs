use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub discount_id: Option<i32>,
    pub note: Option<String>,
    pub ship_address: String,
    pub ship_date: NaiveDateTime,
    pub payment: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// `price` is the whole line total after discount, never a unit price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderDetail {
    pub order_detail_id: i32,
    pub order_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDetailStatus {
    Pending,
    Done,
}

impl OrderDetailStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderDetailStatus::Pending => "Pending",
            OrderDetailStatus::Done => "Done",
        }
    }
}

/// Rows written by one successful placement transaction.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub detail: OrderDetail,
    pub remaining_stock: i32,
}
