use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cart {
    pub cart_id: i32,
    pub user_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub cart_item_id: i32,
    pub cart_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLine {
    pub cart_item_id: i32,
    pub variant_id: i32,
    pub sku: String,
    pub product_name: String,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub quantity: i32,
}
