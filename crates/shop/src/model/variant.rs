use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sellable SKU; `product_name` comes from the joined product row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Variant {
    pub variant_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub sku: String,
    pub memory: Option<String>,
    pub color: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub img: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// The unit price actually charged: a non-zero compare-at price wins over `price`.
pub fn charged_unit_price(price: f64, compare_at_price: Option<f64>) -> f64 {
    match compare_at_price {
        Some(compare_at) if compare_at != 0.0 => compare_at,
        _ => price,
    }
}

impl Variant {
    pub fn unit_price(&self) -> f64 {
        charged_unit_price(self.price, self.compare_at_price)
    }
}
