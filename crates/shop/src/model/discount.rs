use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Discount {
    pub discount_id: i32,
    pub code: String,
    pub discount_percent: Option<f64>,
    pub discount_money: Option<f64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Discount {
    /// Validity window is inclusive on both ends.
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}
