use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlaceOrderRequest {
    #[validate(range(min = 1))]
    pub variant_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(length(max = 50))]
    #[serde(default)]
    pub discount_code: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub ship_address: String,

    #[validate(length(min = 1, max = 50))]
    pub payment: String,

    #[serde(default)]
    pub ship_date: Option<ShipDate>,

    #[validate(length(max = 1000))]
    #[serde(default)]
    pub note: Option<String>,
}

impl PlaceOrderRequest {
    /// Blank codes count as "no code".
    pub fn discount_code(&self) -> Option<&str> {
        self.discount_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Ship date as an RFC 3339 timestamp, a timestamp without offset (UTC), or a bare date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ShipDate {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
    Date(NaiveDate),
}

impl ShipDate {
    pub fn naive_utc(&self) -> NaiveDateTime {
        match self {
            ShipDate::Zoned(at) => at.naive_utc(),
            ShipDate::Naive(at) => *at,
            ShipDate::Date(day) => day.and_time(NaiveTime::MIN),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub user_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub discount_id: Option<i32>,
    pub note: Option<String>,
    pub ship_address: String,
    pub ship_date: NaiveDateTime,
    pub payment: String,
    pub price: f64,
}

/// Accepts the order id either as a JSON number or as a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum OrderCode {
    Number(i64),
    Text(String),
}

impl OrderCode {
    pub fn is_blank(&self) -> bool {
        match self {
            OrderCode::Number(n) => *n == 0,
            OrderCode::Text(text) => text.trim().is_empty(),
        }
    }

    pub fn as_order_id(&self) -> Option<i32> {
        match self {
            OrderCode::Number(n) => i32::try_from(*n).ok(),
            OrderCode::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckOrderRequest {
    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub order_code: Option<OrderCode>,
}
