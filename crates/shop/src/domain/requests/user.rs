use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 15))]
    #[serde(default)]
    pub phone_number: Option<String>,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

/// Partial profile update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[serde(default)]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 15))]
    #[serde(default)]
    pub phone_number: Option<String>,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CreateUserRecordRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// `password` is already hashed when set.
#[derive(Debug, Clone)]
pub struct UpdateUserRecordRequest {
    pub user_id: i32,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}
