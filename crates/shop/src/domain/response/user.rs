use crate::model::user::User as UserModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user; the password hash never leaves the repository.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<UserModel> for UserResponse {
    fn from(value: UserModel) -> Self {
        UserResponse {
            id: value.user_id,
            username: value.username,
            email: value.email,
            phone_number: value.phone_number,
            address: value.address,
            date_of_birth: value.date_of_birth.map(|d| d.to_string()),
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
