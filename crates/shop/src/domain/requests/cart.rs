use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddToCartRequest {
    #[validate(range(min = 1))]
    pub variant_id: i32,

    #[validate(range(min = 1, message = "Quantity must be greater than or equal to 1"))]
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RemoveFromCartRequest {
    #[validate(range(min = 1))]
    pub cart_item_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCartQuantityRequest {
    #[validate(range(min = 1))]
    pub variant_id: i32,

    #[validate(range(min = 1, message = "Quantity must be greater than or equal to 1"))]
    pub quantity: i32,
}
