use crate::model::{
    cart::{CartItem as CartItemModel, CartLine as CartLineModel},
    variant::charged_unit_price,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartLineResponse {
    pub id: i32,
    pub variant_id: i32,
    pub sku: String,
    pub product_name: String,
    /// Unit price as charged at checkout.
    pub price: f64,
    pub quantity: i32,
}

impl From<CartLineModel> for CartLineResponse {
    fn from(value: CartLineModel) -> Self {
        CartLineResponse {
            id: value.cart_item_id,
            variant_id: value.variant_id,
            sku: value.sku,
            product_name: value.product_name,
            price: charged_unit_price(value.price, value.compare_at_price),
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub cart_id: i32,
    pub user_id: i32,
    pub items: Vec<CartLineResponse>,
    pub total_quantity: i32,
}

impl CartResponse {
    pub fn new(cart_id: i32, user_id: i32, lines: Vec<CartLineModel>) -> Self {
        let items: Vec<CartLineResponse> = lines.into_iter().map(CartLineResponse::from).collect();
        let total_quantity = items.iter().map(|item| item.quantity).sum();

        CartResponse {
            cart_id,
            user_id,
            items,
            total_quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub id: i32,
    pub cart_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<CartItemModel> for CartItemResponse {
    fn from(value: CartItemModel) -> Self {
        CartItemResponse {
            id: value.cart_item_id,
            cart_id: value.cart_id,
            variant_id: value.variant_id,
            quantity: value.quantity,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
