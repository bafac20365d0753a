use crate::model::{
    product::{Product as ProductModel, ProductImage as ProductImageModel},
    variant::Variant as VariantModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct BrandResponse {
    pub id: i32,
    pub name: String,
    pub img: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductImageResponse {
    pub id: i32,
    pub img: String,
}

impl From<ProductImageModel> for ProductImageResponse {
    fn from(value: ProductImageModel) -> Self {
        ProductImageResponse {
            id: value.image_id,
            img: value.img,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct VariantResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub sku: String,
    pub memory: Option<String>,
    pub color: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub img: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<VariantModel> for VariantResponse {
    fn from(value: VariantModel) -> Self {
        VariantResponse {
            id: value.variant_id,
            product_id: value.product_id,
            product_name: value.product_name,
            sku: value.sku,
            memory: value.memory,
            color: value.color,
            quantity: value.quantity,
            price: value.price,
            compare_at_price: value.compare_at_price,
            img: value.img,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = Object)]
    pub technical_specifications: Option<serde_json::Value>,
    pub brand: Option<BrandResponse>,
    pub images: Vec<ProductImageResponse>,
    pub variants: Vec<VariantResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ProductResponse {
    pub fn assemble(
        product: ProductModel,
        images: Vec<ProductImageModel>,
        variants: Vec<VariantModel>,
    ) -> Self {
        let brand = match (product.brand_id, product.brand_name) {
            (Some(id), Some(name)) => Some(BrandResponse {
                id,
                name,
                img: product.brand_img,
            }),
            _ => None,
        };

        ProductResponse {
            id: product.product_id,
            name: product.name,
            description: product.description,
            technical_specifications: product.technical_specifications,
            brand,
            images: images.into_iter().map(ProductImageResponse::from).collect(),
            variants: variants.into_iter().map(VariantResponse::from).collect(),
            created_at: product.created_at.map(|dt| dt.to_string()),
            updated_at: product.updated_at.map(|dt| dt.to_string()),
        }
    }
}
