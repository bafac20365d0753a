pub mod cart;
pub mod comment;
pub mod discount;
pub mod order;
pub mod product;
pub mod user;
pub mod variant;
