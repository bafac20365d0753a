pub mod cache;
pub mod cart;
pub mod catalog;
pub mod comment;
pub mod discount;
pub mod order;
pub mod payment;
pub mod user;
pub mod variant;
