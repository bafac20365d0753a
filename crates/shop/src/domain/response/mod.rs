pub mod api;
pub mod cart;
pub mod catalog;
pub mod comment;
pub mod order;
pub mod payment;
pub mod user;
