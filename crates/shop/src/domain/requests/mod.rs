pub mod cart;
pub mod comment;
pub mod order;
pub mod user;
