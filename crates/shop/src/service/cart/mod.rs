mod command;
mod query;

pub use self::command::{CartCommandService, CartCommandServiceDeps};
pub use self::query::{CartQueryService, CartQueryServiceDeps};

pub const VARIANT_NOT_FOUND: &str = "Product variant does not exist.";
pub const ITEM_NOT_IN_CART: &str = "Item is not in the cart.";
