mod cart;
mod catalog;
mod comment;
mod discount;
mod order;
mod user;
mod variant;

pub use self::cart::{CartCommandRepository, CartQueryRepository};
pub use self::catalog::CatalogQueryRepository;
pub use self::comment::{CommentCommandRepository, CommentQueryRepository};
pub use self::discount::DiscountQueryRepository;
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository};
pub use self::variant::{VariantCommandRepository, VariantQueryRepository};
