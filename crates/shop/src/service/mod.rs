mod cart;
mod catalog;
mod comment;
mod order;
mod user;

pub use self::cart::{
    CartCommandService, CartCommandServiceDeps, CartQueryService, CartQueryServiceDeps,
};
pub use self::catalog::{CatalogQueryService, CatalogQueryServiceDeps};
pub use self::comment::{
    CommentCommandService, CommentCommandServiceDeps, CommentQueryService,
    CommentQueryServiceDeps,
};
pub use self::order::{
    OrderCommandService, OrderCommandServiceDeps, OrderQueryService, OrderQueryServiceDeps,
};
pub use self::user::{
    UserCommandService, UserCommandServiceDeps, UserQueryService, UserQueryServiceDeps,
};
