mod command;
mod notification;
mod pricing;
mod query;

pub use self::command::{OrderCommandService, OrderCommandServiceDeps};
pub use self::query::{OrderQueryService, OrderQueryServiceDeps};
