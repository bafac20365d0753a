mod command;
mod query;
mod welcome;

pub use self::command::{UserCommandService, UserCommandServiceDeps};
pub use self::query::{UserQueryService, UserQueryServiceDeps};

/// Users may only see or change their own record; anything else looks missing.
const USER_NOT_FOUND: &str = "User not found";
