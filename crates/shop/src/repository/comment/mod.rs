mod command;
mod query;

pub use self::command::CommentCommandRepository;
pub use self::query::CommentQueryRepository;
