mod command;
mod query;

pub use self::command::{CartCommandRepositoryTrait, DynCartCommandRepository};
pub use self::query::{CartQueryRepositoryTrait, DynCartQueryRepository};
