pub mod repository;
pub mod service;

pub use self::repository::{DynUserQueryRepository, UserQueryRepositoryTrait};
