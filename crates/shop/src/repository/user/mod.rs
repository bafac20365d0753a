mod command;
mod query;

pub use self::command::UserCommandRepository;
pub use self::query::UserQueryRepository;

/// Everything except the password hash.
pub(crate) const USER_COLUMNS: &str = r#"
    user_id, username, email, phone_number, address, date_of_birth, created_at, updated_at
"#;
