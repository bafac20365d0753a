use super::USER_COLUMNS;
use crate::{
    abstract_trait::user::repository::UserCommandRepositoryTrait,
    domain::requests::user::{CreateUserRecordRequest, UpdateUserRecordRequest},
    model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::Error as SqlxError;
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

/// Names the unique column that was hit so the client sees which field clashed.
fn user_constraint(err: SqlxError) -> RepositoryError {
    let clash = match &err {
        SqlxError::Database(db_err) if db_err.is_unique_violation() => {
            db_err.constraint().map(str::to_owned)
        }
        _ => None,
    };

    match clash.as_deref() {
        Some(name) if name.contains("username") => {
            RepositoryError::AlreadyExists("A user with that username already exists.".into())
        }
        Some(name) if name.contains("phone_number") => RepositoryError::AlreadyExists(
            "A user with that phone number already exists.".into(),
        ),
        _ => RepositoryError::from_constraint(err),
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(
        &self,
        req: &CreateUserRecordRequest,
    ) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "INSERT INTO users (username, email, password, phone_number, address, date_of_birth, \
                                created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp) \
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(&req.username)
            .bind(&req.email)
            .bind(&req.password)
            .bind(&req.phone_number)
            .bind(&req.address)
            .bind(req.date_of_birth)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to create user {}: {:?}", req.username, err);
                user_constraint(err)
            })?;

        info!("✅ Created user ID {} ({})", user.user_id, user.username);
        Ok(user)
    }

    async fn update_user(
        &self,
        req: &UpdateUserRecordRequest,
    ) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE users \
             SET email         = COALESCE($2, email), \
                 password      = COALESCE($3, password), \
                 phone_number  = COALESCE($4, phone_number), \
                 address       = COALESCE($5, address), \
                 date_of_birth = COALESCE($6, date_of_birth), \
                 updated_at    = current_timestamp \
             WHERE user_id = $1 \
             RETURNING {USER_COLUMNS}"
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(req.user_id)
            .bind(&req.email)
            .bind(&req.password)
            .bind(&req.phone_number)
            .bind(&req.address)
            .bind(req.date_of_birth)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update user {}: {:?}", req.user_id, err);
                user_constraint(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated user ID {}", user.user_id);
        Ok(user)
    }
}
