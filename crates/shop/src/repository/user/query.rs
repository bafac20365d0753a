use super::USER_COLUMNS;
use crate::{
    abstract_trait::user::repository::UserQueryRepositoryTrait, model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");

        sqlx::query_as::<_, UserModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch user {}: {:?}", id, err);
                RepositoryError::from(err)
            })
    }
}
