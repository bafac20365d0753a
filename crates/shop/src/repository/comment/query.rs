use crate::{
    abstract_trait::comment::repository::CommentQueryRepositoryTrait,
    model::comment::Comment as CommentModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

const COMMENT_SELECT: &str = r#"
    SELECT c.comment_id, c.user_id, u.username, c.variant_id, c.comment, c.star,
           c.created_at, c.updated_at
    FROM comments c
    JOIN users u ON u.user_id = c.user_id
"#;

pub struct CommentQueryRepository {
    db: ConnectionPool,
}

impl CommentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQueryRepositoryTrait for CommentQueryRepository {
    async fn find_all(&self, variant_id: Option<i32>) -> Result<Vec<CommentModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "{COMMENT_SELECT} \
             WHERE ($1::INT IS NULL OR c.variant_id = $1) \
             ORDER BY c.created_at DESC, c.comment_id DESC"
        );

        sqlx::query_as::<_, CommentModel>(&sql)
            .bind(variant_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch comments: {:?}", err);
                RepositoryError::from(err)
            })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CommentModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("{COMMENT_SELECT} WHERE c.comment_id = $1");

        sqlx::query_as::<_, CommentModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch comment {}: {:?}", id, err);
                RepositoryError::from(err)
            })
    }
}
