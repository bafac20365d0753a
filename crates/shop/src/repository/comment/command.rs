use crate::{
    abstract_trait::comment::repository::CommentCommandRepositoryTrait,
    domain::requests::comment::{CreateCommentRecordRequest, UpdateCommentRecordRequest},
    model::comment::Comment as CommentModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CommentCommandRepository {
    db: ConnectionPool,
}

impl CommentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentCommandRepositoryTrait for CommentCommandRepository {
    async fn create_comment(
        &self,
        req: &CreateCommentRecordRequest,
    ) -> Result<CommentModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let comment = sqlx::query_as::<_, CommentModel>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (user_id, variant_id, comment, star, created_at, updated_at)
                VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
                RETURNING *
            )
            SELECT i.comment_id, i.user_id, u.username, i.variant_id, i.comment, i.star,
                   i.created_at, i.updated_at
            FROM inserted i
            JOIN users u ON u.user_id = i.user_id
            "#,
        )
        .bind(req.user_id)
        .bind(req.variant_id)
        .bind(&req.comment)
        .bind(req.star)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create comment on variant {}: {:?}",
                req.variant_id, err
            );
            RepositoryError::from_constraint(err)
        })?;

        info!("✅ Created comment ID {}", comment.comment_id);
        Ok(comment)
    }

    async fn update_comment(
        &self,
        req: &UpdateCommentRecordRequest,
    ) -> Result<CommentModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let comment = sqlx::query_as::<_, CommentModel>(
            r#"
            WITH updated AS (
                UPDATE comments
                SET comment    = $2,
                    star       = $3,
                    updated_at = current_timestamp
                WHERE comment_id = $1
                RETURNING *
            )
            SELECT c.comment_id, c.user_id, u.username, c.variant_id, c.comment, c.star,
                   c.created_at, c.updated_at
            FROM updated c
            JOIN users u ON u.user_id = c.user_id
            "#,
        )
        .bind(req.comment_id)
        .bind(&req.comment)
        .bind(req.star)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update comment {}: {:?}", req.comment_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated comment ID {}", comment.comment_id);
        Ok(comment)
    }

    async fn delete_comment(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete comment {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted comment ID {}", id);
        Ok(())
    }
}
