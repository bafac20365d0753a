use crate::model::comment::Comment as CommentModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CommentResponse {
    pub id: i32,
    pub user_id: i32,
    pub username: String,
    pub variant_id: i32,
    pub comment: String,
    pub star: i32,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<CommentModel> for CommentResponse {
    fn from(value: CommentModel) -> Self {
        CommentResponse {
            id: value.comment_id,
            user_id: value.user_id,
            username: value.username,
            variant_id: value.variant_id,
            comment: value.comment,
            star: value.star,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
