use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct FindAllComments {
    pub variant_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(range(min = 1))]
    pub variant_id: i32,

    #[validate(length(min = 1, max = 2000))]
    pub comment: String,

    #[validate(range(min = 1, max = 5))]
    pub star: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    #[serde(default)]
    pub comment: Option<String>,

    #[validate(range(min = 1, max = 5))]
    #[serde(default)]
    pub star: Option<i32>,
}

/// Full replacement body for `PUT`; both fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReplaceCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,

    #[validate(range(min = 1, max = 5))]
    pub star: i32,
}

impl From<ReplaceCommentRequest> for UpdateCommentRequest {
    fn from(value: ReplaceCommentRequest) -> Self {
        UpdateCommentRequest {
            comment: Some(value.comment),
            star: Some(value.star),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentRecordRequest {
    pub user_id: i32,
    pub variant_id: i32,
    pub comment: String,
    pub star: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCommentRecordRequest {
    pub comment_id: i32,
    pub comment: String,
    pub star: i32,
}
