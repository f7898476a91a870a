//! DTOs for unique click counter endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::UniqueClickStatistic;

/// Authenticated counter submission.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUniqueClickStatisticRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[serde(rename = "personalToken")]
    pub personal_token: Uuid,
}

/// Anonymous counter submission. The `uuid` field carries the personal token.
#[derive(Debug, Deserialize, Validate)]
pub struct SimpleUniqueClickStatisticRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    pub uuid: Uuid,
}

/// Admin partial update of a counter row. Omitted fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUniqueClickStatisticRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: Option<String>,

    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub count: Option<i64>,
}

/// JSON representation of a counter row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniqueClickStatisticView {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&UniqueClickStatistic> for UniqueClickStatisticView {
    fn from(stat: &UniqueClickStatistic) -> Self {
        Self {
            id: stat.id,
            text: stat.text.clone(),
            user_id: stat.user_id,
            count: stat.count,
            created_at: stat.created_at,
            updated_at: stat.updated_at,
        }
    }
}
