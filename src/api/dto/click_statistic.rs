//! DTOs for raw click log endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::ClickStatistic;
use crate::domain::repositories::ClickSummary;

/// Authenticated click submission: the label plus the caller's own
/// personal token.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClickStatisticRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[serde(rename = "personalToken")]
    pub personal_token: Uuid,
}

/// Anonymous click submission. The `uuid` field carries the personal token.
#[derive(Debug, Deserialize, Validate)]
pub struct SimpleClickStatisticRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    pub uuid: Uuid,
}

/// Body carrying just a personal token, used by the summary endpoints.
#[derive(Debug, Deserialize)]
pub struct PersonalTokenRequest {
    #[serde(rename = "personalToken")]
    pub personal_token: Uuid,
}

/// Lookup of a user's clicks for one text label.
#[derive(Debug, Deserialize, Validate)]
pub struct ClicksByTextRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[serde(rename = "personalToken")]
    pub personal_token: Uuid,
}

/// JSON representation of a recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickStatisticView {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ClickStatistic> for ClickStatisticView {
    fn from(click: &ClickStatistic) -> Self {
        Self {
            id: click.id,
            text: click.text.clone(),
            user_id: click.user_id,
            created_at: click.created_at,
            updated_at: click.updated_at,
        }
    }
}

/// One grouped summary row for a text label.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickSummaryView {
    pub text: String,
    pub count: i64,
    pub first_click: DateTime<Utc>,
    pub last_click: DateTime<Utc>,
}

impl From<&ClickSummary> for ClickSummaryView {
    fn from(summary: &ClickSummary) -> Self {
        Self {
            text: summary.text.clone(),
            count: summary.count,
            first_click: summary.first_click,
            last_click: summary.last_click,
        }
    }
}
