//! Handlers for the unique click counter endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::click_statistic::PersonalTokenRequest;
use crate::api::dto::unique_click_statistic::{
    CreateUniqueClickStatisticRequest, SimpleUniqueClickStatisticRequest,
    UniqueClickStatisticView, UpdateUniqueClickStatisticRequest,
};
use crate::api::middleware::auth::CurrentUser;
use crate::domain::entities::UniqueClickPatch;
use crate::error::AppError;
use crate::state::AppState;

/// Records a click against the caller's (user, text) counter.
///
/// # Endpoint
///
/// `POST /unique-click-statistics`
///
/// The first click of a pair creates the counter at 1; each further click
/// increments it atomically.
pub async fn create_unique_click_statistic_handler(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateUniqueClickStatisticRequest>,
) -> Result<(StatusCode, Json<UniqueClickStatisticView>), AppError> {
    payload.validate()?;

    let stat = state
        .unique_click_statistic_service
        .create(payload.text, payload.personal_token, current.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UniqueClickStatisticView::from(&stat)),
    ))
}

/// Records a counter click identified only by a personal token.
///
/// # Endpoint
///
/// `POST /unique-click-statistics/simple`
pub async fn simple_unique_click_statistic_handler(
    State(state): State<AppState>,
    Json(payload): Json<SimpleUniqueClickStatisticRequest>,
) -> Result<(StatusCode, Json<UniqueClickStatisticView>), AppError> {
    payload.validate()?;

    let stat = state
        .unique_click_statistic_service
        .create_anonymous(payload.text, payload.uuid)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UniqueClickStatisticView::from(&stat)),
    ))
}

/// Lists all counters, highest count first.
///
/// # Endpoint
///
/// `GET /unique-click-statistics` (admin only)
pub async fn list_unique_click_statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UniqueClickStatisticView>>, AppError> {
    let stats = state.unique_click_statistic_service.find_all().await?;

    Ok(Json(
        stats.iter().map(UniqueClickStatisticView::from).collect(),
    ))
}

/// Lists the caller's counters, highest count first.
///
/// # Endpoint
///
/// `GET /unique-click-statistics/me`
pub async fn my_unique_clicks_handler(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UniqueClickStatisticView>>, AppError> {
    let stats = state
        .unique_click_statistic_service
        .find_by_user(current.user_id)
        .await?;

    Ok(Json(
        stats.iter().map(UniqueClickStatisticView::from).collect(),
    ))
}

/// Same listing as `/me`, kept as a separate summary route.
///
/// # Endpoint
///
/// `GET /unique-click-statistics/me/summary`
pub async fn my_unique_summary_handler(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UniqueClickStatisticView>>, AppError> {
    let stats = state
        .unique_click_statistic_service
        .find_by_user(current.user_id)
        .await?;

    Ok(Json(
        stats.iter().map(UniqueClickStatisticView::from).collect(),
    ))
}

/// Counter summary gated by an extra personal token check.
///
/// # Endpoint
///
/// `POST /unique-click-statistics/me/summary`
pub async fn my_unique_summary_with_token_handler(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<PersonalTokenRequest>,
) -> Result<Json<Vec<UniqueClickStatisticView>>, AppError> {
    let stats = state
        .unique_click_statistic_service
        .get_user_click_summary(current.user_id, payload.personal_token)
        .await?;

    Ok(Json(
        stats.iter().map(UniqueClickStatisticView::from).collect(),
    ))
}

/// Retrieves a counter by id.
///
/// # Endpoint
///
/// `GET /unique-click-statistics/{id}`
pub async fn get_unique_click_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UniqueClickStatisticView>, AppError> {
    let stat = state.unique_click_statistic_service.find_one(id).await?;

    Ok(Json(UniqueClickStatisticView::from(&stat)))
}

/// Partially updates a counter.
///
/// # Endpoint
///
/// `PUT /unique-click-statistics/{id}` (admin only)
pub async fn update_unique_click_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUniqueClickStatisticRequest>,
) -> Result<Json<UniqueClickStatisticView>, AppError> {
    payload.validate()?;

    let stat = state
        .unique_click_statistic_service
        .update(
            id,
            UniqueClickPatch {
                text: payload.text,
                count: payload.count,
            },
        )
        .await?;

    Ok(Json(UniqueClickStatisticView::from(&stat)))
}

/// Deletes a counter.
///
/// # Endpoint
///
/// `DELETE /unique-click-statistics/{id}` (admin only)
pub async fn delete_unique_click_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.unique_click_statistic_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
