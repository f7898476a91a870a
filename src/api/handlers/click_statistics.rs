//! Handlers for the raw click log endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::click_statistic::{
    ClickStatisticView, ClickSummaryView, ClicksByTextRequest, CreateClickStatisticRequest,
    PersonalTokenRequest, SimpleClickStatisticRequest,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Records a click for the authenticated caller.
///
/// # Endpoint
///
/// `POST /click-statistics`
///
/// # Request Body
///
/// ```json
/// {
///   "text": "btn_submit_form",
///   "personalToken": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized when the personal token does not belong to the
/// caller; nothing is written in that case.
pub async fn create_click_statistic_handler(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateClickStatisticRequest>,
) -> Result<(StatusCode, Json<ClickStatisticView>), AppError> {
    payload.validate()?;

    let click = state
        .click_statistic_service
        .create(payload.text, payload.personal_token, current.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ClickStatisticView::from(&click))))
}

/// Records a click identified only by a personal token, no session required.
///
/// # Endpoint
///
/// `POST /click-statistics/simple`
///
/// The same event is forwarded to the unique click counter; a failure there
/// is logged and ignored while the raw row stays.
///
/// # Errors
///
/// Returns 401 Unauthorized if no user owns the token.
pub async fn simple_click_statistic_handler(
    State(state): State<AppState>,
    Json(payload): Json<SimpleClickStatisticRequest>,
) -> Result<(StatusCode, Json<ClickStatisticView>), AppError> {
    payload.validate()?;

    let click = state
        .click_statistic_service
        .create_anonymous(payload.text, payload.uuid)
        .await?;

    Ok((StatusCode::CREATED, Json(ClickStatisticView::from(&click))))
}

/// Lists the whole click log, newest first.
///
/// # Endpoint
///
/// `GET /click-statistics` (admin only)
pub async fn list_click_statistics_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClickStatisticView>>, AppError> {
    let clicks = state.click_statistic_service.find_all().await?;

    Ok(Json(clicks.iter().map(ClickStatisticView::from).collect()))
}

/// Lists the authenticated caller's clicks, newest first.
///
/// # Endpoint
///
/// `GET /click-statistics/my-clicks`
pub async fn my_clicks_handler(
    current: CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClickStatisticView>>, AppError> {
    let clicks = state
        .click_statistic_service
        .find_by_user(current.user_id)
        .await?;

    Ok(Json(clicks.iter().map(ClickStatisticView::from).collect()))
}

/// Summarizes all clicks grouped by text label.
///
/// # Endpoint
///
/// `GET /click-statistics/summary/all` (admin only)
pub async fn click_summary_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClickSummaryView>>, AppError> {
    let summary = state.click_statistic_service.get_click_summary().await?;

    Ok(Json(summary.iter().map(ClickSummaryView::from).collect()))
}

/// Summarizes the caller's clicks grouped by text label.
///
/// # Endpoint
///
/// `POST /click-statistics/summary/my-clicks`
///
/// The personal token in the body is re-validated against the session's
/// user before anything is queried.
pub async fn my_click_summary_handler(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<PersonalTokenRequest>,
) -> Result<Json<Vec<ClickSummaryView>>, AppError> {
    let summary = state
        .click_statistic_service
        .get_user_click_summary(current.user_id, payload.personal_token)
        .await?;

    Ok(Json(summary.iter().map(ClickSummaryView::from).collect()))
}

/// Lists the caller's clicks for one text label, newest first.
///
/// # Endpoint
///
/// `POST /click-statistics/my-clicks/by-text`
///
/// # Errors
///
/// Returns 404 Not Found when the caller never clicked that label.
pub async fn my_clicks_by_text_handler(
    current: CurrentUser,
    State(state): State<AppState>,
    Json(payload): Json<ClicksByTextRequest>,
) -> Result<Json<Vec<ClickStatisticView>>, AppError> {
    payload.validate()?;

    let clicks = state
        .click_statistic_service
        .find_clicks_by_text(current.user_id, &payload.text, payload.personal_token)
        .await?;

    Ok(Json(clicks.iter().map(ClickStatisticView::from).collect()))
}

/// Retrieves a click event by id.
///
/// # Endpoint
///
/// `GET /click-statistics/{id}`
pub async fn get_click_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ClickStatisticView>, AppError> {
    let click = state.click_statistic_service.find_one(id).await?;

    Ok(Json(ClickStatisticView::from(&click)))
}

/// Deletes a click event.
///
/// # Endpoint
///
/// `DELETE /click-statistics/{id}` (admin only)
pub async fn delete_click_statistic_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.click_statistic_service.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
