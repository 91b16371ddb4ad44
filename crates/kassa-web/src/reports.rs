use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use kassa_reports::chart::{summary_chart, Chart};
use kassa_reports::dashboard;
use kassa_reports::datetime;
use kassa_reports::summary::{group_and_sum, round2, GroupBy, GroupTotal};

use crate::auth::current_account;
use crate::responses;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub group_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub group_by: GroupBy,
    pub total: f64,
    pub groups: Vec<GroupTotal>,
    pub chart: Chart,
}

/// GET /api/summary?group_by=category|month|week
pub async fn summary(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<SummaryParams>,
) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    let group_by: GroupBy = match params
        .group_by
        .as_deref()
        .unwrap_or("category")
        .parse()
    {
        Ok(group_by) => group_by,
        Err(err) => {
            return responses::error(StatusCode::BAD_REQUEST, err.to_string())
        }
    };

    let expenses = match account.get_expenses(&state.db).await {
        Ok(expenses) => expenses,
        Err(err) => return responses::internal_error(err),
    };

    let groups = group_and_sum(&expenses, group_by);
    let total = round2(groups.iter().map(|g| g.total).sum());
    let chart = summary_chart(group_by, &groups);

    Json(SummaryResponse {
        group_by,
        total,
        groups,
        chart,
    })
    .into_response()
}

/// GET /api/dashboard
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    let expenses = match account.get_expenses(&state.db).await {
        Ok(expenses) => expenses,
        Err(err) => return responses::internal_error(err),
    };

    Json(dashboard::compute(&expenses, datetime::today())).into_response()
}
