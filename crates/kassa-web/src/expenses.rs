use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::CookieJar;

use kassa_data::{Delete, Expense, ExpenseInput, Insert, Retrieve, Update};

use crate::auth::current_account;
use crate::responses;
use crate::state::AppState;

fn not_found() -> Response {
    responses::error(StatusCode::NOT_FOUND, "no such expense")
}

/// GET /api/expenses
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    match account.get_expenses(&state.db).await {
        Ok(expenses) => Json(expenses).into_response(),
        Err(err) => responses::internal_error(err),
    }
}

/// POST /api/expenses
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<ExpenseInput>,
) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    let expense = match input.validate(account.id) {
        Ok(expense) => expense,
        Err(err) => {
            return responses::error(
                StatusCode::UNPROCESSABLE_ENTITY,
                err.to_string(),
            )
        }
    };

    match state.db.insert(expense).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(err) => responses::internal_error(err),
    }
}

/// GET /api/expenses/:id
pub async fn show(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    let expense: Option<Expense> =
        match state.db.retrieve((id, account.id)).await {
            Ok(expense) => expense,
            Err(err) => return responses::internal_error(err),
        };

    match expense {
        Some(expense) => Json(expense).into_response(),
        None => not_found(),
    }
}

/// PUT /api/expenses/:id
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u32>,
    Json(input): Json<ExpenseInput>,
) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    let mut expense = match input.validate(account.id) {
        Ok(expense) => expense,
        Err(err) => {
            return responses::error(
                StatusCode::UNPROCESSABLE_ENTITY,
                err.to_string(),
            )
        }
    };
    expense.id = id;

    match state.db.update(expense).await {
        Ok(Some(expense)) => Json(expense).into_response(),
        Ok(None) => not_found(),
        Err(err) => responses::internal_error(err),
    }
}

/// DELETE /api/expenses/:id
pub async fn remove(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> Response {
    let account = match current_account(&state, &jar).await {
        Ok(account) => account,
        Err(response) => return response,
    };

    let expense: Option<Expense> =
        match state.db.retrieve((id, account.id)).await {
            Ok(expense) => expense,
            Err(err) => return responses::internal_error(err),
        };
    let expense = match expense {
        Some(expense) => expense,
        None => return not_found(),
    };

    match state.db.delete(expense).await {
        Ok(true) => Json(serde_json::json!({ "deleted": true })).into_response(),
        Ok(false) => not_found(),
        Err(err) => responses::internal_error(err),
    }
}
