use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use kassa_data::{Account, AccountKey, Insert, Retrieve};
use kassa_db::results::StoreError;

use crate::responses;
use crate::sessions::SESSION_COOKIE;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Resolve the account behind the request's session cookie.
/// The Err side is a ready-to-return 401 response.
pub async fn current_account(
    state: &AppState,
    jar: &CookieJar,
) -> Result<Account, Response> {
    let token = match jar.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Err(responses::unauthorized()),
    };
    let account_id = match state.sessions.account_id(&token) {
        Some(account_id) => account_id,
        None => return Err(responses::unauthorized()),
    };
    let account: Option<Account> = state
        .db
        .retrieve(AccountKey::Id(account_id))
        .await
        .map_err(responses::internal_error)?;
    account.ok_or_else(responses::unauthorized)
}

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Response {
    let username = body.username.trim();
    if username.is_empty() || body.password.is_empty() {
        return responses::error(
            StatusCode::BAD_REQUEST,
            "username and password are required",
        );
    }

    match state.db.insert(Account::new(username, &body.password)).await {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(err) => match err.downcast_ref::<StoreError>() {
            Some(StoreError::DuplicateUsername(_)) => {
                responses::error(StatusCode::CONFLICT, err.to_string())
            }
            None => responses::internal_error(err),
        },
    }
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Credentials>,
) -> Response {
    let account: Option<Account> = match state
        .db
        .retrieve(AccountKey::Username(body.username.clone()))
        .await
    {
        Ok(account) => account,
        Err(err) => return responses::internal_error(err),
    };

    match account {
        Some(account) if account.verify_password(&body.password) => {
            let token = state.sessions.create(account.id);
            let cookie = Cookie::build((SESSION_COOKIE, token))
                .http_only(true)
                .path("/");
            (jar.add(cookie), Json(account)).into_response()
        }
        // Same answer for unknown user and wrong password.
        _ => responses::error(
            StatusCode::UNAUTHORIZED,
            "invalid username or password",
        ),
    }
}

/// POST /api/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value());
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/");
    (
        jar.remove(removal),
        Json(serde_json::json!({ "ok": true })),
    )
        .into_response()
}
