use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use crate::http::error::ApiResult;
use crate::http::state::AppState;
use crate::store::{NewUser, User};

/// `?secretCode=`; absent means empty, which never matches a user.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialQuery {
    #[serde(rename = "secretCode", default)]
    pub secret_code: String,
}

/// POST /register — create a user from `{"Name", "Email"}`.
pub async fn register(
    State(state): State<AppState>,
    body: String,
) -> ApiResult<(StatusCode, Json<User>)> {
    let new: NewUser = super::decode_body(&body)?;
    let user = state.store.create_user(new)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /login?secretCode=
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<CredentialQuery>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.store.authenticate_user(&query.secret_code)?))
}

/// GET /ViewProfile?secretCode= — same lookup as login.
pub async fn view_profile(
    State(state): State<AppState>,
    Query(query): Query<CredentialQuery>,
) -> ApiResult<Json<User>> {
    Ok(Json(state.store.authenticate_user(&query.secret_code)?))
}
