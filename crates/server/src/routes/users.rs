use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::pagination::Pagination;
use service::users::{NewUserInput, User};
use tracing::debug;

use crate::errors::ApiError;
use crate::state::AppState;

pub const USER_CREATED: &str = "User created successfully";

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page index
    pub page: Option<u32>,
    /// Page size, clamped to 1..=100
    pub per_page: Option<u32>,
}

/// Body of a successful create.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub message: &'static str,
    pub user: User,
}

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "Users in creation order", body = [crate::openapi::UserDoc]),
        (status = 400, description = "Invalid query", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, ApiError> {
    let Query(q) = query?;
    let users = state.users.list(Pagination::from_query(q.page, q.per_page)).await;
    debug!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = crate::openapi::UserDoc),
        (status = 400, description = "Invalid user id", body = crate::openapi::MessageDoc),
        (status = 404, description = "User not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::CreateUserRequestDoc,
    responses(
        (status = 201, description = "User created", body = crate::openapi::UserCreatedDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUserInput>, JsonRejection>,
) -> Result<(StatusCode, Json<UserCreated>), ApiError> {
    let Json(input) = payload?;
    let user = state.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(UserCreated { message: USER_CREATED, user })))
}
