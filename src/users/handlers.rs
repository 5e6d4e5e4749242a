use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    state::AppState,
    users::{error::internal, repo_types::User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(get_users))
}

#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = state.store.get_all_users().await.map_err(internal)?;
    info!(count = users.len(), "users listed");
    Ok(Json(users))
}
