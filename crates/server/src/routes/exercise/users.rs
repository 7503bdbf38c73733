use axum::Json;
use shared::{
    api::{error::ServerError, payloads::UserListing, response_errors::FetchError},
    model::User,
};
use tracing::instrument;

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn users(
    DatabaseConnection(conn): DatabaseConnection,
) -> Result<Json<UserListing>, ServerError<FetchError>> {
    let users = conn.interact(|conn| User::fetch_all(conn)).await??;

    Ok(Json(users.iter().map(User::listing).collect()))
}
