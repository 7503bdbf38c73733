use axum::Json;
use shared::{
    api::{
        error::ServerError,
        payloads::{CreatedUser, NewUserRequest},
        response_errors::CreateUserError,
    },
    model::{NewUser, User},
};
use tracing::{info, instrument};

use crate::{db::DatabaseConnection, JsonOrForm};

#[instrument(skip(conn))]
pub async fn new_user(
    DatabaseConnection(conn): DatabaseConnection,
    JsonOrForm(req): JsonOrForm<NewUserRequest>,
) -> Result<Json<CreatedUser>, ServerError<CreateUserError>> {
    let new_user = NewUser::from_request(req)?;

    let user = conn
        .interact(move |conn| -> Result<User, ServerError<CreateUserError>> {
            if User::fetch_by_username(conn, &new_user.username)?.is_some() {
                return Err(CreateUserError::UsernameTaken.into());
            }

            Ok(User::create(conn, new_user)?)
        })
        .await??;

    info!(user_id = %user.id, username = %user.username, "Created user");
    Ok(Json(user.into()))
}
