use shared::api::error::{Nothing, ServerError};

pub async fn not_found() -> ServerError<Nothing> {
    ServerError::NotFound
}
