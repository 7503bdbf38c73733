use axum::{extract::Query, Json};
use shared::{
    api::{
        error::ServerError,
        payloads::{ExerciseLog, LogQuery},
        response_errors::{ExerciseError, LogError},
    },
    model::{Exercise, LogFilter, User},
};
use tracing::{debug, instrument};

use crate::db::DatabaseConnection;

#[instrument(skip(conn))]
pub async fn exercise_log(
    DatabaseConnection(conn): DatabaseConnection,
    Query(query): Query<LogQuery>,
) -> Result<Json<ExerciseLog>, ServerError<LogError>> {
    let filter = LogFilter::from_query(&query);
    debug!(?filter);

    let user_id = query.user_id.unwrap_or_default();
    let log = conn
        .interact(move |conn| -> Result<_, ServerError<LogError>> {
            let user = User::fetch_by_id(conn, &user_id)?.ok_or(ExerciseError::UnknownUser)?;
            let exercises = Exercise::fetch_log(conn, &user.id, &filter)?;

            Ok(ExerciseLog::new(user, exercises))
        })
        .await??;

    Ok(Json(log))
}
