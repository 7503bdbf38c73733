use axum::Json;
use chrono::Utc;
use shared::{
    api::{
        error::ServerError,
        payloads::{AddExerciseRequest, AddedExercise},
        response_errors::{AddExerciseError, ExerciseError},
    },
    model::{Exercise, NewExercise, User},
};
use tracing::{info, instrument};

use crate::{db::DatabaseConnection, JsonOrForm};

#[instrument(skip(conn))]
pub async fn add_exercise(
    DatabaseConnection(conn): DatabaseConnection,
    JsonOrForm(req): JsonOrForm<AddExerciseRequest>,
) -> Result<Json<AddedExercise>, ServerError<AddExerciseError>> {
    let now = Utc::now();

    // The user lookup and the insert are separate statements, not a transaction
    let (user, exercise) = conn
        .interact(move |conn| -> Result<_, ServerError<AddExerciseError>> {
            let user = User::fetch_by_id(conn, req.user_id.as_deref().unwrap_or_default())?
                .ok_or(ExerciseError::UnknownUser)?;

            let new_exercise = NewExercise::from_request(&req, user.id.clone(), now)?;
            let exercise = Exercise::create(conn, new_exercise)?;

            Ok((user, exercise))
        })
        .await??;

    info!(user_id = %user.id, exercise_id = exercise.id, "Added exercise");
    Ok(Json(AddedExercise::new(user, exercise)))
}
