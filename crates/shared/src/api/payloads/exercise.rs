use serde::{Deserialize, Serialize};

use crate::{
    model::{Exercise, User},
    types::{NumberOrString, ShortId},
    utils::date::display_date,
};

/// Body of an add exercise request. Everything is optional here, presence is
/// checked by validation so missing fields are reported like any other
/// field error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    pub duration: Option<NumberOrString>,
    pub date: Option<String>,
}

/// Response to an add exercise request.
///
/// `id` is the id of the *user* the exercise was logged against, the
/// exercise itself is never identified to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedExercise {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[serde(rename = "_id")]
    pub id: ShortId,
    pub date: String,
}

impl AddedExercise {
    pub fn new(user: User, exercise: Exercise) -> Self {
        Self {
            username: user.username,
            duration: exercise.whole_minutes(),
            date: display_date(&exercise.date),
            description: exercise.description,
            id: user.id,
        }
    }
}

/// Query string of a log request. Kept as raw strings, anything that doesn't
/// parse is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            duration: exercise.whole_minutes(),
            date: display_date(&exercise.date),
            description: exercise.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub id: ShortId,
    pub username: String,
    /// Length of `log`, not the number of matching exercises
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl ExerciseLog {
    pub fn new(user: User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn user() -> User {
        User {
            id: ShortId::generate(),
            username: "runner".to_owned(),
        }
    }

    fn exercise(user: &User, duration: f64) -> Exercise {
        Exercise {
            id: 1,
            user_id: user.id.clone(),
            description: "jog".to_owned(),
            duration,
            date: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_added_exercise_uses_user_id() {
        let user = user();
        let ex = exercise(&user, 30.7);
        let added = AddedExercise::new(user.clone(), ex);

        assert_eq!(added.id, user.id);
        assert_eq!(added.duration, 30);
        assert_eq!(added.date, "Wed Jan 01 2020");

        let json = serde_json::to_value(&added).unwrap();
        assert_eq!(json["_id"], user.id.as_str());
        assert!(json["duration"].is_i64());
    }

    #[test]
    fn test_log_count_matches_entries() {
        let user = user();
        let log = ExerciseLog::new(
            user.clone(),
            vec![exercise(&user, 10.0), exercise(&user, 20.0)],
        );
        assert_eq!(log.count, 2);
        assert_eq!(log.log.len(), 2);
    }

    #[test]
    fn test_add_request_reads_user_id_key() {
        let req: AddExerciseRequest = serde_json::from_str(
            r#"{"userId":"abc","description":"swim","duration":"15"}"#,
        )
        .unwrap();
        assert_eq!(req.user_id.as_deref(), Some("abc"));
        assert_eq!(req.duration, Some(NumberOrString::Text("15".to_owned())));
        assert_eq!(req.date, None);
    }
}
