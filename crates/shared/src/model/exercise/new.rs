use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    api::{error::ValidationError, payloads::AddExerciseRequest},
    model::ValidateModel,
    types::{NumberOrString, ShortId},
    utils::date::parse_exercise_date,
};
#[cfg(feature = "backend")]
use exemplar::Model;

pub const DESCRIPTION_MAX_LEN: usize = 25;
pub const DURATION_MIN: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
pub struct NewExercise {
    pub user_id: ShortId,
    pub description: String,
    pub duration: f64,
    pub date: DateTime<Utc>,
}

fn parse_description(value: Option<&str>) -> Result<&str, &'static str> {
    match value {
        None | Some("") => Err("description is required"),
        Some(d) if d.encode_utf16().count() > DESCRIPTION_MAX_LEN => {
            Err("Description too long, not greater than 25")
        }
        Some(d) => Ok(d),
    }
}

fn parse_duration(value: Option<&NumberOrString>) -> Result<f64, &'static str> {
    match value.and_then(NumberOrString::to_f64) {
        None => Err("duration is required"),
        Some(Err(())) => Err("duration must be a number"),
        Some(Ok(d)) if d < DURATION_MIN => Err("Duration too short, at least 1 minute"),
        Some(Ok(d)) => Ok(d),
    }
}

/// `Ok(None)` means no date was submitted
fn parse_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, &'static str> {
    match value.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(None),
        Some(d) => parse_exercise_date(d)
            .map(Some)
            .ok_or("date is not a valid date"),
    }
}

/// Fields of an add request once every check has passed
struct ParsedExercise<'a> {
    description: &'a str,
    duration: f64,
    date: Option<DateTime<Utc>>,
}

/// Runs every field check, collecting failures in field order
fn parse_request(req: &AddExerciseRequest) -> Result<ParsedExercise<'_>, ValidationError> {
    let mut errors = ValidationError::new();

    let description = parse_description(req.description.as_deref())
        .map_err(|message| errors.push("description", message))
        .ok();
    let duration = parse_duration(req.duration.as_ref())
        .map_err(|message| errors.push("duration", message))
        .ok();
    let date = parse_date(req.date.as_deref())
        .map_err(|message| errors.push("date", message))
        .ok();

    match (description, duration, date) {
        (Some(description), Some(duration), Some(date)) => Ok(ParsedExercise {
            description,
            duration,
            date,
        }),
        _ => Err(errors),
    }
}

impl ValidateModel for AddExerciseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        parse_request(self).map(|_| ())
    }
}

impl NewExercise {
    /// Validates the request and builds the exercise to store. `now` is used
    /// when no date was submitted.
    pub fn from_request(
        req: &AddExerciseRequest,
        user_id: ShortId,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let parsed = parse_request(req)?;

        Ok(Self {
            user_id,
            description: parsed.description.to_owned(),
            duration: parsed.duration,
            date: parsed.date.unwrap_or(now),
        })
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    fn request(description: &str, duration: NumberOrString, date: Option<&str>) -> AddExerciseRequest {
        AddExerciseRequest {
            user_id: Some("someone".to_owned()),
            description: Some(description.to_owned()),
            duration: Some(duration),
            date: date.map(str::to_owned),
        }
    }

    #[test]
    fn test_valid_request() {
        let now = Utc::now();
        let ex = NewExercise::from_request(
            &request("run", "30".into(), Some("2020-01-15")),
            ShortId::generate(),
            now,
        )
        .unwrap();

        assert_eq!(ex.description, "run");
        assert_eq!(ex.duration, 30.0);
        assert_eq!(ex.date, Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_missing_or_blank_date_is_now() {
        let now = Utc::now();
        let id = ShortId::generate();
        let a = NewExercise::from_request(&request("run", 5.0.into(), None), id.clone(), now).unwrap();
        let b = NewExercise::from_request(&request("run", 5.0.into(), Some("")), id, now).unwrap();
        assert_eq!(a.date, now);
        assert_eq!(b.date, now);
    }

    #[test]
    fn test_description_limit_counts_utf16_units() {
        let at_limit = "é".repeat(DESCRIPTION_MAX_LEN);
        assert!(request(&at_limit, 1.0.into(), None).validate().is_ok());

        // Two UTF-16 units each
        let wide = "🏃".repeat(13);
        assert!(request(&wide, 1.0.into(), None).validate().is_err());

        let over = "a".repeat(DESCRIPTION_MAX_LEN + 1);
        let err = request(&over, 1.0.into(), None).validate().unwrap_err();
        assert_eq!(err.to_string(), "Description too long, not greater than 25");
    }

    #[test]
    fn test_duration_rules() {
        let err = request("run", 0.5.into(), None).validate().unwrap_err();
        assert_eq!(err.first().unwrap().field, "duration");
        assert_eq!(err.to_string(), "Duration too short, at least 1 minute");

        let err = request("run", "lots".into(), None).validate().unwrap_err();
        assert_eq!(err.to_string(), "duration must be a number");

        let mut req = request("run", 1.0.into(), None);
        req.duration = None;
        assert_eq!(req.validate().unwrap_err().to_string(), "duration is required");
    }

    #[test]
    fn test_errors_reported_in_field_order() {
        let req = AddExerciseRequest {
            user_id: None,
            description: Some("x".repeat(40)),
            duration: Some(0.0.into()),
            date: Some("not a date".to_owned()),
        };
        let err = req.validate().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["description", "duration", "date"]);
        assert_eq!(err.first().unwrap().message, "Description too long, not greater than 25");
    }

    #[test]
    fn test_from_request_reports_every_failed_field() {
        let req = AddExerciseRequest {
            user_id: None,
            description: None,
            duration: Some("lots".into()),
            date: Some("someday".to_owned()),
        };
        let err = NewExercise::from_request(&req, ShortId::generate(), Utc::now()).unwrap_err();
        let messages: Vec<_> = err.errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            ["description is required", "duration must be a number", "date is not a valid date"]
        );
    }
}
