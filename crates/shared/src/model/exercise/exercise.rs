use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ShortId;
#[cfg(feature = "backend")]
use {
    crate::model::{LogFilter, NewExercise},
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: i64,
    pub user_id: ShortId,
    pub description: String,
    /// Minutes. Stored as submitted, reported truncated
    pub duration: f64,
    pub date: DateTime<Utc>,
}

impl Exercise {
    pub fn whole_minutes(&self) -> i64 {
        self.duration.trunc() as i64
    }
}

#[cfg(feature = "backend")]
impl Exercise {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: i64) -> Result<Option<Exercise>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row).optional()?;
        Ok(res)
    }

    /// A user's exercises inside the filter's date range, oldest insert first
    pub fn fetch_log(
        conn: &Connection,
        user_id: &ShortId,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let mut query = Self::select_star();
        query
            .and_where(Expr::col(ExerciseIden::UserId).eq(user_id))
            .order_by(ExerciseIden::Id, Order::Asc);

        if let Some(from) = filter.from {
            query.and_where(Expr::col(ExerciseIden::Date).gte(from));
        }
        if let Some(until) = filter.until {
            query.and_where(Expr::col(ExerciseIden::Date).lt(until));
        }
        if let Some(limit) = filter.limit {
            query.limit(limit);
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    pub fn create(conn: &mut Connection, new_exercise: NewExercise) -> Result<Exercise, rusqlite::Error> {
        let tx = conn.transaction()?;
        let exercise = {
            new_exercise.insert(&tx)?;
            Exercise::fetch_by_id(&tx, tx.last_insert_rowid())?
                .ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(exercise)
    }
}
