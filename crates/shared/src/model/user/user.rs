use serde::{Deserialize, Serialize};

use crate::types::ShortId;
#[cfg(feature = "backend")]
use {
    crate::model::NewUser,
    exemplar::Model,
    rusqlite::{Connection, OptionalExtension},
    sea_query::{enum_def, Expr, Order, Query, SelectStatement, SqliteQueryBuilder},
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("user"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct User {
    pub id: ShortId,
    pub username: String,
}

impl User {
    /// Flattened form used by the user listing
    pub fn listing(&self) -> String {
        format!("username:{}, _id:{}", self.username, self.id)
    }
}

#[cfg(feature = "backend")]
impl User {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([UserIden::Id, UserIden::Username])
            .from(UserIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id<T: AsRef<str>>(conn: &Connection, id: T) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Id).eq(id.as_ref()))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    pub fn fetch_by_username<T: AsRef<str>>(conn: &Connection, username: T) -> Result<Option<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(UserIden::Username).eq(username.as_ref()))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let user = stmt.query_row(&*values.as_params(), User::from_row).optional()?;
        Ok(user)
    }

    /// All users in registration order
    pub fn fetch_all(conn: &Connection) -> Result<Vec<User>, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let users = stmt
            .query_map(&*values.as_params(), User::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(users)
    }

    pub fn create(conn: &mut Connection, new_user: NewUser) -> Result<User, rusqlite::Error> {
        let tx = conn.transaction()?;
        let user = {
            new_user.insert(&tx)?;
            User::fetch_by_id(&tx, &new_user.id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?
        };
        tx.commit()?;

        Ok(user)
    }
}
