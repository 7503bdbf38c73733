use std::{fmt, ops::Deref};

use rand::Rng;
use serde::{Deserialize, Serialize};
#[cfg(feature = "backend")]
use rusqlite::{
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Characters a [`ShortId`] is drawn from. 64 symbols so every byte of
/// randomness maps onto the alphabet without bias.
pub const SHORT_ID_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_-";
pub const SHORT_ID_LEN: usize = 9;

/// Short, url safe, randomly generated identifier used as the user primary key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..SHORT_ID_LEN)
            .map(|_| SHORT_ID_ALPHABET[rng.gen_range(0..SHORT_ID_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for ShortId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ShortId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ShortId> for String {
    fn from(value: ShortId) -> Self {
        value.0
    }
}

#[cfg(feature = "backend")]
impl ToSql for ShortId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

#[cfg(feature = "backend")]
impl FromSql for ShortId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(|s| Self(s.to_owned()))
    }
}

#[cfg(feature = "backend")]
impl From<&ShortId> for sea_query::Value {
    fn from(value: &ShortId) -> Self {
        value.0.clone().into()
    }
}

#[cfg(feature = "backend")]
impl From<ShortId> for sea_query::Value {
    fn from(value: ShortId) -> Self {
        value.0.into()
    }
}
