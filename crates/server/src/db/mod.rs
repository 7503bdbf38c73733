use std::{
    ffi::c_int,
    sync::Once,
    time::{Duration, Instant},
};

use deadpool_sqlite::{Config, Hook, HookError, Pool, Runtime};
use include_dir::{include_dir, Dir};
use rusqlite::{Connection, OpenFlags, TransactionBehavior};
use rusqlite_migration::{Migrations, SchemaVersion};
use shared::{
    api::error::{Nothing, ServerError},
    other_error,
};
use tracing::{debug, error, info, instrument, span, trace, warn, Level};
mod database_connection;
pub use database_connection::*;

static MIGRATIONS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/migrations");

fn sqlite_connection_profiling_callback(query: &str, duration: Duration) {
    trace!(target: "sqlite_profiling", ?duration, query);
}

fn sqlite_connection_trace_callback(query: &str) {
    trace!(target: "sqlite_tracing", query);
}

fn sqlite_log_callback(sqlite_code: c_int, msg: &str) {
    use rusqlite::ffi;
    let err_code = ffi::Error::new(sqlite_code);

    // See https://www.sqlite.org/rescode.html for description of result codes.
    match sqlite_code & 0xff {
        ffi::SQLITE_NOTICE => info!(target: "sqlite", msg, %err_code, "SQLITE NOTICE"),
        ffi::SQLITE_WARNING => warn!(target: "sqlite", msg, %err_code, "SQLITE WARNING"),
        _ => error!(target: "sqlite", msg, %err_code, "SQLITE ERROR"),
    };
}

/// Routes SQLite's own log to tracing. Has to happen before the first
/// connection is opened, later calls are no-ops.
fn configure_sqlite_log() {
    static CONFIG_LOG: Once = Once::new();
    CONFIG_LOG.call_once(|| {
        // Safety: called once, before this process opens any connection
        let result = unsafe { rusqlite::trace::config_log(Some(sqlite_log_callback)) };
        if let Err(e) = result {
            warn!("Unable to route the sqlite log to tracing: {e}");
        }
    });
}

pub fn get_migrations() -> Result<Migrations<'static>, ServerError<Nothing>> {
    Migrations::from_directory(&MIGRATIONS_DIR)
        .map_err(|e| other_error!("Migrations::from_directory: {:?}", e))
}

#[instrument(skip(conn))]
pub fn configure_new_connection(conn: &mut Connection) -> Result<(), ServerError<Nothing>> {
    run_pragmas(conn)?;

    if cfg!(debug_assertions) {
        conn.trace(Some(sqlite_connection_trace_callback));
    } else {
        // Hook up the profiling callback
        conn.profile(Some(sqlite_connection_profiling_callback));
    }

    Ok(())
}

#[instrument(skip(conn))]
pub fn run_pragmas(conn: &Connection) -> Result<(), ServerError<Nothing>> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(())
}

#[instrument]
pub fn open_connection(connection_string: &str) -> Result<Connection, ServerError<Nothing>> {
    configure_sqlite_log();

    let open_flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX
        | OpenFlags::SQLITE_OPEN_CREATE;

    let mut conn = Connection::open_with_flags(connection_string, open_flags)?;
    configure_new_connection(&mut conn)?;
    Ok(conn)
}

fn schema_version(
    migrations: &Migrations<'_>,
    conn: &Connection,
) -> Result<usize, ServerError<Nothing>> {
    match migrations
        .current_version(conn)
        .map_err(|e| other_error!("Migrations::current_version: {:?}", e))?
    {
        SchemaVersion::Inside(n) => Ok(n.into()),
        SchemaVersion::Outside(n) => Err(other_error!(
            "Schema version {n} is outside of known schema migrations. Manual intervention required"
        )),
        SchemaVersion::NoneSet => Ok(0),
    }
}

/// Brings the schema up to date, returns the number of migrations applied
#[instrument]
pub fn run_migrations(connection_string: &str) -> Result<usize, ServerError<Nothing>> {
    let mut conn = open_connection(connection_string)?;

    debug!("Checking DB is writable");
    conn.transaction_with_behavior(TransactionBehavior::Exclusive)?;

    let migrations = get_migrations()?;
    let ran = {
        let _span = span!(Level::INFO, "Running migrations").entered();

        let initial_version = schema_version(&migrations, &conn)?;

        migrations
            .to_latest(&mut conn)
            .map_err(|e| other_error!("Migrations::to_latest: {:?}", e))?;

        schema_version(&migrations, &conn)? - initial_version
    };

    close_database(conn)?;

    Ok(ran)
}

/// Runs an optimize on the database. Should be run periodically to keep the
/// database running optimally. It should be very fast if run regularly
#[instrument(skip(conn))]
pub fn optimize_database(conn: &Connection) -> Result<Duration, ServerError<Nothing>> {
    let start = Instant::now();
    conn.pragma_update(None, "analysis_limit", "400")?;
    conn.pragma_update(None, "optimize", "")?;

    Ok(start.elapsed())
}

// Vacuums the database to free up space and improve fragmentation
#[instrument(skip(conn))]
pub fn vacuum_database(conn: &Connection) -> Result<Duration, ServerError<Nothing>> {
    let start = Instant::now();
    conn.execute("VACUUM", ())?;
    Ok(start.elapsed())
}

#[instrument(skip(conn))]
pub fn close_database(conn: Connection) -> Result<(), ServerError<Nothing>> {
    let d1 = optimize_database(&conn)?;
    let d2 = vacuum_database(&conn)?;

    info!(
        "Optimize db took: {:.3}, vacuum took: {:.3}, total: {:.3}",
        d1.as_secs_f32(),
        d2.as_secs_f32(),
        (d1 + d2).as_secs_f32()
    );
    if let Err((_conn, e)) = conn.close() {
        return Err(e.into());
    }

    Ok(())
}

/// Handle to the exercise store. Opened once at startup, handed to the
/// router as state and closed after the server stops.
#[derive(Debug, Clone)]
pub struct Storage {
    pool: Pool,
    connection_string: String,
}

impl Storage {
    /// Runs the migrations synchronously then creates the connection pool
    #[instrument]
    pub fn open(connection_string: &str) -> Result<Self, ServerError<Nothing>> {
        let ran = run_migrations(connection_string)?;
        info!("Ran {ran} db migrations");

        let pool = Config::new(connection_string)
            .builder(Runtime::Tokio1)
            .map_err(|e| other_error!("Config::builder: {e}"))?
            .post_create(Hook::async_fn(|object, _| {
                Box::pin(async move {
                    object
                        .interact(configure_new_connection)
                        .await
                        .map_err(|e| HookError::Message(e.to_string()))?
                        .map_err(|e| HookError::Message(e.to_string()))?;
                    Ok(())
                })
            }))
            .build()?;

        Ok(Self {
            pool,
            connection_string: connection_string.to_owned(),
        })
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Closes the pool then optimizes the database on a fresh connection.
    /// Connections still checked out are dropped as they are returned.
    #[instrument(skip(self))]
    pub fn close(self) -> Result<(), ServerError<Nothing>> {
        self.pool.close();
        close_database(open_connection(&self.connection_string)?)
    }
}
