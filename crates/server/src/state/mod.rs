use std::sync::Arc;

use axum::extract::FromRef;
use deadpool_sqlite::Pool;

use crate::{cli::Cli, db::Storage};

#[derive(Debug, Clone)]
pub struct AppState {
    pub storage: Storage,
    pub args: Arc<Cli>,
}

impl AppState {
    pub fn new(storage: Storage, args: Cli) -> Self {
        Self {
            storage,
            args: Arc::new(args),
        }
    }
}

impl FromRef<AppState> for Pool {
    fn from_ref(state: &AppState) -> Self {
        // pool uses an Arc internally so clone is cheap
        state.storage.pool().clone()
    }
}

impl FromRef<AppState> for Arc<Cli> {
    fn from_ref(state: &AppState) -> Self {
        state.args.clone()
    }
}
