use kassa_db::Connection;

use crate::sessions::Sessions;

/// Shared application state, constructed in main and injected
/// into the handlers. No globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Connection,
    pub sessions: Sessions,
}
