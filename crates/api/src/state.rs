use std::sync::Arc;

use storefront_db::Database;

use crate::auth::Authorizer;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the database handle holds only connect options and the
/// rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Store file handle. Handlers call `db.connect()` once per request.
    pub db: Database,
    pub config: Arc<ServerConfig>,
    /// Decides whether a request may use the admin routes.
    pub authorizer: Arc<dyn Authorizer>,
}
