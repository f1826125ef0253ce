pub mod errors;
pub mod gate;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use startup::run;

use sea_orm::DatabaseConnection;

/// Shared state for the whole application. The database handle is injected
/// here and passed down to services; nothing reaches for a global connection.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub admin: gate::AdminCredentials,
}
