//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Every operation takes an explicit database handle; there is no
//!   module-level connection singleton.
//! - Provides clear error types mapped to the HTTP layer by the server crate.

pub mod accommodation_service;
pub mod attendance_service;
pub mod attendee_service;
pub mod errors;
pub mod event_service;
pub mod public_service;
pub mod stats_service;
#[cfg(test)]
pub mod test_support;
