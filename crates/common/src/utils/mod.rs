pub mod logging;

pub use logging::{init_logging_default, init_logging_json};
