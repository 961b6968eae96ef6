pub mod errors;

pub use errors::{ConciergeError, ConfigError};
