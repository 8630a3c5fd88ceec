//! Shared plumbing for the Tuya connector crates.

mod environment;
mod logging;

pub use environment::TuyaEnvironment;
pub use logging::init_logging;
