// Library interface for pitwall
// This allows integration tests to access internal modules

pub mod errors;
pub mod report;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use errors::PitwallError;
pub use session::{LAP_COUNT, MAX_SESSIONS, Session, SessionStore, VehicleCategory};
