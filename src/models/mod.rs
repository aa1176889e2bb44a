pub mod envelope;
pub mod user;

// Re-export commonly used types
pub use envelope::{Envelope, ErrorBody};
pub use user::{NewUser, User, UserId};
