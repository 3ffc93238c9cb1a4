//! Session layer for Roshambo.
//!
//! A [`Session`] ties the lifetime of one referee connection to one value:
//! it opens a port through a [`Transport`](roshambo_transport::Transport),
//! exchanges delimiter-framed bytes over the resulting link, and closes it
//! exactly once. Frame assembly lives here; what the bytes mean is the
//! protocol crate's business.

mod error;
mod session;

pub use error::SessionError;
pub use session::{Session, SessionConfig, SessionState};
