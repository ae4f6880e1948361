//! Authentication module
//!
//! Basic authentication against SFG and PEM endpoints.
//!
//! Passwords live in [`Secret`] buffers that are zeroed when dropped, and
//! the [`Authenticator`] only presents them to the host they were issued for.

mod authenticator;
mod types;

pub use authenticator::{host_matches, Authenticator};
pub use types::{EnvironmentCredentials, Secret};
