//! Use-case services composed from the ports.

mod auth;
mod jobs;

#[cfg(test)]
pub(crate) mod fakes;

pub use auth::{AuthService, AuthenticatedUser};
pub use jobs::JobService;
