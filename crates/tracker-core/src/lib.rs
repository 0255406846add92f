//! # Tracker Core
//!
//! The domain layer of the job tracker.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, validation rules, ports and the auth/job services built on them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::{DomainError, FieldError, RepoError, ValidationErrors};
pub use services::{AuthService, JobService};
