//! SeaORM entities.

pub mod job;
pub mod user;
