//! Route handlers for the REST API.

pub mod compare;
pub mod health;
pub mod projects;
pub mod stats;
pub mod submissions;
