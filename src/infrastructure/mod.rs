//! Infrastructure layer - Store, hashing and observability implementations

pub mod auth;
pub mod observability;
pub mod user;
