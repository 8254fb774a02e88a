//! `stockroom-auth` — staff and customer accounts with their fixed roles.
//!
//! This crate is intentionally decoupled from any login flow or storage.

pub mod roles;
pub mod user;

pub use roles::UserRole;
pub use user::{User, UserId};
