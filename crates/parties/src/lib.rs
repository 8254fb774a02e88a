//! Parties domain module (customers and suppliers).
//!
//! Plain records for the people and companies the warehouse trades with.

pub mod address;
pub mod customer;
pub mod supplier;

pub use address::Address;
pub use customer::{Customer, CustomerId};
pub use supplier::{Supplier, SupplierId};
