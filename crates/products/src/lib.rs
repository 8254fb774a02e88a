//! Products domain module (catalog).
//!
//! Categories and the products filed under them, as plain records with no IO.

pub mod category;
pub mod product;

pub use category::{Category, CategoryId};
pub use product::{Product, ProductId};
