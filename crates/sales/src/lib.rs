//! Sales domain module: customer orders and completed sales.
//!
//! Orders aggregate priced lines; sales record the settled amount and can
//! print a receipt.

pub mod order;
pub mod sale;

pub use order::{CustomerOrder, CustomerOrderId, OrderLine, OrderLineId};
pub use sale::{Sale, SaleId};
