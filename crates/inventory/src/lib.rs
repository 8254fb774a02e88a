//! Inventory domain module.
//!
//! Warehouse storage cells and the stock records held in them, implemented as
//! plain domain logic (no IO, no storage).

pub mod cell;
pub mod record;

pub use cell::{WarehouseCell, WarehouseCellId};
pub use record::{InventoryRecord, InventoryRecordId};
