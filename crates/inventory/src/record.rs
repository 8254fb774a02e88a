use std::sync::Arc;

use stockroom_core::{DomainError, DomainResult, Entity};
use stockroom_products::Product;

use crate::WarehouseCell;

stockroom_core::numeric_id! {
    /// Inventory record identifier.
    pub struct InventoryRecordId;
}

/// Stock of one product held in one warehouse cell.
///
/// # Invariants
/// - Quantity never goes below zero: `report_defect` refuses to remove more
///   units than are on hand.
#[derive(Debug, Clone)]
pub struct InventoryRecord {
    id: InventoryRecordId,
    product: Arc<Product>,
    cell: Arc<WarehouseCell>,
    quantity: u32,
}

impl InventoryRecord {
    pub fn new(
        id: InventoryRecordId,
        product: Arc<Product>,
        cell: Arc<WarehouseCell>,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            product,
            cell,
            quantity,
        }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn cell(&self) -> &Arc<WarehouseCell> {
        &self.cell
    }

    pub fn available_quantity(&self) -> u32 {
        self.quantity
    }

    /// Write off `qty` defective units.
    ///
    /// Fails with [`DomainError::InsufficientStock`] when `qty` exceeds the
    /// quantity on hand; the record is left unchanged in that case.
    pub fn report_defect(&mut self, qty: u32) -> DomainResult<()> {
        let Some(remaining) = self.quantity.checked_sub(qty) else {
            tracing::warn!(
                record_id = %self.id,
                requested = qty,
                available = self.quantity,
                "defect report rejected"
            );
            return Err(DomainError::insufficient_stock(qty, self.quantity));
        };

        tracing::debug!(
            record_id = %self.id,
            defective = qty,
            remaining,
            "defect reported"
        );
        self.quantity = remaining;
        Ok(())
    }
}

impl Entity for InventoryRecord {
    type Id = InventoryRecordId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "InventoryRecord(id={}, product={}, cell={}, qty={})",
            self.id,
            self.product.name(),
            self.cell.location(),
            self.quantity
        )
    }
}
