use stockroom_core::Entity;

stockroom_core::numeric_id! {
    /// Warehouse cell identifier.
    pub struct WarehouseCellId;
}

/// A storage location in the warehouse.
#[derive(Debug, Clone)]
pub struct WarehouseCell {
    id: WarehouseCellId,
    location: String,
    capacity: u32,
}

impl WarehouseCell {
    pub fn new(id: WarehouseCellId, location: impl Into<String>, capacity: u32) -> Self {
        Self {
            id,
            location: location.into(),
            capacity,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}

impl Entity for WarehouseCell {
    type Id = WarehouseCellId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for WarehouseCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "WarehouseCell(id={}, location={}, capacity={})",
            self.id, self.location, self.capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_location_and_capacity() {
        let cell = WarehouseCell::new(WarehouseCellId::new(301), "A1", 100);
        assert_eq!(
            cell.to_string(),
            "WarehouseCell(id=301, location=A1, capacity=100)"
        );
        assert_eq!(cell.capacity(), 100);
    }
}
