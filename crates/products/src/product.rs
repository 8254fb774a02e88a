use std::sync::Arc;

use stockroom_core::{Entity, Money};

use crate::Category;

stockroom_core::numeric_id! {
    /// Product identifier.
    pub struct ProductId;
}

/// A catalog product.
///
/// The category is shared with every other product filed under it. Price is
/// expected to be non-negative but is not checked.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    category: Arc<Category>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: Arc<Category>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &Arc<Category> {
        &self.category
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product(id={}, name={}, price={}, category={})",
            self.id,
            self.name,
            self.price,
            self.category.name()
        )
    }
}
