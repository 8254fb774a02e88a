use std::sync::Arc;

use stockroom_core::Entity;
use stockroom_products::Product;

stockroom_core::numeric_id! {
    /// Supplier identifier.
    pub struct SupplierId;
}

/// A supplier and the products it provides.
#[derive(Debug, Clone)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    provided_products: Vec<Arc<Product>>,
}

impl Supplier {
    pub fn new(id: SupplierId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            provided_products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a product. No duplicate check: adding the same product twice
    /// lists it twice.
    pub fn add_product(&mut self, product: Arc<Product>) {
        tracing::debug!(
            supplier_id = %self.id,
            product_id = %product.id(),
            "supplier product added"
        );
        self.provided_products.push(product);
    }

    /// Provided products in insertion order.
    pub fn provided_products(&self) -> &[Arc<Product>] {
        &self.provided_products
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Supplier(id={}, name={})", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Money;
    use stockroom_products::{Category, CategoryId, ProductId};

    fn test_category() -> Arc<Category> {
        Arc::new(Category::new(CategoryId::new(1), "Engines"))
    }

    fn test_product(id: u64) -> Arc<Product> {
        Arc::new(Product::new(
            ProductId::new(id),
            format!("Engine {id}"),
            Money::from_major(1000),
            test_category(),
        ))
    }

    #[test]
    fn new_supplier_provides_nothing() {
        let supplier = Supplier::new(SupplierId::new(201), "Motors");
        assert!(supplier.provided_products().is_empty());
        assert_eq!(supplier.to_string(), "Supplier(id=201, name=Motors)");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut supplier = Supplier::new(SupplierId::new(201), "Motors");
        let v6 = test_product(101);

        supplier.add_product(v6.clone());
        supplier.add_product(v6.clone());

        let provided = supplier.provided_products();
        assert_eq!(provided.len(), 2);
        assert!(Arc::ptr_eq(&provided[0], &v6));
        assert!(Arc::ptr_eq(&provided[1], &v6));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: provided products come back in exactly the order added.
            #[test]
            fn insertion_order_is_preserved(picks in prop::collection::vec(0usize..4, 0..20)) {
                let pool: Vec<Arc<Product>> = (1..=4).map(test_product).collect();
                let mut supplier = Supplier::new(SupplierId::new(1), "Motors");

                for &i in &picks {
                    supplier.add_product(pool[i].clone());
                }

                let provided = supplier.provided_products();
                prop_assert_eq!(provided.len(), picks.len());
                for (product, &i) in provided.iter().zip(&picks) {
                    prop_assert!(Arc::ptr_eq(product, &pool[i]));
                }
            }
        }
    }
}
