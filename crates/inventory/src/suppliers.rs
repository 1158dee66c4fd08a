//! Product → supplier assignment.

use std::collections::HashMap;

use restock_catalog::{Product, Supplier};

/// At most one supplier per product; re-assigning overwrites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplierDirectory {
    assignments: HashMap<Product, Supplier>,
}

impl SupplierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the supplier for a product. No cross-table
    /// validation: assigning for a product with no stock or policy is
    /// allowed.
    pub fn assign(&mut self, product: Product, supplier: Supplier) {
        self.assignments.insert(product, supplier);
    }

    pub fn assigned(&self, product: &Product) -> Option<&Supplier> {
        self.assignments.get(product)
    }
}
