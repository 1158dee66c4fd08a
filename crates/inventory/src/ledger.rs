//! Insertion-ordered stock ledger.

use restock_catalog::{Product, Warehouse};
use serde::Serialize;
use tracing::debug;

use crate::error::{InventoryError, InventoryResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
struct WarehouseStock {
    warehouse: Warehouse,
    quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ProductStock {
    product: Product,
    rows: Vec<WarehouseStock>,
}

/// Two-level stock table: product → warehouse → quantity.
///
/// Entries keep the order in which products (and warehouses within a
/// product) were first recorded; [`StockLedger::iter`] and therefore
/// evaluation follow that order. Quantities never go negative: a negative
/// delta is rejected before any mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockLedger {
    entries: Vec<ProductStock>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a non-negative stock delta to (product, warehouse).
    ///
    /// The first call for a key initializes the quantity at 0 before the
    /// delta is applied; later calls accumulate. Returns the updated
    /// quantity.
    pub fn record(
        &mut self,
        product: &Product,
        warehouse: &Warehouse,
        delta: i64,
    ) -> InventoryResult<i64> {
        if delta < 0 {
            return Err(InventoryError::invalid_argument(
                "stock delta cannot be negative",
            ));
        }

        let idx = match self.entries.iter().position(|e| &e.product == product) {
            Some(idx) => idx,
            None => {
                self.entries.push(ProductStock {
                    product: product.clone(),
                    rows: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];

        let row_idx = match entry.rows.iter().position(|r| &r.warehouse == warehouse) {
            Some(row_idx) => row_idx,
            None => {
                entry.rows.push(WarehouseStock {
                    warehouse: warehouse.clone(),
                    quantity: 0,
                });
                entry.rows.len() - 1
            }
        };
        let row = &mut entry.rows[row_idx];

        row.quantity += delta;
        debug!(
            product = %product,
            warehouse = %warehouse,
            delta,
            quantity = row.quantity,
            "stock recorded"
        );
        Ok(row.quantity)
    }

    /// Current quantity for (product, warehouse), if any stock was ever
    /// recorded for that pair.
    pub fn quantity(&self, product: &Product, warehouse: &Warehouse) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| &e.product == product)?
            .rows
            .iter()
            .find(|r| &r.warehouse == warehouse)
            .map(|r| r.quantity)
    }

    /// Number of products with at least one ledger entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every stock row for a product.
    ///
    /// Owner escape hatch for reset flows, not part of the evaluation
    /// contract: a removed product simply stops appearing in evaluation
    /// (absence, not a zero-stock signal).
    pub fn remove_product(&mut self, product: &Product) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.product != product);
        before != self.entries.len()
    }

    /// Flattened (product, warehouse, quantity) triples in insertion order
    /// of products, then of warehouses within a product.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, &Warehouse, i64)> {
        self.entries.iter().flat_map(|e| {
            e.rows
                .iter()
                .map(move |r| (&e.product, &r.warehouse, r.quantity))
        })
    }
}
