//! Reorder monitor, global policy variant.

use core::fmt;

use restock_catalog::{Product, Supplier, Warehouse};
use serde::Serialize;
use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::ledger::StockLedger;
use crate::policy::GlobalPolicy;
use crate::suppliers::SupplierDirectory;

/// Instruction to reorder stock for one (product, warehouse) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderDirective {
    pub quantity: i64,
    pub product: String,
    pub supplier: String,
    pub warehouse: String,
}

impl fmt::Display for ReorderDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reordering {} units of {} from supplier {} for warehouse {}",
            self.quantity, self.product, self.supplier, self.warehouse
        )
    }
}

/// Reorder monitor with one threshold per product.
///
/// Owns the stock ledger, the global policy and the supplier directory;
/// [`StockMonitor::evaluate`] is a pure read over the three tables.
#[derive(Debug, Clone, Default)]
pub struct StockMonitor {
    ledger: StockLedger,
    policy: GlobalPolicy,
    suppliers: SupplierDirectory,
}

impl StockMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a non-negative stock delta; see [`StockLedger::record`].
    pub fn record_stock(
        &mut self,
        product: &Product,
        warehouse: &Warehouse,
        delta: i64,
    ) -> InventoryResult<i64> {
        self.ledger.record(product, warehouse, delta)
    }

    pub fn set_threshold(&mut self, product: Product, threshold: i64) {
        self.policy.set_threshold(product, threshold);
    }

    pub fn set_reorder_quantity(&mut self, product: Product, quantity: i64) {
        self.policy.set_reorder_quantity(product, quantity);
    }

    pub fn assign_supplier(&mut self, product: Product, supplier: Supplier) {
        self.suppliers.assign(product, supplier);
    }

    /// Reset hook: drop all stock rows for a product (absence, not zero).
    pub fn remove_product(&mut self, product: &Product) -> bool {
        self.ledger.remove_product(product)
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Scan every stock row in first-recorded order and collect a directive
    /// for each row whose quantity is below its product's threshold.
    ///
    /// All-or-nothing: a triggered row whose product has no assigned supplier
    /// fails the whole call with [`InventoryError::MissingSupplier`], and no
    /// directives are returned.
    pub fn evaluate(&self) -> InventoryResult<Vec<ReorderDirective>> {
        let mut directives = Vec::new();

        for (product, warehouse, quantity) in self.ledger.iter() {
            let threshold = self.policy.threshold(product);
            if quantity >= threshold {
                continue;
            }

            let supplier = self
                .suppliers
                .assigned(product)
                .ok_or_else(|| InventoryError::missing_supplier(&product.name))?;

            debug!(
                product = %product,
                warehouse = %warehouse,
                quantity,
                threshold,
                "reorder triggered"
            );

            directives.push(ReorderDirective {
                quantity: self.policy.reorder_quantity(product),
                product: product.name.clone(),
                supplier: supplier.name.clone(),
                warehouse: warehouse.name.clone(),
            });
        }

        Ok(directives)
    }

    /// Directives rendered one per line, joined with a single newline; an
    /// empty result renders as the empty string.
    pub fn report(&self) -> InventoryResult<String> {
        let directives = self.evaluate()?;
        Ok(directives
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(n: u32) -> Product {
        Product::new(format!("P{n:03}"), format!("Product {n}"))
    }

    fn warehouse(n: u32) -> Warehouse {
        Warehouse::new(format!("Warehouse {n}"), format!("Region {n}"), n as f64)
    }

    fn configured_monitor() -> (StockMonitor, Product, Warehouse) {
        let mut monitor = StockMonitor::new();
        let p = product(1);
        let w = warehouse(1);
        monitor.set_threshold(p.clone(), 20);
        monitor.set_reorder_quantity(p.clone(), 50);
        monitor.assign_supplier(p.clone(), Supplier::new("Supplier 1"));
        (monitor, p, w)
    }

    #[test]
    fn stock_below_threshold_emits_a_directive() {
        let (mut monitor, p, w) = configured_monitor();
        monitor.record_stock(&p, &w, 15).unwrap();
        assert_eq!(monitor.ledger().quantity(&p, &w), Some(15));

        let directives = monitor.evaluate().unwrap();
        assert_eq!(
            directives,
            vec![ReorderDirective {
                quantity: 50,
                product: "Product 1".to_string(),
                supplier: "Supplier 1".to_string(),
                warehouse: "Warehouse 1".to_string(),
            }]
        );
    }

    #[test]
    fn stock_at_or_above_threshold_is_quiet() {
        let (mut monitor, p, w) = configured_monitor();
        monitor.record_stock(&p, &w, 20).unwrap();
        assert!(monitor.evaluate().unwrap().is_empty());
    }

    #[test]
    fn unset_threshold_never_triggers() {
        let mut monitor = StockMonitor::new();
        let p = product(1);
        monitor.set_reorder_quantity(p.clone(), 50);
        monitor.assign_supplier(p.clone(), Supplier::new("Supplier 1"));
        monitor.record_stock(&p, &warehouse(1), 0).unwrap();

        assert!(monitor.evaluate().unwrap().is_empty());
    }

    #[test]
    fn zero_reorder_quantity_still_produces_a_directive() {
        let (mut monitor, p, w) = configured_monitor();
        monitor.set_reorder_quantity(p.clone(), 0);
        monitor.record_stock(&p, &w, 15).unwrap();

        let directives = monitor.evaluate().unwrap();
        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].quantity, 0);
    }

    #[test]
    fn missing_supplier_aborts_the_whole_evaluation() {
        let (mut monitor, p1, w1) = configured_monitor();
        monitor.record_stock(&p1, &w1, 15).unwrap();

        // Second product triggers too, but has no supplier assigned.
        let p2 = product(2);
        monitor.set_threshold(p2.clone(), 10);
        monitor.record_stock(&p2, &warehouse(2), 5).unwrap();

        let err = monitor.evaluate().unwrap_err();
        assert_eq!(err, InventoryError::MissingSupplier("Product 2".to_string()));
    }

    #[test]
    fn removed_product_yields_no_directive() {
        let (mut monitor, p, w) = configured_monitor();
        monitor.record_stock(&p, &w, 15).unwrap();
        monitor.remove_product(&p);

        assert!(monitor.evaluate().unwrap().is_empty());
        assert_eq!(monitor.report().unwrap(), "");
    }

    #[test]
    fn directives_serialize_for_downstream_consumers() {
        let (mut monitor, p, w) = configured_monitor();
        monitor.record_stock(&p, &w, 15).unwrap();

        let json = serde_json::to_value(monitor.evaluate().unwrap()).unwrap();
        assert_eq!(json[0]["quantity"], 50);
        assert_eq!(json[0]["warehouse"], "Warehouse 1");
    }

    #[test]
    fn directive_text_matches_the_contract() {
        let (mut monitor, p, w) = configured_monitor();
        monitor.record_stock(&p, &w, 15).unwrap();

        assert_eq!(
            monitor.report().unwrap(),
            "Reordering 50 units of Product 1 from supplier Supplier 1 for warehouse Warehouse 1"
        );
    }
}
