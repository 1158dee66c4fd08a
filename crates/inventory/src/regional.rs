//! Reorder monitor, regional policy variant.

use core::fmt;

use restock_catalog::{Product, Supplier, Warehouse};
use serde::Serialize;
use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::ledger::StockLedger;
use crate::policy::RegionalPolicy;
use crate::suppliers::SupplierDirectory;

/// Instruction to reorder stock for one (product, warehouse) pair, carrying
/// the warehouse's region and the product's lead time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalReorderDirective {
    pub quantity: i64,
    pub product: String,
    pub supplier: String,
    pub warehouse: String,
    pub region: String,
    pub lead_time_days: f64,
}

impl fmt::Display for RegionalReorderDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // {:?} keeps the trailing .0 on whole-day lead times ("7.0" rather
        // than Display's "7").
        write!(
            f,
            "Reordering {} units of {} from supplier {} for warehouse {} in region {}. \
             Estimated delivery time: {:?} days.",
            self.quantity,
            self.product,
            self.supplier,
            self.warehouse,
            self.region,
            self.lead_time_days
        )
    }
}

/// Reorder monitor with per-(product, region) thresholds and per-product
/// lead times.
///
/// The region applied to a stock row is its warehouse's `region` string. An
/// unset (product, region) threshold forces a reorder for any existing row,
/// the opposite of [`crate::StockMonitor`]'s unset-threshold behavior.
#[derive(Debug, Clone, Default)]
pub struct RegionalStockMonitor {
    ledger: StockLedger,
    policy: RegionalPolicy,
    suppliers: SupplierDirectory,
}

impl RegionalStockMonitor {
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

    pub fn set_threshold(&mut self, product: Product, region: impl Into<String>, threshold: i64) {
        self.policy.set_threshold(product, region, threshold);
    }

    pub fn set_reorder_quantity(
        &mut self,
        product: Product,
        region: impl Into<String>,
        quantity: i64,
    ) {
        self.policy.set_reorder_quantity(product, region, quantity);
    }

    pub fn set_lead_time(&mut self, product: Product, days: f64) {
        self.policy.set_lead_time(product, days);
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
    /// for each row below its (product, region) threshold; rows with no
    /// configured threshold always trigger.
    ///
    /// All-or-nothing: a triggered row whose product has no assigned supplier
    /// fails the whole call with [`InventoryError::MissingSupplier`], and no
    /// directives are returned.
    pub fn evaluate(&self) -> InventoryResult<Vec<RegionalReorderDirective>> {
        let mut directives = Vec::new();

        for (product, warehouse, quantity) in self.ledger.iter() {
            let region = warehouse.region.as_str();
            let triggered = match self.policy.threshold(product, region) {
                Some(threshold) => quantity < threshold,
                None => true,
            };
            if !triggered {
                continue;
            }

            let supplier = self
                .suppliers
                .assigned(product)
                .ok_or_else(|| InventoryError::missing_supplier(&product.name))?;

            debug!(
                product = %product,
                warehouse = %warehouse,
                region,
                quantity,
                "reorder triggered"
            );

            directives.push(RegionalReorderDirective {
                quantity: self.policy.reorder_quantity(product, region),
                product: product.name.clone(),
                supplier: supplier.name.clone(),
                warehouse: warehouse.name.clone(),
                region: warehouse.region.clone(),
                lead_time_days: self.policy.lead_time_days(product),
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
