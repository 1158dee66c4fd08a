//! `restock-inventory` — stock bookkeeping and reorder evaluation.
//!
//! Deterministic, synchronous domain logic (no IO): an insertion-ordered
//! stock ledger, the two reorder policy stores, the supplier directory, and
//! the monitors that scan stock against thresholds and emit reorder
//! directives.
//!
//! A deployment uses exactly one monitor type: [`StockMonitor`] (per-product
//! thresholds) or [`RegionalStockMonitor`] (per-(product, region) thresholds
//! plus lead times). Their unset-threshold defaults are deliberately
//! opposite; see [`policy`].

pub mod error;
pub mod ledger;
pub mod monitor;
pub mod policy;
pub mod regional;
pub mod suppliers;

pub use error::{InventoryError, InventoryResult};
pub use ledger::StockLedger;
pub use monitor::{ReorderDirective, StockMonitor};
pub use policy::{GlobalPolicy, RegionalPolicy};
pub use regional::{RegionalReorderDirective, RegionalStockMonitor};
pub use suppliers::SupplierDirectory;
