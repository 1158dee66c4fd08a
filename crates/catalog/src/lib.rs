//! `restock-catalog` — catalog value objects.
//!
//! Plain domain values consumed by the inventory and purchasing crates:
//! products, warehouses and suppliers. No behavior, no IO; these are
//! immutable references compared by value.

pub mod product;
pub mod supplier;
pub mod warehouse;

pub use product::Product;
pub use supplier::Supplier;
pub use warehouse::Warehouse;
