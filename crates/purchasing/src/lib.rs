//! `restock-purchasing` — order placement collaborator.
//!
//! Reorder evaluation only *emits* directives; actually placing orders is a
//! side effect the caller performs afterwards through an injected
//! [`OrderPlacer`]. The monitors themselves never call into this crate.

pub mod placer;

pub use placer::{LoggingOrderPlacer, OrderPlacer, dispatch, dispatch_regional};
