//! Reorder policy stores.
//!
//! Two alternate designs of the same responsibility; a deployment uses one:
//!
//! - [`GlobalPolicy`] keys thresholds by product alone. An unset threshold is
//!   0, so an unconfigured product never triggers a reorder (stock ≥ 0 is
//!   never below 0).
//! - [`RegionalPolicy`] keys thresholds by (product, region) and adds a
//!   per-product lead time. An unset threshold is effectively infinite, so an
//!   unconfigured (product, region) always triggers once a stock row exists.
//!
//! The opposite unset-threshold defaults are load-bearing; never merge the
//! two designs.

use std::collections::HashMap;

use restock_catalog::Product;

/// Per-product reorder policy (global variant).
#[derive(Debug, Clone, Default)]
pub struct GlobalPolicy {
    thresholds: HashMap<Product, i64>,
    quantities: HashMap<Product, i64>,
}

impl GlobalPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_threshold(&mut self, product: Product, threshold: i64) {
        self.thresholds.insert(product, threshold);
    }

    pub fn set_reorder_quantity(&mut self, product: Product, quantity: i64) {
        self.quantities.insert(product, quantity);
    }

    /// Effective threshold; unset products get 0 and thus never trigger.
    pub fn threshold(&self, product: &Product) -> i64 {
        self.thresholds.get(product).copied().unwrap_or(0)
    }

    /// Effective reorder quantity; unset products get 0. A quantity of 0 is
    /// valid and still produces a directive when triggered.
    pub fn reorder_quantity(&self, product: &Product) -> i64 {
        self.quantities.get(product).copied().unwrap_or(0)
    }
}

/// Per-(product, region) reorder policy with per-product lead times
/// (regional variant).
#[derive(Debug, Clone, Default)]
pub struct RegionalPolicy {
    thresholds: HashMap<Product, HashMap<String, i64>>,
    quantities: HashMap<Product, HashMap<String, i64>>,
    lead_times: HashMap<Product, f64>,
}

impl RegionalPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_threshold(&mut self, product: Product, region: impl Into<String>, threshold: i64) {
        self.thresholds
            .entry(product)
            .or_default()
            .insert(region.into(), threshold);
    }

    pub fn set_reorder_quantity(
        &mut self,
        product: Product,
        region: impl Into<String>,
        quantity: i64,
    ) {
        self.quantities
            .entry(product)
            .or_default()
            .insert(region.into(), quantity);
    }

    pub fn set_lead_time(&mut self, product: Product, days: f64) {
        self.lead_times.insert(product, days);
    }

    /// Configured threshold for (product, region). `None` means unset, which
    /// the regional monitor treats as always-trigger.
    pub fn threshold(&self, product: &Product, region: &str) -> Option<i64> {
        self.thresholds.get(product)?.get(region).copied()
    }

    /// Effective reorder quantity; unset (product, region) pairs get 0.
    pub fn reorder_quantity(&self, product: &Product, region: &str) -> i64 {
        self.quantities
            .get(product)
            .and_then(|by_region| by_region.get(region))
            .copied()
            .unwrap_or(0)
    }

    /// Effective lead time in days; unset products get 0.0.
    pub fn lead_time_days(&self, product: &Product) -> f64 {
        self.lead_times.get(product).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(n: u32) -> Product {
        Product::new(format!("P{n:03}"), format!("Product {n}"))
    }

    #[test]
    fn global_defaults_are_zero() {
        let policy = GlobalPolicy::new();
        let p = product(1);
        assert_eq!(policy.threshold(&p), 0);
        assert_eq!(policy.reorder_quantity(&p), 0);
    }

    #[test]
    fn global_settings_overwrite() {
        let mut policy = GlobalPolicy::new();
        let p = product(1);

        policy.set_threshold(p.clone(), 20);
        policy.set_threshold(p.clone(), 25);
        policy.set_reorder_quantity(p.clone(), 50);

        assert_eq!(policy.threshold(&p), 25);
        assert_eq!(policy.reorder_quantity(&p), 50);
    }

    #[test]
    fn regional_threshold_is_unset_by_default() {
        let policy = RegionalPolicy::new();
        assert_eq!(policy.threshold(&product(1), "Region 1"), None);
    }

    #[test]
    fn regional_lookups_are_keyed_by_region() {
        let mut policy = RegionalPolicy::new();
        let p = product(1);

        policy.set_threshold(p.clone(), "Region 1", 20);
        policy.set_reorder_quantity(p.clone(), "Region 1", 50);

        assert_eq!(policy.threshold(&p, "Region 1"), Some(20));
        assert_eq!(policy.threshold(&p, "Region 2"), None);
        assert_eq!(policy.reorder_quantity(&p, "Region 1"), 50);
        assert_eq!(policy.reorder_quantity(&p, "Region 2"), 0);
    }

    #[test]
    fn lead_time_defaults_to_zero_days() {
        let mut policy = RegionalPolicy::new();
        let p = product(1);

        assert_eq!(policy.lead_time_days(&p), 0.0);
        policy.set_lead_time(p.clone(), 7.5);
        assert_eq!(policy.lead_time_days(&p), 7.5);
    }
}
