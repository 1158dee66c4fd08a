use serde::{Deserialize, Serialize};

/// Warehouse reference.
///
/// Identity is the name alone. `region` drives regional reorder policy
/// lookups; `distance` is a descriptive attribute and, being an `f64`, must
/// stay out of equality and hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: String,
    pub region: String,
    pub distance: f64, // e.g. km from the distribution hub; unused by reorder logic
}

impl Warehouse {
    pub fn new(name: impl Into<String>, region: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            distance,
        }
    }
}

impl PartialEq for Warehouse {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Warehouse {}

impl core::hash::Hash for Warehouse {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl core::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
