use serde::{Deserialize, Serialize};

/// Supplier reference: identity by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
}

impl Supplier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl core::fmt::Display for Supplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_name() {
        assert_eq!(Supplier::new("Supplier 1"), Supplier::new("Supplier 1"));
        assert_ne!(Supplier::new("Supplier 1"), Supplier::new("Supplier 2"));
    }
}
