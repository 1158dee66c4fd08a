use serde::{Deserialize, Serialize};

/// Product reference.
///
/// Identity is the code *and* the display name: two products are the same
/// only when both match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub code: String, // e.g. "P001"
    pub name: String, // e.g. "Product 1"
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
