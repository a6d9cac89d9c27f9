// ── Category taxonomy ──

use serde::{Deserialize, Serialize};

/// A top-level resource category with its subcategory labels.
///
/// The taxonomy is backend-owned; the core only reads it to populate
/// filter choices and to validate admin input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub subcategories: Vec<String>,
}

impl Category {
    pub fn has_subcategory(&self, label: &str) -> bool {
        self.subcategories.iter().any(|s| s == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcategory_lookup_is_exact() {
        let cat = Category {
            name: "Legal".into(),
            subcategories: vec!["Visa".into(), "Asylum".into()],
        };
        assert!(cat.has_subcategory("Visa"));
        assert!(!cat.has_subcategory("visa"));
        assert!(!cat.has_subcategory("Housing"));
    }
}
