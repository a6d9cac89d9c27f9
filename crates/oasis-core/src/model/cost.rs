// ── Cost tier ──

use serde::{Deserialize, Serialize};

/// Price tier of a resource, ordered from cheapest to most expensive.
///
/// The wire labels (`"Free"`, `"$"`, `"$$"`, `"$$$"`) are preserved
/// exactly through serde; the derived `Ord` follows tier order, which
/// cost-ceiling filtering relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cost {
    Free,
    #[serde(rename = "$")]
    Low,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    High,
}

impl Cost {
    /// The display/wire label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Low => "$",
            Self::Moderate => "$$",
            Self::High => "$$$",
        }
    }

    /// Parse a wire label. Unknown labels yield `None` rather than an
    /// error -- a resource with a malformed cost simply has no tier.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Free" => Some(Self::Free),
            "$" => Some(Self::Low),
            "$$" => Some(Self::Moderate),
            "$$$" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_order_matches_price_order() {
        assert!(Cost::Free < Cost::Low);
        assert!(Cost::Low < Cost::Moderate);
        assert!(Cost::Moderate < Cost::High);
    }

    #[test]
    fn labels_round_trip() {
        for cost in [Cost::Free, Cost::Low, Cost::Moderate, Cost::High] {
            assert_eq!(Cost::from_label(cost.label()), Some(cost));
        }
        assert_eq!(Cost::from_label("$$$$"), None);
    }
}
