//! Customer pricing tiers.

use serde::{Deserialize, Serialize};

/// Pricing tier of the customer owning a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CustomerTier {
    #[default]
    Standard,
    Premium,
}

impl CustomerTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerTier::Standard => "standard",
            CustomerTier::Premium => "premium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerTier::Standard => "Standard",
            CustomerTier::Premium => "Premium",
        }
    }

    /// Discount percentage applied to the order total (goods plus shipping).
    pub fn discount_percent(&self) -> f64 {
        match self {
            CustomerTier::Standard => 0.0,
            CustomerTier::Premium => 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        assert_eq!(CustomerTier::Standard.discount_percent(), 0.0);
        assert_eq!(CustomerTier::Premium.discount_percent(), 10.0);
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(CustomerTier::Premium.as_str(), "premium");
        assert_eq!(CustomerTier::Premium.display_name(), "Premium");
    }

    #[test]
    fn test_default_tier() {
        assert_eq!(CustomerTier::default(), CustomerTier::Standard);
    }
}
