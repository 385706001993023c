//! Shipping zones, methods, and cost calculation.

use crate::cart::{Cart, CustomerTier};
use crate::checkout::Address;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Delivery speed chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShippingMethod {
    #[default]
    Standard,
    Expedited,
    Priority,
    Express,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Expedited => "expedited",
            ShippingMethod::Priority => "priority",
            ShippingMethod::Express => "express",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard",
            ShippingMethod::Expedited => "Expedited",
            ShippingMethod::Priority => "Priority",
            ShippingMethod::Express => "Express",
        }
    }

    /// Cost multiplier applied on top of the zone base rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            ShippingMethod::Standard => 1.0,
            ShippingMethod::Expedited => 1.2,
            ShippingMethod::Priority => 2.0,
            ShippingMethod::Express => 2.5,
        }
    }
}

/// Geographic zone of a destination relative to the warehouse origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingZone {
    SameCity,
    SameCountry,
    International,
}

impl ShippingZone {
    /// Classify a destination against the origin address.
    ///
    /// Country is compared first, then city. Fields are compared as exact
    /// strings; empty or misspelled fields simply fail to match.
    pub fn classify(origin: &Address, destination: &Address) -> Self {
        if origin.country != destination.country {
            return ShippingZone::International;
        }
        if origin.city != destination.city {
            return ShippingZone::SameCountry;
        }
        ShippingZone::SameCity
    }

    /// Base shipping rate per unit, in cents.
    pub fn unit_rate_cents(&self) -> i64 {
        match self {
            ShippingZone::SameCity => 100,
            ShippingZone::SameCountry => 200,
            ShippingZone::International => 1500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingZone::SameCity => "same_city",
            ShippingZone::SameCountry => "same_country",
            ShippingZone::International => "international",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingZone::SameCity => "Same City",
            ShippingZone::SameCountry => "Same Country",
            ShippingZone::International => "International",
        }
    }
}

/// Strategy for pricing shipment of a cart.
pub trait ShippingCalculator {
    /// Cost to ship the full cart, in the cart's currency.
    fn calculate_shipping_cost(&self, cart: &Cart) -> Money;
}

/// Zone-based calculator anchored at a warehouse origin.
#[derive(Debug, Clone)]
pub struct ZoneShippingCalculator {
    origin: Address,
}

impl ZoneShippingCalculator {
    /// Create a calculator shipping from the given origin.
    pub fn new(origin: Address) -> Self {
        Self { origin }
    }

    fn zone_for(&self, destination: Option<&Address>) -> ShippingZone {
        match destination {
            Some(dest) => ShippingZone::classify(&self.origin, dest),
            // No destination fields to match, so the widest zone applies
            None => ShippingZone::International,
        }
    }
}

impl ShippingCalculator for ZoneShippingCalculator {
    fn calculate_shipping_cost(&self, cart: &Cart) -> Money {
        let zone = self.zone_for(cart.shipping_address.as_ref());
        let units = cart.item_count();
        let base = Money::new(zone.unit_rate_cents() * units, cart.currency);

        // Premium carts ship at the base rate, except Express which is
        // always billed in full
        let multiplier = match (cart.customer_tier, cart.shipping_method) {
            (CustomerTier::Premium, ShippingMethod::Express) => {
                ShippingMethod::Express.multiplier()
            }
            (CustomerTier::Premium, _) => 1.0,
            (CustomerTier::Standard, method) => method.multiplier(),
        };

        let cost = base.multiply_decimal(multiplier);
        tracing::debug!(
            zone = zone.as_str(),
            units,
            multiplier,
            cost_cents = cost.amount_cents,
            "Calculated shipping cost"
        );
        cost
    }
}
