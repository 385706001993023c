//! Checkout module.
//!
//! Contains the shipping cost calculator and the totals engine.

mod address;
mod engine;
mod shipping;

pub use address::Address;
pub use engine::{CheckoutEngine, CheckoutSummary};
pub use shipping::{ShippingCalculator, ShippingMethod, ShippingZone, ZoneShippingCalculator};
