//! Checkout totals engine.

use crate::cart::{Cart, CartView, CartViewMapper};
use crate::checkout::ShippingCalculator;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Priced checkout result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Transport view of the priced cart.
    pub cart: CartView,
    /// Shipping cost for the selected method.
    pub shipping_cost: Money,
    /// Order discount percentage (0-100).
    pub discount_rate: f64,
    /// Final total after discount.
    pub total: Money,
}

/// Computes checkout totals from a cart.
///
/// The shipping calculator and the cart mapper are injected at construction;
/// any implementation of those traits can stand in.
#[derive(Debug, Clone)]
pub struct CheckoutEngine<S, M> {
    shipping: S,
    mapper: M,
}

impl<S: ShippingCalculator, M: CartViewMapper> CheckoutEngine<S, M> {
    /// Create an engine from its collaborators.
    pub fn new(shipping: S, mapper: M) -> Self {
        Self { shipping, mapper }
    }

    /// Price a cart: subtotal, shipping, tier discount, final total.
    pub fn calculate_totals(&self, cart: &Cart) -> CheckoutSummary {
        let subtotal = cart.subtotal();
        let shipping_cost = self.shipping.calculate_shipping_cost(cart);
        let discount_rate = cart.customer_tier.discount_percent();

        // The discount applies to goods and shipping together
        let combined = subtotal + shipping_cost;
        let total = combined.multiply_decimal(1.0 - discount_rate / 100.0);

        tracing::debug!(
            cart_id = cart.id.as_str(),
            subtotal_cents = subtotal.amount_cents,
            shipping_cents = shipping_cost.amount_cents,
            discount_rate,
            total_cents = total.amount_cents,
            "Calculated checkout totals"
        );

        CheckoutSummary {
            cart: self.mapper.map(cart),
            shipping_cost,
            discount_rate,
            total,
        }
    }
}
