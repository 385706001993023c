//! Checkout pricing domain types and logic for Cartwheel.
//!
//! This crate prices a shopping cart at checkout:
//!
//! - **Cart**: line items, quantities, customer tier, subtotal
//! - **Shipping**: zone classification and per-method cost calculation
//! - **Checkout**: the engine combining subtotal, shipping, and tier discount
//! - **Validation**: the address gate consumers run before pricing
//!
//! # Example
//!
//! ```rust,ignore
//! use cartwheel_pricing::prelude::*;
//!
//! // Build a cart
//! let mut cart = Cart::new(Currency::USD);
//! cart.add_item(
//!     ProductId::new("prod-1"),
//!     "Rust Programming Book",
//!     1,
//!     Money::new(4999, Currency::USD),
//! )?;
//! cart.shipping_method = ShippingMethod::Expedited;
//! cart.shipping_address = Some(Address::new("USA", "Boston", "1 Main St"));
//!
//! // Price it against a warehouse origin
//! let origin = Address::new("USA", "New York City", "1 Warehouse Way");
//! let engine = CheckoutEngine::new(ZoneShippingCalculator::new(origin), FieldProjection);
//! let summary = engine.calculate_totals(&cart);
//! println!("Total: {}", summary.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod checkout;
pub mod validation;

pub use error::PricingError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::PricingError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        Cart, CartView, CartViewMapper, CustomerTier, FieldProjection, LineItem, LineItemView,
        MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{
        Address, CheckoutEngine, CheckoutSummary, ShippingCalculator, ShippingMethod,
        ShippingZone, ZoneShippingCalculator,
    };

    // Validation
    pub use crate::validation::AddressValidator;
}
