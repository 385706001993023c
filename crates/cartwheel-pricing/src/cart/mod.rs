//! Shopping cart module.
//!
//! Contains types for the cart, line items, customer tiers, and transport views.

mod cart;
mod tier;
mod view;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use tier::CustomerTier;
pub use view::{CartView, CartViewMapper, FieldProjection, LineItemView};
