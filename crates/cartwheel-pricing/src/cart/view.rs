//! Transport views of the cart.

use crate::cart::{Cart, LineItem};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat cart representation for responses and display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartView {
    /// Cart identifier.
    pub id: String,
    /// Owning customer, if known.
    pub customer_id: Option<String>,
    /// Customer tier name.
    pub customer_tier: String,
    /// Selected delivery method name.
    pub shipping_method: String,
    /// Destination as a single line, if present.
    pub shipping_address: Option<String>,
    /// Items in the cart.
    pub items: Vec<LineItemView>,
}

/// Flat line item representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemView {
    /// Product identifier.
    pub product_id: String,
    /// Product name.
    pub product_name: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
    /// Total for the line.
    pub line_total: Money,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            line_total: item.line_total(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            customer_id: cart.customer_id.as_ref().map(|c| c.to_string()),
            customer_tier: cart.customer_tier.as_str().to_string(),
            shipping_method: cart.shipping_method.as_str().to_string(),
            shipping_address: cart.shipping_address.as_ref().map(|a| a.one_line()),
            items: cart.items.iter().map(LineItemView::from).collect(),
        }
    }
}

/// Maps a cart into its transport view.
pub trait CartViewMapper {
    /// Produce the view for a cart.
    fn map(&self, cart: &Cart) -> CartView;
}

/// Field-by-field mapper backed by the `From` conversions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldProjection;

impl CartViewMapper for FieldProjection {
    fn map(&self, cart: &Cart) -> CartView {
        CartView::from(cart)
    }
}
