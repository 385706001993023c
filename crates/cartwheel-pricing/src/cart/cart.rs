//! Cart and line item types.

use crate::cart::CustomerTier;
use crate::checkout::{Address, ShippingMethod};
use crate::error::PricingError;
use crate::ids::{CartId, CustomerId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Owning customer, if known.
    pub customer_id: Option<CustomerId>,
    /// Customer pricing tier.
    #[serde(default)]
    pub customer_tier: CustomerTier,
    /// Destination address, if one has been entered.
    pub shipping_address: Option<Address>,
    /// Selected delivery method.
    #[serde(default)]
    pub shipping_method: ShippingMethod,
    /// Cart currency.
    #[serde(default)]
    pub currency: Currency,
    /// Items in the cart.
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            id: CartId::generate(),
            customer_id: None,
            customer_tier: CustomerTier::Standard,
            shipping_address: None,
            shipping_method: ShippingMethod::Standard,
            currency,
            items: Vec::new(),
        }
    }

    /// Create a cart owned by a customer.
    pub fn for_customer(customer_id: CustomerId, tier: CustomerTier, currency: Currency) -> Self {
        let mut cart = Self::new(currency);
        cart.customer_id = Some(customer_id);
        cart.customer_tier = tier;
        cart
    }

    /// Add an item to the cart.
    ///
    /// Quantities merge when the product is already present.
    /// Returns an error if:
    /// - Quantity is not positive
    /// - Unit price is negative or in a different currency
    /// - Adding would exceed MAX_QUANTITY_PER_ITEM
    /// - Arithmetic overflow would occur
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<(), PricingError> {
        if quantity <= 0 {
            return Err(PricingError::InvalidQuantity(quantity));
        }
        if unit_price.is_negative() {
            return Err(PricingError::NegativeUnitPrice(unit_price));
        }
        if unit_price.currency != self.currency {
            return Err(PricingError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: unit_price.currency.code().to_string(),
            });
        }

        // Merge into an existing line when the product is already in the cart
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(PricingError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(PricingError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            // line_total must stay representable
            existing
                .unit_price
                .try_multiply(new_quantity)
                .ok_or(PricingError::Overflow)?;
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(PricingError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem::new(product_id, product_name, quantity, unit_price)?;
        self.items.push(item);
        Ok(())
    }

    /// Update the quantity for a product.
    ///
    /// If quantity is <= 0, removes the item.
    /// Returns error if quantity exceeds limit or would cause overflow.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, PricingError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(PricingError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.unit_price
                .try_multiply(quantity)
                .ok_or(PricingError::Overflow)?;
            item.quantity = quantity;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by product ID.
    pub fn get_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Sum of line totals before shipping and discounts.
    ///
    /// # Panics
    /// Panics if the sum overflows; `check` rejects such carts first.
    pub fn subtotal(&self) -> Money {
        Money::sum(self.items.iter().map(|i| i.line_total()), self.currency)
    }

    /// Verify cross-field consistency.
    ///
    /// `add_item` enforces the per-line rules incrementally; carts built
    /// elsewhere (e.g. parsed from JSON) should be checked once before
    /// pricing.
    pub fn check(&self) -> Result<(), PricingError> {
        for item in &self.items {
            if item.quantity <= 0 {
                return Err(PricingError::InvalidQuantity(item.quantity));
            }
            if item.quantity > MAX_QUANTITY_PER_ITEM {
                return Err(PricingError::QuantityExceedsLimit(
                    item.quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            if item.unit_price.is_negative() {
                return Err(PricingError::NegativeUnitPrice(item.unit_price));
            }
            if item.unit_price.currency != self.currency {
                return Err(PricingError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: item.unit_price.currency.code().to_string(),
                });
            }
            if item.unit_price.try_multiply(item.quantity).is_none() {
                return Err(PricingError::Overflow);
            }
        }

        // Line totals can be representable one by one while their sum is not
        Money::try_sum(self.items.iter().map(|i| i.line_total()), self.currency)
            .ok_or(PricingError::Overflow)?;

        Ok(())
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Money,
}

impl LineItem {
    /// Create a new line item.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> Result<Self, PricingError> {
        // line_total must stay representable
        unit_price
            .try_multiply(quantity)
            .ok_or(PricingError::Overflow)?;
        Ok(Self {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
        })
    }

    /// Total price for the line (unit_price * quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
