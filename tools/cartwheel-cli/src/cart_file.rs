//! Cart file loading.

use std::fs;
use std::io::Read;

use anyhow::{Context as _, Result};
use cartwheel_pricing::prelude::*;

use crate::context::Context;

/// Read a cart from a JSON file, or from stdin when `path` is `-`.
pub fn read_cart(path: &str, ctx: &Context) -> Result<Cart> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read cart from stdin")?;
        buf
    } else {
        let resolved = ctx.resolve_path(path);
        fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read cart file: {}", resolved.display()))?
    };

    parse_cart(&content)
}

fn parse_cart(content: &str) -> Result<Cart> {
    serde_json::from_str(content).context("Failed to parse cart JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_cart() {
        let json = r#"{
            "id": "cart-100",
            "customer_id": "cust-7",
            "customer_tier": "Premium",
            "shipping_address": {
                "country": "USA",
                "city": "Chicago",
                "street": "12 Lake Shore Dr"
            },
            "shipping_method": "Expedited",
            "currency": "USD",
            "items": [
                {
                    "product_id": "prod-1",
                    "product_name": "Coffee Beans",
                    "quantity": 2,
                    "unit_price": { "amount_cents": 1250, "currency": "USD" }
                }
            ]
        }"#;

        let cart = parse_cart(json).unwrap();
        assert_eq!(cart.id.as_str(), "cart-100");
        assert_eq!(cart.customer_tier, CustomerTier::Premium);
        assert_eq!(cart.shipping_method, ShippingMethod::Expedited);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.subtotal().amount_cents, 2500);
        assert_eq!(cart.shipping_address.as_ref().unwrap().city, "Chicago");
    }

    #[test]
    fn test_parse_minimal_cart_defaults() {
        let json = r#"{
            "id": "cart-1",
            "items": []
        }"#;

        let cart = parse_cart(json).unwrap();
        assert_eq!(cart.customer_tier, CustomerTier::Standard);
        assert_eq!(cart.shipping_method, ShippingMethod::Standard);
        assert!(cart.shipping_address.is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_parse_cart_with_null_address_fields() {
        let json = r#"{
            "id": "cart-2",
            "shipping_address": { "country": null, "city": "Chicago" },
            "items": []
        }"#;

        let cart = parse_cart(json).unwrap();
        let address = cart.shipping_address.as_ref().unwrap();
        assert_eq!(address.country, "");
        assert_eq!(address.street, "");
        assert!(!AddressValidator::new().is_valid(cart.shipping_address.as_ref()));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_cart("not a cart").is_err());
    }
}
