//! Validate command.

use anyhow::{bail, Result};
use cartwheel_pricing::prelude::*;

use super::ValidateArgs;
use crate::cart_file::read_cart;
use crate::context::Context;

/// Run the validate command.
pub fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let cart = read_cart(&args.cart, ctx)?;

    let validator = AddressValidator::new();
    let valid = validator.is_valid(cart.shipping_address.as_ref());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "cart_id": cart.id.as_str(),
            "valid": valid,
        }));
    } else {
        let shown = cart
            .shipping_address
            .as_ref()
            .map(|a| a.one_line())
            .unwrap_or_else(|| "(none)".to_string());
        ctx.output.kv("Address", &shown);
    }

    if !valid {
        bail!("Shipping address is missing or incomplete");
    }

    ctx.output.success("Shipping address is valid");

    Ok(())
}
