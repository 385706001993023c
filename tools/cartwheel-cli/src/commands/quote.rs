//! Quote command.

use anyhow::{bail, Context as _, Result};
use cartwheel_pricing::prelude::*;

use super::QuoteArgs;
use crate::cart_file::read_cart;
use crate::context::Context;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let cart = read_cart(&args.cart, ctx)?;
    cart.check().context("Cart failed structural checks")?;

    ctx.output.debug(&format!(
        "Loaded cart {} with {} line(s), {} unit(s)",
        cart.id,
        cart.unique_item_count(),
        cart.item_count()
    ));

    if cart.is_empty() {
        ctx.output.warn("Cart is empty; only shipping will be charged");
    }

    let validator = AddressValidator::new();
    if !validator.is_valid(cart.shipping_address.as_ref()) {
        bail!("Shipping address is missing or incomplete; cannot price the cart");
    }

    let origin = ctx.config.origin.address();
    if !validator.is_valid(Some(&origin)) {
        bail!("Warehouse origin is not configured; run `cartwheel config init`");
    }

    let engine = CheckoutEngine::new(ZoneShippingCalculator::new(origin), FieldProjection);
    let summary = engine.calculate_totals(&cart);

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    print_summary(&summary, ctx);

    Ok(())
}

fn print_summary(summary: &CheckoutSummary, ctx: &Context) {
    let view = &summary.cart;

    ctx.output.header(&format!("Quote for cart {}", view.id));
    if let Some(ref address) = view.shipping_address {
        ctx.output.kv("Ship to", address);
    }
    ctx.output.kv("Tier", &view.customer_tier);
    ctx.output.kv("Method", &view.shipping_method);

    ctx.output.header("Items");
    for item in &view.items {
        ctx.output.list_item(&format!(
            "{} x{} @ {} = {}",
            item.product_name,
            item.quantity,
            item.unit_price.display(),
            item.line_total.display()
        ));
    }

    ctx.output.header("Totals");
    let subtotal = Money::sum(
        view.items.iter().map(|item| item.line_total),
        summary.total.currency,
    );
    ctx.output.kv("Subtotal", &subtotal.display());
    ctx.output.kv("Shipping", &summary.shipping_cost.display());
    if summary.discount_rate > 0.0 {
        let saved = (subtotal + summary.shipping_cost) - summary.total;
        ctx.output.kv(
            "Discount",
            &format!("{:.0}% (-{})", summary.discount_rate, saved.display()),
        );
    }
    ctx.output.kv("Total", &summary.total.display());
}
