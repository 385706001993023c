//! Rates command.

use anyhow::{anyhow, Result};
use cartwheel_pricing::prelude::*;

use super::RatesArgs;
use crate::context::Context;

/// Run the rates command.
pub fn run(args: RatesArgs, ctx: &Context) -> Result<()> {
    let code = args.currency.as_deref().unwrap_or(&ctx.config.currency);
    let currency =
        Currency::from_code(code).ok_or_else(|| anyhow!("Unknown currency code: {}", code))?;

    let zones = [
        ShippingZone::SameCity,
        ShippingZone::SameCountry,
        ShippingZone::International,
    ];
    let methods = [
        ShippingMethod::Standard,
        ShippingMethod::Expedited,
        ShippingMethod::Priority,
        ShippingMethod::Express,
    ];

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "currency": currency.code(),
            "zone_unit_rate_cents": {
                "same_city": ShippingZone::SameCity.unit_rate_cents(),
                "same_country": ShippingZone::SameCountry.unit_rate_cents(),
                "international": ShippingZone::International.unit_rate_cents(),
            },
            "method_multipliers": {
                "standard": ShippingMethod::Standard.multiplier(),
                "expedited": ShippingMethod::Expedited.multiplier(),
                "priority": ShippingMethod::Priority.multiplier(),
                "express": ShippingMethod::Express.multiplier(),
            },
            "premium_discount_percent": CustomerTier::Premium.discount_percent(),
        }));
        return Ok(());
    }

    ctx.output.header("Zone rates (per unit)");
    for zone in zones {
        let rate = Money::new(zone.unit_rate_cents(), currency);
        ctx.output
            .table_row(&[zone.display_name(), &rate.display()], &[16, 12]);
    }

    ctx.output.header("Method multipliers");
    for method in methods {
        ctx.output.table_row(
            &[method.display_name(), &format!("x{:.1}", method.multiplier())],
            &[16, 12],
        );
    }

    ctx.output.info("");
    ctx.output
        .info("Premium carts ship at the base rate for every method except Express.");
    ctx.output.info(&format!(
        "Premium carts get a {:.0}% discount on goods plus shipping.",
        CustomerTier::Premium.discount_percent()
    ));

    Ok(())
}
