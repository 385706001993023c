//! Property tests for the pricing engine.

use cartwheel_pricing::prelude::*;
use proptest::prelude::*;

fn tier_strategy() -> impl Strategy<Value = CustomerTier> {
    prop_oneof![Just(CustomerTier::Standard), Just(CustomerTier::Premium)]
}

fn method_strategy() -> impl Strategy<Value = ShippingMethod> {
    prop_oneof![
        Just(ShippingMethod::Standard),
        Just(ShippingMethod::Expedited),
        Just(ShippingMethod::Priority),
        Just(ShippingMethod::Express),
    ]
}

fn destination_strategy() -> impl Strategy<Value = Address> {
    prop_oneof![
        Just(Address::new("USA", "New York City", "500 5th Ave")),
        Just(Address::new("USA", "Chicago", "233 S Wacker Dr")),
        Just(Address::new("Germany", "Berlin", "Unter den Linden 1")),
    ]
}

fn cart_strategy() -> impl Strategy<Value = Cart> {
    (
        proptest::collection::vec((1_i64..=20, 1_i64..=50_000), 0..6),
        tier_strategy(),
        method_strategy(),
        destination_strategy(),
    )
        .prop_map(|(lines, tier, method, destination)| {
            let mut cart =
                Cart::for_customer(CustomerId::new("cust-1"), tier, Currency::USD);
            for (i, (quantity, price_cents)) in lines.into_iter().enumerate() {
                cart.add_item(
                    ProductId::new(format!("prod-{}", i)),
                    format!("Product {}", i),
                    quantity,
                    Money::new(price_cents, Currency::USD),
                )
                .unwrap();
            }
            cart.shipping_method = method;
            cart.shipping_address = Some(destination);
            cart
        })
}

fn engine() -> CheckoutEngine<ZoneShippingCalculator, FieldProjection> {
    let origin = Address::new("USA", "New York City", "1 Warehouse Way");
    CheckoutEngine::new(ZoneShippingCalculator::new(origin), FieldProjection)
}

proptest! {
    #[test]
    fn totals_are_deterministic(cart in cart_strategy()) {
        let engine = engine();
        prop_assert_eq!(engine.calculate_totals(&cart), engine.calculate_totals(&cart));
    }

    #[test]
    fn total_matches_discount_identity(cart in cart_strategy()) {
        let summary = engine().calculate_totals(&cart);
        let combined = cart.subtotal() + summary.shipping_cost;
        let expected = combined.multiply_decimal(1.0 - summary.discount_rate / 100.0);

        prop_assert_eq!(summary.total, expected);
        prop_assert!(summary.discount_rate >= 0.0 && summary.discount_rate <= 100.0);
    }

    #[test]
    fn discount_rate_tracks_tier(cart in cart_strategy()) {
        let summary = engine().calculate_totals(&cart);
        let expected = match cart.customer_tier {
            CustomerTier::Standard => 0.0,
            CustomerTier::Premium => 10.0,
        };
        prop_assert_eq!(summary.discount_rate, expected);
    }

    #[test]
    fn premium_never_pays_more_shipping(cart in cart_strategy()) {
        let origin = Address::new("USA", "New York City", "1 Warehouse Way");
        let calculator = ZoneShippingCalculator::new(origin);

        let mut standard = cart.clone();
        standard.customer_tier = CustomerTier::Standard;
        let mut premium = cart;
        premium.customer_tier = CustomerTier::Premium;

        let standard_cost = calculator.calculate_shipping_cost(&standard);
        let premium_cost = calculator.calculate_shipping_cost(&premium);

        prop_assert!(premium_cost.amount_cents <= standard_cost.amount_cents);
        if premium.shipping_method == ShippingMethod::Express {
            prop_assert_eq!(premium_cost, standard_cost);
        }
    }

    #[test]
    fn zones_order_shipping_costs(
        lines in proptest::collection::vec((1_i64..=20, 1_i64..=50_000), 1..6),
        tier in tier_strategy(),
        method in method_strategy(),
    ) {
        let origin = Address::new("USA", "New York City", "1 Warehouse Way");
        let calculator = ZoneShippingCalculator::new(origin);

        let mut costs = Vec::new();
        for destination in [
            Address::new("USA", "New York City", "500 5th Ave"),
            Address::new("USA", "Chicago", "233 S Wacker Dr"),
            Address::new("Germany", "Berlin", "Unter den Linden 1"),
        ] {
            let mut cart = Cart::new(Currency::USD);
            for (i, (quantity, price_cents)) in lines.iter().enumerate() {
                cart.add_item(
                    ProductId::new(format!("prod-{}", i)),
                    format!("Product {}", i),
                    *quantity,
                    Money::new(*price_cents, Currency::USD),
                )
                .unwrap();
            }
            cart.customer_tier = tier;
            cart.shipping_method = method;
            cart.shipping_address = Some(destination);
            costs.push(calculator.calculate_shipping_cost(&cart).amount_cents);
        }

        prop_assert!(costs[0] <= costs[1]);
        prop_assert!(costs[1] <= costs[2]);
    }

    #[test]
    fn validator_accepts_exactly_complete_addresses(
        country in "[a-z]{0,5}",
        city in "[a-z]{0,5}",
        street in "[a-z]{0,5}",
    ) {
        let validator = AddressValidator::new();
        let expected = !country.is_empty() && !city.is_empty() && !street.is_empty();
        let addr = Address::new(country, city, street);

        prop_assert_eq!(validator.is_valid(Some(&addr)), expected);
        prop_assert!(!validator.is_valid(None));
    }
}
