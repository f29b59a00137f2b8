//! Single-vendor comparisons

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::trace;

use crate::{
    cart::Cart,
    pricing::{PricingError, add_amounts, round_money, total_price},
    vendors::Vendor,
};

/// Cost of buying a whole cart from one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorComparison {
    vendor: String,
    items_cost: Decimal,
    shipping: Decimal,
    total: Decimal,
}

impl VendorComparison {
    /// Vendor name
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Sum of the vendor's prices over every cart position
    pub fn items_cost(&self) -> Decimal {
        self.items_cost
    }

    /// Vendor's shipping fee
    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    /// Items plus shipping
    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// Costs the entire cart at a single vendor.
///
/// Returns `None` when the vendor is malformed, is missing any cart item, or
/// its total cannot be represented. None of these is an error: such a vendor
/// simply cannot serve the cart alone.
pub fn single_vendor_cost(cart: &Cart, vendor: &Vendor) -> Option<VendorComparison> {
    let vendor = match vendor.validate() {
        Ok(vendor) => vendor,
        Err(reason) => {
            trace!(?vendor.name, %reason, "skipping malformed vendor");
            return None;
        }
    };

    let prices = cart
        .iter()
        .map(|item| vendor.price_of(item))
        .collect::<Option<Vec<_>>>()?;

    let (items_cost, total) = match items_and_total(prices, vendor.shipping()) {
        Ok(costs) => costs,
        Err(reason) => {
            trace!(vendor = vendor.name(), %reason, "skipping vendor whose total overflows");
            return None;
        }
    };

    Some(VendorComparison {
        vendor: vendor.name().to_string(),
        items_cost: round_money(items_cost),
        shipping: round_money(vendor.shipping()),
        total: round_money(total),
    })
}

fn items_and_total(
    prices: Vec<Decimal>,
    shipping: Decimal,
) -> Result<(Decimal, Decimal), PricingError> {
    let items_cost = total_price(prices)?;

    Ok((items_cost, add_amounts(items_cost, shipping)?))
}

/// Costs the cart at every vendor that can supply all of it, cheapest first.
///
/// Vendors with equal totals keep their relative order from `vendors`.
pub fn all_vendor_comparisons(cart: &Cart, vendors: &[Vendor]) -> Vec<VendorComparison> {
    let mut comparisons: Vec<VendorComparison> = vendors
        .iter()
        .filter_map(|vendor| single_vendor_cost(cart, vendor))
        .collect();

    comparisons.sort_by_key(VendorComparison::total);

    comparisons
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn cart() -> Cart {
        Cart::new(["Laptop", "Mouse", "Keyboard"])
    }

    fn tech_store() -> Vendor {
        Vendor::new(
            "TechStore",
            dec(20),
            [("Laptop", dec(899)), ("Mouse", dec(35)), ("Keyboard", dec(75))],
        )
    }

    fn vendors() -> Vec<Vendor> {
        vec![
            tech_store(),
            Vendor::new(
                "ElectroMart",
                dec(15),
                [("Laptop", dec(950)), ("Mouse", dec(28)), ("Keyboard", dec(65))],
            ),
            Vendor::new(
                "BudgetTech",
                dec(25),
                [("Laptop", dec(880)), ("Mouse", dec(40)), ("Keyboard", dec(80))],
            ),
        ]
    }

    #[test]
    fn single_vendor_cost_sums_items_and_shipping() -> TestResult {
        let comparison = single_vendor_cost(&cart(), &tech_store()).ok_or("not applicable")?;

        assert_eq!(comparison.vendor(), "TechStore");
        assert_eq!(comparison.items_cost(), dec(1009));
        assert_eq!(comparison.shipping(), dec(20));
        assert_eq!(comparison.total(), Decimal::new(102_900, 2));

        Ok(())
    }

    #[test]
    fn single_vendor_cost_counts_duplicates_per_position() -> TestResult {
        let cart = Cart::new(["Mouse", "Mouse"]);

        let comparison = single_vendor_cost(&cart, &tech_store()).ok_or("not applicable")?;

        assert_eq!(comparison.items_cost(), dec(70));
        assert_eq!(comparison.total(), dec(90));

        Ok(())
    }

    #[test]
    fn single_vendor_cost_is_none_when_an_item_is_missing() {
        let vendor = Vendor::new("MiceOnly", dec(5), [("Mouse", dec(20))]);

        assert_eq!(single_vendor_cost(&cart(), &vendor), None);
    }

    #[test]
    fn single_vendor_cost_is_none_for_malformed_vendor() {
        let vendor = Vendor {
            shipping: None,
            ..tech_store()
        };

        assert_eq!(single_vendor_cost(&cart(), &vendor), None);
    }

    #[test]
    fn comparisons_sorted_ascending_by_total() {
        let comparisons = all_vendor_comparisons(&cart(), &vendors());

        let ranked: Vec<(&str, Decimal)> = comparisons
            .iter()
            .map(|comparison| (comparison.vendor(), comparison.total()))
            .collect();

        assert_eq!(
            ranked,
            [
                ("BudgetTech", dec(1025)),
                ("TechStore", dec(1029)),
                ("ElectroMart", dec(1058)),
            ]
        );
    }

    #[test]
    fn comparisons_keep_input_order_on_ties() {
        let cart = Cart::new(["Cable"]);
        let vendors = vec![
            Vendor::new("Zeta", dec(1), [("Cable", dec(9))]),
            Vendor::new("Alpha", dec(0), [("Cable", dec(10))]),
            Vendor::new("Mid", dec(2), [("Cable", dec(5))]),
        ];

        let names: Vec<String> = all_vendor_comparisons(&cart, &vendors)
            .iter()
            .map(|comparison| comparison.vendor().to_string())
            .collect();

        assert_eq!(names, ["Mid", "Zeta", "Alpha"]);
    }

    #[test]
    fn comparisons_skip_partial_and_malformed_vendors() {
        let mut vendors = vendors();
        vendors.push(Vendor::new("MiceOnly", dec(5), [("Mouse", dec(20))]));
        vendors.push(Vendor {
            name: None,
            ..tech_store()
        });

        let comparisons = all_vendor_comparisons(&cart(), &vendors);

        assert_eq!(comparisons.len(), 3);
        assert!(
            comparisons
                .iter()
                .all(|comparison| comparison.vendor() != "MiceOnly")
        );
    }

    #[test]
    fn comparisons_empty_when_nobody_has_everything() {
        let vendors = vec![
            Vendor::new("MiceOnly", dec(5), [("Mouse", dec(20))]),
            Vendor::new("LaptopsOnly", dec(5), [("Laptop", dec(800))]),
        ];

        assert!(all_vendor_comparisons(&cart(), &vendors).is_empty());
    }

    #[test]
    fn vendor_whose_total_overflows_cannot_serve_the_cart() {
        let half = Decimal::MAX / Decimal::TWO + Decimal::ONE;
        let vendor = Vendor::new("Dear", dec(1), [("Gold", half)]);
        let cart = Cart::new(["Gold", "Gold"]);

        assert!(single_vendor_cost(&cart, &vendor).is_none());
        assert!(all_vendor_comparisons(&cart, &[vendor]).is_empty());
    }
}
