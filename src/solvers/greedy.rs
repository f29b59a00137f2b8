//! Greedy per-item solver
//!
//! Each cart item goes to the vendor with the strictly lowest price for it,
//! independently of every other item. Shipping is then charged once per vendor
//! that ended up supplying something. This is not a global optimum: activating
//! an extra vendor for one cheap item can cost more in shipping than it saves.

use rust_decimal::Decimal;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    cart::Cart,
    deals::{Deal, DealBreakdown, DealError, Selection},
    pricing::{add_amounts, round_money, total_price},
    solvers::Solver,
    vendors::{ValidVendor, Vendor},
};

/// Cheapest-vendor-per-item solver
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl Solver for GreedySolver {
    fn solve(cart: &Cart, vendors: &[Vendor]) -> Result<Deal, DealError> {
        if cart.is_empty() {
            return Err(DealError::EmptyCart);
        }

        if vendors.is_empty() {
            return Err(DealError::EmptyVendorList);
        }

        // The first item's scan reaches every vendor, so validating them all
        // here fails on exactly the same entry.
        let vendors = vendors
            .iter()
            .enumerate()
            .map(|(index, vendor)| {
                vendor
                    .validate()
                    .map_err(|reason| DealError::InvalidVendor { index, reason })
            })
            .collect::<Result<SmallVec<[ValidVendor<'_>; 8]>, _>>()?;

        let mut selection = Selection::default();
        let mut used: SmallVec<[usize; 8]> = SmallVec::new();
        let mut prices: SmallVec<[Decimal; 16]> = SmallVec::with_capacity(cart.len());

        for item in cart.iter() {
            let (vendor_idx, vendor, price) = cheapest_offer(&vendors, item)
                .ok_or_else(|| DealError::ItemUnavailable(item.to_string()))?;

            debug!(item, vendor = vendor.name(), %price, "selected vendor for item");

            selection.assign(item, vendor.name());
            prices.push(price);

            if !used.contains(&vendor_idx) {
                used.push(vendor_idx);
            }
        }

        let items_cost = total_price(prices)?;
        let shipping_cost = total_price(
            used.iter()
                .filter_map(|&idx| vendors.get(idx))
                .map(ValidVendor::shipping),
        )?;
        let vendors_used = used
            .iter()
            .filter_map(|&idx| vendors.get(idx))
            .map(|vendor| vendor.name().to_string())
            .collect();

        let total_cost = round_money(add_amounts(items_cost, shipping_cost)?);

        debug!(
            %items_cost,
            %shipping_cost,
            %total_cost,
            vendor_count = used.len(),
            "solved deal"
        );

        Ok(Deal::new(
            total_cost,
            selection,
            DealBreakdown::new(
                round_money(items_cost),
                round_money(shipping_cost),
                vendors_used,
            ),
        ))
    }
}

/// The cheapest vendor carrying `item`, with its index and price.
///
/// Only a strictly lower price displaces the current best, so ties go to the
/// vendor listed first.
fn cheapest_offer<'a>(
    vendors: &[ValidVendor<'a>],
    item: &str,
) -> Option<(usize, ValidVendor<'a>, Decimal)> {
    vendors
        .iter()
        .enumerate()
        .filter_map(|(idx, vendor)| vendor.price_of(item).map(|price| (idx, *vendor, price)))
        .fold(None, |best, offer| match best {
            Some((_, _, best_price)) if best_price <= offer.2 => best,
            _ => Some(offer),
        })
}
