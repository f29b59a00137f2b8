//! Deal analysis
//!
//! Puts the multi-vendor deal next to what the same cart would cost at each
//! single vendor, and works out how much splitting the order saves.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::{
    cart::Cart,
    comparisons::{VendorComparison, all_vendor_comparisons},
    deals::{Deal, DealError, best_deal},
    pricing::{PricingError, fraction_of, percent_points, round_money, subtract_amounts},
    vendors::Vendor,
};

/// Savings of the multi-vendor deal against single-vendor purchases.
///
/// Values are negative when a single vendor would have been cheaper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Savings {
    vs_cheapest_single_vendor: Decimal,
    vs_most_expensive_vendor: Decimal,
    percentage_saved: Decimal,
}

impl Savings {
    /// Compare a deal total against comparisons sorted cheapest first.
    ///
    /// With no comparisons every figure is zero.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if a difference or the percentage
    /// cannot be represented.
    pub fn from_comparisons(
        optimal_total: Decimal,
        comparisons: &[VendorComparison],
    ) -> Result<Self, PricingError> {
        let (Some(cheapest), Some(most_expensive)) = (comparisons.first(), comparisons.last())
        else {
            return Ok(Savings::default());
        };

        let vs_cheapest = subtract_amounts(cheapest.total(), optimal_total)?;
        let vs_most_expensive = subtract_amounts(most_expensive.total(), optimal_total)?;
        let fraction = fraction_of(vs_most_expensive, most_expensive.total())?;

        Ok(Savings {
            vs_cheapest_single_vendor: round_money(vs_cheapest),
            vs_most_expensive_vendor: round_money(vs_most_expensive),
            percentage_saved: percent_points(fraction)?,
        })
    }

    /// Cheapest single-vendor total minus the deal total
    pub fn vs_cheapest_single_vendor(&self) -> Decimal {
        self.vs_cheapest_single_vendor
    }

    /// Most expensive single-vendor total minus the deal total
    pub fn vs_most_expensive_vendor(&self) -> Decimal {
        self.vs_most_expensive_vendor
    }

    /// Savings against the most expensive vendor, in percent points
    pub fn percentage_saved(&self) -> Decimal {
        self.percentage_saved
    }
}

/// Full report for a cart: the deal, every single-vendor alternative and the savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealAnalysis {
    optimal: Deal,
    comparisons: Vec<VendorComparison>,
    savings: Savings,
}

impl DealAnalysis {
    /// Cheapest multi-vendor deal
    pub fn optimal(&self) -> &Deal {
        &self.optimal
    }

    /// Single-vendor alternatives, cheapest first
    pub fn comparisons(&self) -> &[VendorComparison] {
        &self.comparisons
    }

    /// Savings summary
    pub fn savings(&self) -> &Savings {
        &self.savings
    }

    /// Take the deal back out of the analysis.
    pub fn into_optimal(self) -> Deal {
        self.optimal
    }
}

/// Computes the best deal for a cart and analyses it against single vendors.
///
/// # Errors
///
/// Returns whatever [`best_deal`] fails with, unchanged, or
/// [`DealError::Pricing`] if the savings cannot be represented. Having no
/// vendor that can supply the whole cart alone is not an error.
pub fn analyze_deal(cart: &Cart, vendors: &[Vendor]) -> Result<DealAnalysis, DealError> {
    let optimal = best_deal(cart, vendors)?;
    let comparisons = all_vendor_comparisons(cart, vendors);
    let savings = Savings::from_comparisons(optimal.total_cost(), &comparisons)?;

    debug!(
        comparisons = comparisons.len(),
        vs_cheapest = %savings.vs_cheapest_single_vendor,
        percentage_saved = %savings.percentage_saved,
        "analysed deal"
    );

    Ok(DealAnalysis {
        optimal,
        comparisons,
        savings,
    })
}
