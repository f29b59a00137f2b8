//! Cartwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    analysis::{DealAnalysis, Savings, analyze_deal},
    cart::Cart,
    comparisons::{VendorComparison, all_vendor_comparisons, single_vendor_cost},
    deals::{Deal, DealBreakdown, DealError, Selection, best_deal},
    fixtures::{Fixture, FixtureError},
    pricing::PricingError,
    receipt::{DealReceipt, ReceiptError},
    request::DealRequest,
    solvers::{Solver, greedy::GreedySolver},
    vendors::{ValidVendor, Vendor, VendorError},
};
