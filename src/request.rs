//! Deal requests

use serde::{Deserialize, Serialize};

use crate::{
    analysis::{DealAnalysis, analyze_deal},
    cart::Cart,
    deals::{Deal, DealError, best_deal},
    vendors::Vendor,
};

/// A cart together with the vendors to buy it from.
///
/// This is the shape callers hand to the core once they have parsed and size
/// checked their input. No further structural checks happen here beyond what
/// [`best_deal`] and [`analyze_deal`] do themselves.
///
/// Missing vendor fields parse and are reported later as
/// [`DealError::InvalidVendor`]. Mistyped fields, such as a non-numeric
/// `shipping` string, reject the whole body at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealRequest {
    /// Items to buy, in order
    pub cart: Cart,

    /// Candidate vendors, in priority order for price ties
    pub vendors: Vec<Vendor>,
}

impl DealRequest {
    /// Create a request.
    pub fn new(cart: Cart, vendors: Vec<Vendor>) -> Self {
        DealRequest { cart, vendors }
    }

    /// Cheapest multi-vendor deal for the request.
    ///
    /// # Errors
    ///
    /// See [`best_deal`].
    pub fn best_deal(&self) -> Result<Deal, DealError> {
        best_deal(&self.cart, &self.vendors)
    }

    /// Deal plus single-vendor comparisons and savings.
    ///
    /// # Errors
    ///
    /// See [`analyze_deal`].
    pub fn analyze(&self) -> Result<DealAnalysis, DealError> {
        analyze_deal(&self.cart, &self.vendors)
    }
}
