//! Solvers for vendor assignment

use crate::{
    cart::Cart,
    deals::{Deal, DealError},
    vendors::Vendor,
};

pub mod greedy;

/// Trait for assigning cart items to vendors
pub trait Solver {
    /// Choose a vendor for every cart item and total the resulting deal
    ///
    /// # Errors
    ///
    /// Returns a [`DealError`] if the inputs are empty, a vendor is malformed,
    /// an item cannot be bought anywhere, or the totals overflow.
    fn solve(cart: &Cart, vendors: &[Vendor]) -> Result<Deal, DealError>;
}
