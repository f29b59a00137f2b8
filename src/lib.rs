//! Cartwise
//!
//! Cartwise works out the cheapest way to buy a shopping cart across several
//! vendors, each with its own prices and a flat shipping fee, and compares it
//! with buying everything from a single vendor.
//!
//! Each item goes to the vendor offering it for the least, and shipping is
//! charged once for every vendor that ends up supplying something.

pub mod analysis;
pub mod cart;
pub mod comparisons;
pub mod deals;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod request;
pub mod solvers;
pub mod utils;
pub mod vendors;
