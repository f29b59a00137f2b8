//! Deals

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer, ser::SerializeMap};
use thiserror::Error;

use crate::{
    cart::Cart,
    pricing::PricingError,
    solvers::{Solver, greedy::GreedySolver},
    vendors::{Vendor, VendorError},
};

/// Errors that stop a deal from being computed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DealError {
    /// The cart has no items.
    #[error("cart is empty")]
    EmptyCart,

    /// No vendors were supplied.
    #[error("vendor list is empty")]
    EmptyVendorList,

    /// A vendor entry is malformed (index in the vendor list, reason).
    #[error("vendor {index} is invalid: {reason}")]
    InvalidVendor {
        /// Position of the vendor in the supplied list
        index: usize,

        /// What is wrong with it
        reason: VendorError,
    },

    /// No vendor offers the item.
    #[error("item \"{0}\" is not available from any vendor")]
    ItemUnavailable(String),

    /// Summing prices or shipping overflowed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Item name -> chosen vendor name.
///
/// Entries keep the position of the first time an item was seen. Assigning an
/// item again replaces its vendor in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<(String, String)>,
    positions: FxHashMap<String, usize>,
}

impl Selection {
    /// Record `vendor` as the supplier of `item`, overwriting any earlier choice.
    pub fn assign(&mut self, item: &str, vendor: &str) {
        if let Some(entry) = self
            .positions
            .get(item)
            .and_then(|&pos| self.entries.get_mut(pos))
        {
            vendor.clone_into(&mut entry.1);
            return;
        }

        self.positions.insert(item.to_string(), self.entries.len());
        self.entries.push((item.to_string(), vendor.to_string()));
    }

    /// Vendor chosen for the item, if any.
    pub fn vendor_for(&self, item: &str) -> Option<&str> {
        self.positions
            .get(item)
            .and_then(|&pos| self.entries.get(pos))
            .map(|(_, vendor)| vendor.as_str())
    }

    /// Iterate over `(item, vendor)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(item, vendor)| (item.as_str(), vendor.as_str()))
    }

    /// Number of distinct items selected.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;

        for (item, vendor) in &self.entries {
            map.serialize_entry(item, vendor)?;
        }

        map.end()
    }
}

/// Cost breakdown of a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealBreakdown {
    items_cost: Decimal,
    shipping_cost: Decimal,
    vendors_used: Vec<String>,
    vendor_count: usize,
}

impl DealBreakdown {
    /// Create a breakdown. Amounts are expected to be rounded already.
    pub fn new(items_cost: Decimal, shipping_cost: Decimal, vendors_used: Vec<String>) -> Self {
        let vendor_count = vendors_used.len();

        DealBreakdown {
            items_cost,
            shipping_cost,
            vendors_used,
            vendor_count,
        }
    }

    /// Sum of the chosen item prices
    pub fn items_cost(&self) -> Decimal {
        self.items_cost
    }

    /// Sum of shipping over the vendors used
    pub fn shipping_cost(&self) -> Decimal {
        self.shipping_cost
    }

    /// Vendors supplying at least one item, in first-use order
    pub fn vendors_used(&self) -> &[String] {
        &self.vendors_used
    }

    /// Number of vendors used
    pub fn vendor_count(&self) -> usize {
        self.vendor_count
    }
}

/// Cheapest multi-vendor purchase of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deal {
    total_cost: Decimal,
    selection: Selection,
    breakdown: DealBreakdown,
}

impl Deal {
    /// Create a deal from its parts.
    pub fn new(total_cost: Decimal, selection: Selection, breakdown: DealBreakdown) -> Self {
        Deal {
            total_cost,
            selection,
            breakdown,
        }
    }

    /// Items plus shipping, rounded to two places
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    /// Vendor chosen for each item
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cost breakdown
    pub fn breakdown(&self) -> &DealBreakdown {
        &self.breakdown
    }
}

/// Finds the cheapest vendor for each cart item and totals the deal.
///
/// # Errors
///
/// See [`DealError`]: empty inputs, a malformed vendor reached during the scan,
/// an item no vendor offers, or totals too large to represent.
pub fn best_deal(cart: &Cart, vendors: &[Vendor]) -> Result<Deal, DealError> {
    GreedySolver::solve(cart, vendors)
}
