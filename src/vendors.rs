//! Vendors

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a vendor entry can be structurally malformed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VendorError {
    /// The vendor has no name, or an empty one.
    #[error("vendor has no name")]
    MissingName,

    /// The vendor has no shipping fee.
    #[error("vendor has no shipping fee")]
    MissingShipping,

    /// The vendor's shipping fee is below zero.
    #[error("vendor shipping fee is negative")]
    NegativeShipping,

    /// The vendor has no items mapping.
    #[error("vendor has no items mapping")]
    MissingItems,
}

/// A vendor entry as supplied by a caller.
///
/// Every field is optional so that partial or malformed entries can still be
/// carried around and classified by [`Vendor::validate`].
///
/// Only absent fields are deferred that way. A field of the wrong type fails
/// deserialization outright; amounts accept numbers or numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor name
    #[serde(default)]
    pub name: Option<String>,

    /// Flat shipping fee charged once if the vendor supplies anything
    #[serde(default)]
    pub shipping: Option<Decimal>,

    /// Item name -> price
    #[serde(default)]
    pub items: Option<FxHashMap<String, Decimal>>,
}

impl Vendor {
    /// Create a well-formed vendor.
    pub fn new<I, S>(name: impl Into<String>, shipping: Decimal, items: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Vendor {
            name: Some(name.into()),
            shipping: Some(shipping),
            items: Some(
                items
                    .into_iter()
                    .map(|(item, price)| (item.into(), price))
                    .collect(),
            ),
        }
    }

    /// Check the entry is structurally valid and borrow it as a [`ValidVendor`].
    ///
    /// # Errors
    ///
    /// Returns the first [`VendorError`] found, checking name, shipping then items.
    pub fn validate(&self) -> Result<ValidVendor<'_>, VendorError> {
        let name = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(VendorError::MissingName)?;

        let shipping = self.shipping.ok_or(VendorError::MissingShipping)?;

        if shipping < Decimal::ZERO {
            return Err(VendorError::NegativeShipping);
        }

        let items = self.items.as_ref().ok_or(VendorError::MissingItems)?;

        Ok(ValidVendor {
            name,
            shipping,
            items,
        })
    }
}

/// Borrowed view of a vendor that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct ValidVendor<'a> {
    name: &'a str,
    shipping: Decimal,
    items: &'a FxHashMap<String, Decimal>,
}

impl<'a> ValidVendor<'a> {
    /// Vendor name
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Shipping fee
    pub fn shipping(&self) -> Decimal {
        self.shipping
    }

    /// Price of the named item, if the vendor carries it.
    ///
    /// A zero price is still an offer.
    pub fn price_of(&self, item: &str) -> Option<Decimal> {
        self.items.get(item).copied()
    }

    /// Number of distinct items the vendor carries.
    pub fn catalogue_len(&self) -> usize {
        self.items.len()
    }
}
