//! Cart

use serde::{Deserialize, Serialize};

/// An ordered shopping list of item names.
///
/// Repeated names are separate purchases, one per position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<String>,
}

impl Cart {
    /// Create a cart from item names, keeping their order.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Cart {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Iterate over the item names in cart order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Get the number of positions in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Cart {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Cart::new(iter)
    }
}
