//! Session cart model.
//!
//! The cart is an explicit value: a mapping from string-encoded book id to
//! quantity. It travels in a signed cookie, so handlers receive a decoded
//! copy and must write it back to persist a mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-client cart: string-encoded book id to quantity (always >= 1).
///
/// Serializes as the bare mapping, which is the session blob's wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Total number of items across all entries; 0 for the empty cart.
    pub fn count(&self) -> u32 {
        self.items.values().sum()
    }

    /// Quantity for a single book; 0 when the book is not in the cart.
    pub fn quantity(&self, book_id: i64) -> u32 {
        self.items
            .get(&book_id.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Increment the quantity for `book_id`, inserting it at 1 when absent.
    ///
    /// Callers must have verified that the book exists; the cart itself never
    /// checks the catalog. Nothing ever decrements or removes an entry.
    pub fn add(&mut self, book_id: i64) {
        *self.items.entry(book_id.to_string()).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_counts_zero() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.quantity(10), 0);
    }

    #[test]
    fn add_twice_increments_quantity() {
        let mut cart = Cart::default();
        cart.add(10);
        cart.add(10);
        assert_eq!(cart.quantity(10), 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn count_sums_all_quantities() {
        let mut cart = Cart::default();
        cart.add(10);
        cart.add(10);
        cart.add(11);
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.quantity(10), 2);
        assert_eq!(cart.quantity(11), 1);
    }

    #[test]
    fn serializes_as_bare_mapping() {
        let mut cart = Cart::default();
        cart.add(10);
        cart.add(10);
        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"{"10":2}"#);

        let decoded: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, cart);
    }
}
