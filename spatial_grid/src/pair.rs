// Copyright 2025 the Spatial Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unordered pair of body references.

use alloc::rc::Rc;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};

/// Two distinct bodies reported by [`Grid::query_distance_pair`][crate::Grid::query_distance_pair].
///
/// Equality and hashing are by reference identity and ignore order: `(a, b)` and
/// `(b, a)` are the same pair.
pub struct BodyPair<B> {
    first: Rc<B>,
    second: Rc<B>,
}

impl<B> BodyPair<B> {
    /// Create a pair from two references to distinct bodies.
    pub fn new(first: Rc<B>, second: Rc<B>) -> Self {
        debug_assert!(
            !Rc::ptr_eq(&first, &second),
            "a body cannot be paired with itself"
        );
        Self { first, second }
    }

    /// The body that was enumerated first.
    pub fn first(&self) -> &Rc<B> {
        &self.first
    }

    /// The body that was enumerated second.
    pub fn second(&self) -> &Rc<B> {
        &self.second
    }

    /// Whether `body` is one of the two members.
    pub fn contains(&self, body: &B) -> bool {
        core::ptr::eq(Rc::as_ptr(&self.first), body)
            || core::ptr::eq(Rc::as_ptr(&self.second), body)
    }

    /// The member that is not `body`, if `body` is a member.
    pub fn other(&self, body: &B) -> Option<&Rc<B>> {
        if core::ptr::eq(Rc::as_ptr(&self.first), body) {
            Some(&self.second)
        } else if core::ptr::eq(Rc::as_ptr(&self.second), body) {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Split the pair into its two references.
    pub fn into_inner(self) -> (Rc<B>, Rc<B>) {
        (self.first, self.second)
    }

    /// Member addresses, lower first.
    fn ordered_ptrs(&self) -> (*const B, *const B) {
        let a = Rc::as_ptr(&self.first);
        let b = Rc::as_ptr(&self.second);
        if a <= b { (a, b) } else { (b, a) }
    }
}

impl<B> Clone for BodyPair<B> {
    fn clone(&self) -> Self {
        Self {
            first: Rc::clone(&self.first),
            second: Rc::clone(&self.second),
        }
    }
}

impl<B> PartialEq for BodyPair<B> {
    fn eq(&self, other: &Self) -> bool {
        self.ordered_ptrs() == other.ordered_ptrs()
    }
}

impl<B> Eq for BodyPair<B> {}

impl<B> Hash for BodyPair<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lo, hi) = self.ordered_ptrs();
        core::ptr::hash(lo, state);
        core::ptr::hash(hi, state);
    }
}

impl<B: Debug> Debug for BodyPair<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("BodyPair")
            .field(&self.first)
            .field(&self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn order_does_not_matter() {
        let a = Rc::new(1_u8);
        let b = Rc::new(2_u8);
        let ab = BodyPair::new(Rc::clone(&a), Rc::clone(&b));
        let ba = BodyPair::new(Rc::clone(&b), Rc::clone(&a));
        assert_eq!(ab, ba);

        let mut set = HashSet::new();
        assert!(set.insert(ab));
        assert!(!set.insert(ba), "reversed pair must hash and compare equal");
    }

    #[test]
    fn identity_not_value() {
        let a = Rc::new(1_u8);
        let a_twin = Rc::new(1_u8);
        let b = Rc::new(2_u8);
        let p = BodyPair::new(Rc::clone(&a), Rc::clone(&b));
        let q = BodyPair::new(Rc::clone(&a_twin), Rc::clone(&b));
        assert_ne!(p, q);
        assert!(p.contains(&a));
        assert!(!p.contains(&a_twin));
        assert!(Rc::ptr_eq(p.other(&b).unwrap(), &a));
        assert!(p.other(&a_twin).is_none());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "a body cannot be paired with itself")]
    fn self_pair_is_rejected() {
        let a = Rc::new(1_u8);
        let _ = BodyPair::new(Rc::clone(&a), a);
    }
}
