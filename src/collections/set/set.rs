use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXor, Sub};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};

/// An unordered collection of unique elements.
///
/// Membership is tracked by a hash table, so every operation that needs to know whether an element
/// is present does so in expected constant time. In particular, [`union`](Set::union),
/// [`intersection`](Set::intersection) and [`difference`](Set::difference) are linear in the size
/// of the sets involved rather than quadratic.
///
/// The iteration order is unspecified and may differ between two sets holding the same elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in `self`.
/// - `m`: The number of elements in `other`.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `to_vec` | `O(n)` |
/// | `union` | `O(n + m)`* |
/// | `intersection` | `O(n)`* |
/// | `difference` | `O(n)`* |
///
/// \* Expected, assuming a reasonable hash function.
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: HashSet<T, B>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set.
    ///
    /// # Examples
    /// ```
    /// # use seqkit::collections::Set;
    /// let set: Set<u8> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Set<T> {
        Set {
            inner: HashSet::new(),
        }
    }

    /// Creates a new, empty Set with room for at least `cap` elements.
    pub fn with_cap(cap: usize) -> Set<T> {
        Set {
            inner: HashSet::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Creates a Set containing each distinct element of `seq`.
    ///
    /// # Examples
    /// ```
    /// # use seqkit::collections::Set;
    /// let set = Set::from_slice(&[1, 2, 3, 2, 1]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn from_slice(seq: &[T]) -> Set<T> {
        seq.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    pub const fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashSet::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashSet::with_capacity_and_hasher(cap, hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the Set, returning true if it wasn't already present. Adding an element
    /// that is already present leaves the Set unchanged.
    pub fn add(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns an iterator over all elements in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Copies every element of the Set into a new [`Vec`]. The order is unspecified and should not
    /// be relied upon.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    pub fn iter_difference<'a>(&'a self, other: &'a Set<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn iter_symmetric_difference<'a>(
        &'a self,
        other: &'a Set<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    pub fn iter_intersection<'a>(&'a self, other: &'a Set<T, B>) -> Intersection<'a, T, B> {
        // Walk the smaller of the two, probing the larger.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        Intersection {
            inner: small.iter(),
            other: large,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    pub fn iter_union<'a>(&'a self, other: &'a Set<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.iter_difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Set<T, B> {
    /// Returns a new Set containing every element present in either `self` or `other`.
    ///
    /// # Examples
    /// ```
    /// # use seqkit::collections::Set;
    /// let a = Set::from_slice(&[1, 2, 3, 4]);
    /// let b = Set::from_slice(&[4, 5, 1, 2]);
    /// assert_eq!(a.union(&b), Set::from_slice(&[1, 2, 3, 4, 5]));
    /// ```
    pub fn union(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_union(other).cloned().collect()
    }

    /// Returns a new Set containing only the elements present in both `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// # use seqkit::collections::Set;
    /// let a = Set::from_slice(&[1, 2, 3, 4]);
    /// let b = Set::from_slice(&[4, 5, 1, 2]);
    /// assert_eq!(a.intersection(&b), Set::from_slice(&[1, 2, 4]));
    /// ```
    pub fn intersection(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_intersection(other).cloned().collect()
    }

    /// Returns a new Set containing the elements of `self` that are absent from `other`.
    ///
    /// # Examples
    /// ```
    /// # use seqkit::collections::Set;
    /// let a = Set::from_slice(&[1, 2, 3, 4, 5, 6, 7]);
    /// let b = Set::from_slice(&[4, 5, 1, 2]);
    /// assert_eq!(a.difference(&b), Set::from_slice(&[3, 6, 7]));
    /// ```
    pub fn difference(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_difference(other).cloned().collect()
    }

    /// Returns a new Set containing the elements present in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_symmetric_difference(other).cloned().collect()
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for Set<T, B> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.add(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> From<&[T]> for Set<T, B> {
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> From<Vec<T>> for Set<T, B> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for Set<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &Set<T, B> {
    type Output = Set<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
