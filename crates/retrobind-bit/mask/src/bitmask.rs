use std::fmt;
use std::marker::PhantomData;

use crate::Bitable;

/// A set of `Bitable` values packed into a single `u64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmask<T: Bitable>(pub u64, PhantomData<T>);

impl<T: Bitable> Bitmask<T> {
    /// Create a new bitmask from a slice of values.
    pub fn new(values: &[T]) -> Self {
        values.iter().copied().collect()
    }

    /// Create an empty bitmask.
    pub const fn empty() -> Self {
        Self(0, PhantomData)
    }

    /// Create a bitmask containing every variant of `T`.
    pub fn full() -> Self {
        if T::COUNT >= 64 {
            Self(u64::MAX, PhantomData)
        } else {
            Self((1u64 << T::COUNT) - 1, PhantomData)
        }
    }

    /// Create a new bitmask from a raw value.
    pub const fn from_value(value: u64) -> Self {
        Self(value, PhantomData)
    }

    /// Raw bits.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the bitmask contains a specific value.
    #[inline]
    pub fn contains(&self, bit: T) -> bool {
        (self.0 & bit.bit()) != 0
    }

    /// Insert a value to the bitmask.
    #[inline]
    pub fn insert(&mut self, bit: T) {
        self.0 |= bit.bit();
    }

    /// Remove a value from the bitmask.
    #[inline]
    pub fn remove(&mut self, bit: T) {
        self.0 &= !bit.bit();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn intersection(&self, other: &Bitmask<T>) -> Bitmask<T> {
        Self(self.0 & other.0, PhantomData)
    }

    /// Count the number of bits set in the bitmask.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the contained values in ascending index order.
    pub fn iter(&self) -> Iter<T> {
        Iter {
            rest: self.0,
            _marker: PhantomData,
        }
    }
}

impl<T: Bitable> Default for Bitmask<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Bitable> FromIterator<T> for Bitmask<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut mask = Self::empty();
        for value in iter {
            mask.insert(value);
        }
        mask
    }
}

impl<T: Bitable> Extend<T> for Bitmask<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Bitable> IntoIterator for Bitmask<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Bitable + fmt::Debug> fmt::Debug for Bitmask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`Bitmask`].
#[derive(Debug, Clone)]
pub struct Iter<T: Bitable> {
    rest: u64,
    _marker: PhantomData<T>,
}

impl<T: Bitable> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.rest != 0 {
            let index = self.rest.trailing_zeros();
            self.rest &= self.rest - 1;
            // Bits above COUNT have no variant and are skipped.
            if let Some(value) = T::from_index(index) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rest.count_ones() as usize))
    }
}
