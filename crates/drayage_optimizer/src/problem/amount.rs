use std::ops::{AddAssign, Index, SubAssign};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

type Vector = SmallVec<[f64; 2]>;

/// A multi-dimensional quantity used for both job demands and vehicle
/// capacities. Dimensions missing from one side compare as zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Amount(Vector);

impl Amount {
    pub const EMPTY: Amount = Amount(Vector::new_const());

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        let mut vec = SmallVec::with_capacity(dimensions);
        vec.resize(dimensions, 0.0);
        Amount(vec)
    }

    pub fn from_vec(vec: Vec<f64>) -> Self {
        Amount(SmallVec::from_vec(vec))
    }

    pub fn single(value: f64) -> Self {
        Amount(SmallVec::from_slice(&[value]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty() || self.0.iter().all(|&v| v == 0.0)
    }

    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn is_strictly_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v > 0.0)
    }

    /// Componentwise `self <= capacity` over the longer of the two vectors.
    #[inline]
    pub fn fits_within(&self, capacity: &Amount) -> bool {
        let dimensions = self.len().max(capacity.len());
        (0..dimensions).all(|i| self.get(i) <= capacity.get(i))
    }

    /// Componentwise `self + other <= capacity`.
    #[inline]
    pub fn fits_within_after_adding(&self, other: &Amount, capacity: &Amount) -> bool {
        let dimensions = self.len().max(other.len()).max(capacity.len());
        (0..dimensions).all(|i| self.get(i) + other.get(i) <= capacity.get(i))
    }
}

impl AddAssign<&Amount> for Amount {
    fn add_assign(&mut self, rhs: &Amount) {
        if self.0.len() < rhs.len() {
            self.0.resize(rhs.len(), 0.0);
        }

        for (a, b) in self.0.iter_mut().zip(rhs.iter()) {
            *a += b;
        }
    }
}

impl SubAssign<&Amount> for Amount {
    fn sub_assign(&mut self, rhs: &Amount) {
        if self.0.len() < rhs.len() {
            self.0.resize(rhs.len(), 0.0);
        }

        for (a, b) in self.0.iter_mut().zip(rhs.iter()) {
            *a -= b;
        }
    }
}

impl Index<usize> for Amount {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        let dimensions = self.len().max(other.len());
        (0..dimensions).all(|i| self.get(i) == other.get(i))
    }
}

impl From<Vec<f64>> for Amount {
    fn from(vec: Vec<f64>) -> Self {
        Amount::from_vec(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within_shorter_capacity() {
        let demand = Amount::from_vec(vec![1.0, 2.0]);
        let capacity = Amount::from_vec(vec![4.0]);

        assert!(!demand.fits_within(&capacity));
    }

    #[test]
    fn test_fits_within_componentwise() {
        let demand = Amount::from_vec(vec![2.0, 3.0]);

        assert!(demand.fits_within(&Amount::from_vec(vec![2.0, 3.0])));
        assert!(!demand.fits_within(&Amount::from_vec(vec![3.0, 2.0])));
    }

    #[test]
    fn test_fits_within_after_adding() {
        let load = Amount::from_vec(vec![3.0]);
        let demand = Amount::single(1.0);
        let capacity = Amount::single(4.0);

        assert!(load.fits_within_after_adding(&demand, &capacity));

        let load = Amount::from_vec(vec![4.0]);
        assert!(!load.fits_within_after_adding(&demand, &capacity));
    }

    #[test]
    fn test_add_sub_roundtrip() {
        let mut load = Amount::with_dimensions(2);
        let demand = Amount::from_vec(vec![1.0, 2.0]);

        load += &demand;
        load += &demand;
        load -= &demand;

        assert_eq!(load, Amount::from_vec(vec![1.0, 2.0]));
    }

    #[test]
    fn test_eq_ignores_trailing_zeros() {
        assert_eq!(
            Amount::from_vec(vec![1.0, 0.0]),
            Amount::from_vec(vec![1.0])
        );
        assert_eq!(Amount::empty(), Amount::with_dimensions(3));
    }

    #[test]
    fn test_is_strictly_positive() {
        assert!(Amount::single(1.0).is_strictly_positive());
        assert!(!Amount::single(0.0).is_strictly_positive());
        assert!(!Amount::from_vec(vec![1.0, -2.0]).is_strictly_positive());
        assert!(!Amount::empty().is_strictly_positive());
    }
}
