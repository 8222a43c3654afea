//! Breakpoint sequences defining the coordinate system of a table.
//!
//! ```rust
//! use lutn::AxisSet;
//!
//! let axes = AxisSet::new([vec![2.0_f64, 6.0, 10.0], vec![0.0, 1.0]]).unwrap();
//! assert_eq!(axes.lengths(), [3, 2]);
//! ```
use core::ops::Index;

use num_traits::Float;

use crate::error::{Result, TableError};

/// Ordered breakpoints along one dimension.
///
/// Assumes values are non-decreasing. Checking this is left to the user;
/// repeated values are allowed and make that segment a flat step that
/// does not interpolate.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis<T> {
    vals: Vec<T>,
}

impl<T: Float> Axis<T> {
    /// # Errors
    /// * If `vals` is empty
    pub fn new(vals: Vec<T>) -> Result<Self> {
        if vals.is_empty() {
            return Err(TableError::EmptyAxis { axis: 0 });
        }
        Ok(Self { vals })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Always false; empty axes are rejected on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.vals
    }

    /// First and last breakpoint
    pub fn bounds(&self) -> (T, T) {
        (self.vals[0], self.vals[self.vals.len() - 1])
    }

    /// Whether no segment of this axis can be interpolated across,
    /// either because there is only one breakpoint or all breakpoints are equal.
    pub fn is_degenerate(&self) -> bool {
        let first = self.vals[0];
        self.vals.iter().all(|&v| v == first)
    }

    pub fn into_inner(self) -> Vec<T> {
        self.vals
    }
}

impl<T> Index<usize> for Axis<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.vals[i]
    }
}

/// One axis per dimension of a grid, index 0..N.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSet<T, const N: usize> {
    axes: [Axis<T>; N],
}

impl<T: Float, const N: usize> AxisSet<T, N> {
    /// Build from raw breakpoint vectors.
    ///
    /// # Errors
    /// * If any axis is empty
    pub fn new(axes: [Vec<T>; N]) -> Result<Self> {
        if let Some(axis) = axes.iter().position(|a| a.is_empty()) {
            return Err(TableError::EmptyAxis { axis });
        }
        Ok(Self {
            axes: axes.map(|vals| Axis { vals }),
        })
    }

    /// Build from already-validated axes
    pub fn from_axes(axes: [Axis<T>; N]) -> Self {
        Self { axes }
    }

    /// Number of breakpoints on each axis
    pub fn lengths(&self) -> [usize; N] {
        let mut dims = [0_usize; N];
        (0..N).for_each(|i| dims[i] = self.axes[i].len());
        dims
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Axis<T>> {
        self.axes.get(i)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Axis<T>> {
        self.axes.iter()
    }

    pub fn into_inner(self) -> [Axis<T>; N] {
        self.axes
    }
}

impl<T, const N: usize> Index<usize> for AxisSet<T, N> {
    type Output = Axis<T>;

    #[inline]
    fn index(&self, i: usize) -> &Axis<T> {
        &self.axes[i]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_axis_rejected() {
        let err = AxisSet::<f64, 3>::new([vec![1.0], vec![], vec![2.0]]).unwrap_err();
        assert!(matches!(err, TableError::EmptyAxis { axis: 1 }));
        assert!(Axis::<f64>::new(vec![]).is_err());
    }

    #[test]
    fn test_degenerate() {
        assert!(Axis::new(vec![3.0_f64]).unwrap().is_degenerate());
        assert!(Axis::new(vec![3.0_f64, 3.0, 3.0]).unwrap().is_degenerate());
        assert!(!Axis::new(vec![3.0_f64, 3.0, 4.0]).unwrap().is_degenerate());
    }

    #[test]
    fn test_lengths_and_bounds() {
        let axes = AxisSet::new([vec![2.0_f64, 6.0, 10.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(axes.lengths(), [3, 2]);
        assert_eq!(axes[0].bounds(), (2.0, 10.0));
        assert_eq!(axes[1][1], 1.0);
        assert!(axes.get(2).is_none());
    }
}
