//! Dense N-dimensional arrays of sample values.
//!
//! Values are stored flat in C-style order
//! (z(x0, y0), z(x0, y1), ..., z(x0, yn), z(x1, y0), ...),
//! with a stride table used to locate the sub-grid belonging to each
//! index along each dimension.
use num_traits::Float;

use crate::error::{Result, TableError};

/// An N-dimensional grid of values co-indexed with an `AxisSet`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T, const N: usize> {
    /// Size of each dimension
    dims: [usize; N],

    /// Cumulative product of the sizes of higher dimensions
    strides: [usize; N],

    /// Values at each point, size prod(dims)
    vals: Vec<T>,
}

impl<T: Float, const N: usize> Grid<T, N> {
    /// Allocate a grid of the given shape with every value set to zero.
    ///
    /// # Errors
    /// * If any extent is zero
    pub fn zeros(dims: [usize; N]) -> Result<Self> {
        Self::check_extents(&dims)?;
        let n: usize = dims.iter().product();
        Ok(Self {
            dims,
            strides: strides(&dims),
            vals: vec![T::zero(); n],
        })
    }

    /// Wrap an existing C-ordered value buffer.
    ///
    /// # Errors
    /// * If any extent is zero
    /// * If `vals.len()` is not the product of `dims`
    pub fn new(dims: [usize; N], vals: Vec<T>) -> Result<Self> {
        Self::check_extents(&dims)?;
        let n: usize = dims.iter().product();
        if vals.len() != n {
            return Err(TableError::ShapeMismatch {
                expected: vec![n],
                found: vec![vals.len()],
            });
        }
        Ok(Self {
            dims,
            strides: strides(&dims),
            vals,
        })
    }

    /// Fill a grid by evaluating `f` at every multi-index.
    ///
    /// # Errors
    /// * If any extent is zero
    pub fn from_fn<F>(dims: [usize; N], mut f: F) -> Result<Self>
    where
        F: FnMut([usize; N]) -> T,
    {
        let mut grid = Self::zeros(dims)?;
        let mut loc = [0_usize; N];
        for i in 0..grid.vals.len() {
            (0..N).for_each(|j| loc[j] = (i / grid.strides[j]) % grid.dims[j]);
            grid.vals[i] = f(loc);
        }
        Ok(grid)
    }

    fn check_extents(dims: &[usize; N]) -> Result<()> {
        const {
            assert!(N > 0, "Grids must have at least one dimension");
        }
        match dims.iter().position(|&d| d == 0) {
            Some(axis) => Err(TableError::EmptyAxis { axis }),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn dims(&self) -> [usize; N] {
        self.dims
    }

    #[inline]
    pub fn strides(&self) -> [usize; N] {
        self.strides
    }

    /// Number of entries along dimension `i`
    #[inline]
    pub fn size_along(&self, i: usize) -> usize {
        self.dims[i]
    }

    /// Total number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Always false; zero extents are rejected on construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Flat, C-ordered view of all values
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.vals
    }

    /// Innermost rows, each of length `dims[N - 1]`, in storage order
    pub fn rows(&self) -> core::slice::Chunks<'_, T> {
        self.vals.chunks(self.dims[N - 1])
    }

    pub fn get(&self, loc: [usize; N]) -> Option<T> {
        self.offset(loc).map(|i| self.vals[i])
    }

    /// # Errors
    /// * If `loc` is outside the grid on any dimension
    pub fn set(&mut self, loc: [usize; N], v: T) -> Result<()> {
        match self.offset(loc) {
            Some(i) => {
                self.vals[i] = v;
                Ok(())
            }
            None => Err(TableError::IndexOutOfBounds {
                index: loc.to_vec(),
                dims: self.dims.to_vec(),
            }),
        }
    }

    pub fn into_values(self) -> Vec<T> {
        self.vals
    }

    #[inline]
    fn offset(&self, loc: [usize; N]) -> Option<usize> {
        let mut i = 0;
        for j in 0..N {
            if loc[j] >= self.dims[j] {
                return None;
            }
            i += loc[j] * self.strides[j];
        }
        Some(i)
    }
}

/// Each entry is the cumulative product of the size of dimensions
/// higher than this one, which is the stride between blocks
/// relating to a given index along each dimension.
fn strides<const N: usize>(dims: &[usize; N]) -> [usize; N] {
    let mut dimprod = [1_usize; N];
    let mut acc = 1;
    for i in 0..N {
        dimprod[N - i - 1] = acc;
        acc *= dims[N - i - 1];
    }
    dimprod
}
