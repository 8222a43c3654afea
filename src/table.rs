//! A lookup table binding an axis set to a grid of matching shape.
//!
//! ```rust
//! use lutn::{AxisSet, Grid, Table};
//!
//! // Define a grid
//! let axes = AxisSet::new([vec![2.0_f64, 6.0, 10.0], vec![0.0, 1.0]]).unwrap();
//!
//! // Values at grid points, z = 4x + 9y
//! let mut table = Table::sample(axes, |[x, y]| 4.0 * x + 9.0 * y).unwrap();
//!
//! // Interpolate
//! assert_eq!(table.get_value([6.0, 0.5]), 28.5);
//! ```
use log::{debug, warn};
use num_traits::Float;

use crate::axis::AxisSet;
use crate::error::{Result, TableError};
use crate::grid::Grid;
use crate::multilinear::interpolate;
use crate::search::{Bracket, Extrapolation};

/// An N-dimensional lookup table with multilinear interpolation / extrapolation.
///
/// Each lookup updates a per-axis bracket cache, so a `Table` is queried
/// through `&mut self`. Sharing one table between threads requires external
/// locking; read-only access to the axes and grid does not.
///
/// Operation Complexity
/// * O(N) axis searches, amortized O(1) each for slowly-varying queries,
///   plus O(2^N) blends.
///
/// Memory Complexity
/// * No allocation per lookup.
#[derive(Clone, Debug)]
pub struct Table<T, const N: usize> {
    axes: AxisSet<T, N>,
    grid: Grid<T, N>,

    /// Cached search result for each axis, reused across lookups
    brackets: [Bracket<T>; N],

    extrap: Extrapolation,
}

impl<T: Float, const N: usize> Table<T, N> {
    /// Build a table, checking that the axis lengths match the grid extents.
    ///
    /// # Errors
    /// * If the axis lengths and grid extents disagree on any dimension
    pub fn new(axes: AxisSet<T, N>, grid: Grid<T, N>) -> Result<Self> {
        check_shape(&axes, &grid)?;
        debug!(
            "Built {N}-D table with shape {:?}, flat axes {:?}",
            grid.dims(),
            degenerate_axes(&axes)
        );
        Ok(Self {
            axes,
            grid,
            brackets: [Bracket::default(); N],
            extrap: Extrapolation::default(),
        })
    }

    /// Build a table by evaluating `f` at every grid intersection.
    ///
    /// # Errors
    /// * If any axis is empty
    pub fn sample<F>(axes: AxisSet<T, N>, mut f: F) -> Result<Self>
    where
        F: FnMut([T; N]) -> T,
    {
        let mut x = [T::zero(); N];
        let grid = Grid::from_fn(axes.lengths(), |loc| {
            (0..N).for_each(|i| x[i] = axes[i][loc[i]]);
            f(x)
        })?;
        Self::new(axes, grid)
    }

    /// Set the behavior for points outside the axis ranges
    pub fn with_extrapolation(mut self, extrap: Extrapolation) -> Self {
        self.set_extrapolation(extrap);
        self
    }

    /// Set the behavior for points outside the axis ranges,
    /// discarding cached brackets computed under the previous setting.
    pub fn set_extrapolation(&mut self, extrap: Extrapolation) {
        self.extrap = extrap;
        self.reset_cache();
    }

    #[inline]
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrap
    }

    /// Replace both the axes and the grid.
    ///
    /// On error, the table keeps its previous axes, grid, and cache.
    ///
    /// # Errors
    /// * If the axis lengths and grid extents disagree on any dimension
    pub fn load(&mut self, axes: AxisSet<T, N>, grid: Grid<T, N>) -> Result<()> {
        if let Err(e) = check_shape(&axes, &grid) {
            warn!("Rejected {N}-D table load: {e}");
            return Err(e);
        }
        debug!(
            "Reloaded {N}-D table, shape {:?} -> {:?}",
            self.grid.dims(),
            grid.dims()
        );
        self.axes = axes;
        self.grid = grid;
        self.reset_cache();
        Ok(())
    }

    /// Interpolate the value at a point.
    #[inline]
    pub fn get_value(&mut self, x: [T; N]) -> T {
        for i in 0..N {
            self.brackets[i].search(self.axes[i].as_slice(), x[i], self.extrap);
        }
        interpolate(&self.grid, &self.brackets)
    }

    /// Interpolate on a contiguous list of observation points,
    /// one coordinate slice per dimension.
    ///
    /// # Errors
    ///   * If the coordinate slices and output differ in length
    pub fn get_values(&mut self, x: &[&[T]; N], out: &mut [T]) -> Result<()> {
        let n = out.len();
        if let Some(xx) = x.iter().find(|xx| xx.len() != n) {
            return Err(TableError::ArityMismatch {
                expected: n,
                found: xx.len(),
            });
        }

        let mut tmp = [T::zero(); N];
        for i in 0..n {
            (0..N).for_each(|j| tmp[j] = x[j][i]);
            out[i] = self.get_value(tmp);
        }

        Ok(())
    }

    /// Check whether a point is inside the grid within some absolute tolerance.
    ///
    /// Output entry `i` is `false` if the point is in bounds on that axis,
    /// and `true` if there is a bounds violation on that axis.
    pub fn check_bounds(&self, x: [T; N], atol: T) -> [bool; N] {
        let mut out = [false; N];
        for i in 0..N {
            let (lo, hi) = self.axes[i].bounds();
            out[i] = (x[i] - lo) <= -atol || (x[i] - hi) >= atol;
        }
        out
    }

    /// Force a fresh search on every axis at the next lookup
    pub fn reset_cache(&mut self) {
        self.brackets.iter_mut().for_each(Bracket::reset);
    }

    #[inline]
    pub fn ndims(&self) -> usize {
        N
    }

    pub fn axes(&self) -> &AxisSet<T, N> {
        &self.axes
    }

    pub fn grid(&self) -> &Grid<T, N> {
        &self.grid
    }

    /// Brackets left by the most recent lookup
    pub fn brackets(&self) -> &[Bracket<T>; N] {
        &self.brackets
    }

    pub fn into_parts(self) -> (AxisSet<T, N>, Grid<T, N>) {
        (self.axes, self.grid)
    }
}

fn check_shape<T: Float, const N: usize>(axes: &AxisSet<T, N>, grid: &Grid<T, N>) -> Result<()> {
    let expected = axes.lengths();
    let found = grid.dims();
    if expected != found {
        return Err(TableError::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        });
    }
    Ok(())
}

/// Indices of axes that cannot be interpolated along
fn degenerate_axes<T: Float, const N: usize>(axes: &AxisSet<T, N>) -> Vec<usize> {
    axes.iter()
        .enumerate()
        .filter(|(_, a)| a.is_degenerate())
        .map(|(i, _)| i)
        .collect()
}
