//! Multilinear interpolation / extrapolation from per-axis brackets.
//!
//! The 2^N corner values of the cell selected by the brackets are combined by
//! nested 1D linear interpolation, outermost dimension first. For a function
//! that is linear along each axis independently, this reproduces the function
//! exactly inside the grid, up to floating-point error.
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Repeated_linear_interpolation
use num_traits::Float;

use crate::grid::Grid;
use crate::search::Bracket;

/// Linear blend of two values at fractional position `t`
#[inline]
pub fn lerp<T: Float>(y0: T, y1: T, t: T) -> T {
    // Exact at the upper breakpoint, where `y0 + (y1 - y0)` may round
    if t == T::one() {
        return y1;
    }
    y0 + t * (y1 - y0)
}

/// Interpolate the grid at the location described by one bracket per dimension.
///
/// On a dimension whose bracket cannot interpolate, the sub-grid at the lower
/// index is used directly and the upper one is never visited.
///
/// Operation Complexity
/// * O(2^N) value lookups and blends at most.
///
/// Memory Complexity
/// * No allocation. The recursion has constant max depth of N.
#[inline]
pub fn interpolate<T: Float, const N: usize>(grid: &Grid<T, N>, brackets: &[Bracket<T>; N]) -> T {
    populate(grid.values(), &grid.strides(), brackets, 0, 0)
}

/// Recursive evaluation of the interpolant on each dimension,
/// starting from `dim` within the block beginning at `offset`.
#[inline]
fn populate<T: Float>(
    vals: &[T],
    strides: &[usize],
    brackets: &[Bracket<T>],
    dim: usize,
    offset: usize,
) -> T {
    let b = &brackets[dim];
    let lo = offset + b.lower * strides[dim];
    let hi = offset + b.upper * strides[dim];

    match dim + 1 == brackets.len() {
        // At the leaves, index values
        true => {
            if b.can_interpolate {
                lerp(vals[lo], vals[hi], b.slope)
            } else {
                vals[lo]
            }
        }

        // Otherwise, interpolate between the two sub-grids
        false => {
            let y0 = populate(vals, strides, brackets, dim + 1, lo);
            if !b.can_interpolate {
                return y0;
            }
            let y1 = populate(vals, strides, brackets, dim + 1, hi);
            lerp(y0, y1, b.slope)
        }
    }
}
