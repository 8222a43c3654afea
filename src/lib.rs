//! N-dimensional lookup tables with multilinear interpolation/extrapolation,
//! tuned for repeated queries with slowly-varying inputs.
//!
//! A [`Table`] binds one [`AxisSet`] (an ordered breakpoint sequence per dimension)
//! to a [`Grid`] of values defined at every intersection of those breakpoints.
//! Each lookup finds the pair of breakpoints bracketing the target on every axis,
//! then blends the 2^N surrounding grid values.
//!
//! # Performance Scalings
//! Each table keeps the bracket found on each axis by the previous lookup. When
//! the next target falls in the same cell, no search is done at all; otherwise a
//! bisection search takes a worst-case number of iterations of log2(axis length).
//!
//! | Operation                     | RAM       | Cost                                  |
//! |-------------------------------|-----------|---------------------------------------|
//! | `Table::get_value`, same cell | O(ndims)  | O(2^ndims)                            |
//! | `Table::get_value`, new cell  | O(ndims)  | O(2^ndims) + ndims * log2(axis size)  |
//! | `TableRegistry::lookup`       | O(ndims)  | as above, plus two map lookups        |
//!
//! # Example: Single Table
//! ```rust
//! use lutn::{AxisSet, Extrapolation, Grid, Table};
//!
//! // Define a grid
//! let axes = AxisSet::new([vec![2.0_f64, 6.0, 10.0], vec![0.0, 1.0]]).unwrap();
//!
//! // Values at grid points, C-ordered
//! let grid = Grid::new([3, 2], vec![8.0, 17.0, 24.0, 33.0, 40.0, 49.0]).unwrap();
//!
//! let mut table = Table::new(axes, grid).unwrap();
//! assert_eq!(table.get_value([6.0, 0.5]), 28.5);
//!
//! // Outside the grid, extrapolate linearly or hold the edge value
//! assert_eq!(table.get_value([12.0, 0.0]), 48.0);
//! table.set_extrapolation(Extrapolation::Clamp);
//! assert_eq!(table.get_value([12.0, 0.0]), 40.0);
//! ```
//!
//! # Example: Registry of Mixed Dimensionality
//! ```rust
//! use lutn::{AxisSet, Table, TableRegistry};
//!
//! let mut tables = TableRegistry::<&str>::new();
//! let one = AxisSet::new([vec![0.0_f64, 1.0]]).unwrap();
//! let two = AxisSet::new([vec![0.0_f64, 1.0], vec![0.0, 2.0]]).unwrap();
//! tables.put("thrust", Table::sample(one, |[x]| 2.0 * x).unwrap());
//! tables.put("thrust", Table::sample(two, |[x, y]| x + y).unwrap());
//!
//! // Dimensionality is selected by the number of coordinates
//! assert_eq!(tables.lookup("thrust", &[0.5]).unwrap(), 1.0);
//! assert_eq!(tables.lookup("thrust", &[0.5, 1.0]).unwrap(), 1.5);
//! ```
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod axis;
pub mod error;
pub mod grid;
pub mod io;
pub mod multilinear;
pub mod registry;
pub mod search;
pub mod table;
pub mod utils;
pub mod variables;

pub use axis::{Axis, AxisSet};
pub use error::{Result, TableError};
pub use grid::Grid;
pub use registry::{DynTable, TableRegistry};
pub use search::{Bracket, Extrapolation};
pub use table::Table;
pub use variables::Variables;

#[cfg(test)]
pub(crate) mod testing;
