//! Line-oriented text format for axis sets and grids.
//!
//! ```text
//! Dim0 = 2 6 10
//! Dim1 = 0 1
//!
//! 8 17
//! 24 33
//! 40 49
//! ```
//!
//! Each axis is one `Dim<i> = ...` line. The grid follows as one line per
//! innermost row, in C order. For grids of more than two dimensions, each
//! slice along a dimension of rank K > 2 is preceded by a `// K-D (i)` comment
//! line. Blank lines and `//` comments in the grid section are ignored on read.
//!
//! Values are written with the shortest representation that parses back to
//! the same number, so writing and reading a table reproduces it exactly.
use core::fmt::Display;
use core::str::FromStr;
use std::io::{Read, Write};

use itertools::Itertools;
use num_traits::Float;

use crate::axis::AxisSet;
use crate::error::{Result, TableError};
use crate::grid::Grid;
use crate::table::Table;

/// Write axes and grid in the text layout.
///
/// # Errors
/// * If the axis lengths and grid extents disagree
/// * If writing fails
pub fn write<T, W, const N: usize>(mut w: W, axes: &AxisSet<T, N>, grid: &Grid<T, N>) -> Result<()>
where
    T: Float + Display,
    W: Write,
{
    if axes.lengths() != grid.dims() {
        return Err(TableError::ShapeMismatch {
            expected: axes.lengths().to_vec(),
            found: grid.dims().to_vec(),
        });
    }
    for (i, axis) in axes.iter().enumerate() {
        writeln!(w, "Dim{i} = {}", axis.as_slice().iter().join(" "))?;
    }
    writeln!(w)?;
    write_block(&mut w, grid.values(), &grid.dims())
}

/// Write one block of values spanning `dims`
fn write_block<T: Display, W: Write>(w: &mut W, vals: &[T], dims: &[usize]) -> Result<()> {
    if dims.len() == 1 {
        writeln!(w, "{}", vals.iter().join(" "))?;
        return Ok(());
    }
    let rank = dims.len();
    let stride: usize = dims[1..].iter().product();
    for (i, block) in vals.chunks(stride).enumerate() {
        if rank > 2 {
            writeln!(w, "// {rank}-D ({i})")?;
        }
        write_block(w, block, &dims[1..])?;
    }
    Ok(())
}

/// Render axes and grid to a string in the text layout.
///
/// # Errors
/// * If the axis lengths and grid extents disagree
pub fn to_string<T, const N: usize>(axes: &AxisSet<T, N>, grid: &Grid<T, N>) -> Result<String>
where
    T: Float + Display,
{
    let mut buf = Vec::new();
    write(&mut buf, axes, grid)?;
    String::from_utf8(buf).map_err(|e| TableError::Parse {
        line: 0,
        message: e.to_string(),
    })
}

/// Read axes and grid from a reader.
///
/// # Errors
/// * If reading fails
/// * If the text is malformed or does not describe an `N`-dimensional table
pub fn read<T, R, const N: usize>(mut r: R) -> Result<(AxisSet<T, N>, Grid<T, N>)>
where
    T: Float + FromStr,
    <T as FromStr>::Err: Display,
    R: Read,
{
    let mut text = String::new();
    r.read_to_string(&mut text)?;
    parse(&text)
}

/// Parse axes and grid from text.
///
/// # Errors
/// * If an axis line is missing, misnamed, empty, or has an unparsable value
/// * If a grid row has the wrong length or an unparsable value
/// * If the number of grid rows does not match the axes
pub fn parse<T, const N: usize>(text: &str) -> Result<(AxisSet<T, N>, Grid<T, N>)>
where
    T: Float + FromStr,
    <T as FromStr>::Err: Display,
{
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    // Axes
    let mut raw: [Vec<T>; N] = core::array::from_fn(|_| Vec::new());
    for (i, axis) in raw.iter_mut().enumerate() {
        let (lineno, line) = lines.next().ok_or_else(|| TableError::Parse {
            line: 0,
            message: format!("missing Dim{i}"),
        })?;
        let err = |message: String| TableError::Parse {
            line: lineno,
            message,
        };
        let (name, vals) = line
            .split_once('=')
            .ok_or_else(|| err(format!("expected `Dim{i} = ...`")))?;
        if name.trim() != format!("Dim{i}") {
            return Err(err(format!("expected Dim{i}, found {}", name.trim())));
        }
        *axis = parse_values::<T>(vals, lineno)?;
        if axis.is_empty() {
            return Err(err(format!("Dim{i} has no values")));
        }
    }
    let axes = AxisSet::new(raw)?;
    let dims = axes.lengths();

    // Grid rows
    let row_len = dims[N - 1];
    let nrows: usize = dims[..N - 1].iter().product();
    let mut vals = Vec::with_capacity(nrows * row_len);
    let mut rows = 0;
    for (lineno, line) in lines.filter(|(_, line)| !line.starts_with("//")) {
        let row: Vec<T> = parse_values(line, lineno)?;
        if row.len() != row_len {
            return Err(TableError::Parse {
                line: lineno,
                message: format!("expected {row_len} values, found {}", row.len()),
            });
        }
        if rows == nrows {
            return Err(TableError::Parse {
                line: lineno,
                message: format!("more than {nrows} rows"),
            });
        }
        vals.extend(row);
        rows += 1;
    }
    if rows != nrows {
        return Err(TableError::Parse {
            line: 0,
            message: format!("expected {nrows} rows, found {rows}"),
        });
    }

    let grid = Grid::new(dims, vals)?;
    Ok((axes, grid))
}

fn parse_values<T>(line: &str, lineno: usize) -> Result<Vec<T>>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<T>().map_err(|e| TableError::Parse {
                line: lineno,
                message: format!("{tok:?}: {e}"),
            })
        })
        .collect()
}

impl<T, const N: usize> Table<T, N>
where
    T: Float + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    /// Build a table from the text layout.
    ///
    /// # Errors
    /// * If the text is malformed or does not describe an `N`-dimensional table
    pub fn from_text(text: &str) -> Result<Self> {
        let (axes, grid) = parse(text)?;
        Self::new(axes, grid)
    }

    /// Render this table's axes and grid in the text layout.
    ///
    /// # Errors
    /// * Not expected for a valid table; shares the error path of [`to_string`]
    pub fn to_text(&self) -> Result<String> {
        to_string(self.axes(), self.grid())
    }
}
