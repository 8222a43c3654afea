//! Convenience methods for constructing axes and enumerating grid points
//! in a way that echoes, but does not exactly match, methods common in
//! scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint. A single point is just `start`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return (0..n).map(|_| start).collect();
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates `n` evenly spaced values beginning at `start`,
/// stepping by `(stop - start) / n`, so that `stop` itself is excluded.
pub fn make_range<T>(n: usize, start: T, stop: T) -> Vec<T>
where
    T: Float,
{
    if n == 0 {
        return Vec::new();
    }
    let dx: T = (stop - start) / T::from(n).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Generates a meshgrid in C ordering (x0, y0, z0, x0, y0, z1, ..., x0, yn, zn)
pub fn meshgrid<T>(x: Vec<&Vec<T>>) -> Vec<Vec<T>>
where
    T: Float,
{
    x.into_iter()
        .multi_cartesian_product()
        .map(|xx| xx.iter().map(|y| **y).collect())
        .collect()
}

/// Every multi-index of a grid with the given extents, in C ordering
pub fn grid_indices<const N: usize>(dims: [usize; N]) -> Vec<[usize; N]> {
    dims.iter()
        .map(|&n| 0..n)
        .multi_cartesian_product()
        .map(|ii| {
            let mut loc = [0_usize; N];
            loc.copy_from_slice(&ii);
            loc
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
        assert!(make_range(0, 2.0, 3.0).is_empty());
    }

    #[test]
    fn test_make_range_excludes_stop() {
        assert_eq!(make_range(4, 0.0, 1.0), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_meshgrid_order() {
        let x = vec![0.0, 1.0];
        let y = vec![2.0, 3.0, 4.0];
        let g = meshgrid(vec![&x, &y]);
        assert_eq!(g.len(), 6);
        assert_eq!(g[0], vec![0.0, 2.0]);
        assert_eq!(g[1], vec![0.0, 3.0]);
        assert_eq!(g[3], vec![1.0, 2.0]);
    }

    #[test]
    fn test_grid_indices_c_order() {
        let ii = grid_indices([2, 3]);
        assert_eq!(ii.len(), 6);
        assert_eq!(ii[0], [0, 0]);
        assert_eq!(ii[2], [0, 2]);
        assert_eq!(ii[3], [1, 0]);
        assert_eq!(ii[5], [1, 2]);
    }
}
