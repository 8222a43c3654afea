//! Name-keyed storage for tables of differing dimensionality.
//!
//! Tables are stored behind the [`DynTable`] interface, grouped first by
//! dimension and then by key. A lookup selects the dimension from the number
//! of coordinates supplied, so tables of different dimensionality can share
//! one key namespace.
//!
//! ```rust
//! use lutn::{AxisSet, Table, TableRegistry};
//!
//! let mut tables = TableRegistry::<String>::new();
//!
//! let drag = AxisSet::new([vec![0.0_f64, 1.0, 2.0]]).unwrap();
//! tables.put("drag".to_string(), Table::sample(drag, |[m]| 0.5 * m).unwrap());
//!
//! let lift = AxisSet::new([vec![0.0_f64, 10.0], vec![0.0, 1.0]]).unwrap();
//! tables.put("lift".to_string(), Table::sample(lift, |[a, m]| a + m).unwrap());
//!
//! assert_eq!(tables.lookup("drag", &[1.5]).unwrap(), 0.75);
//! assert_eq!(tables.lookup("lift", &[5.0, 0.5]).unwrap(), 5.5);
//! assert!(tables.lookup("lift", &[5.0]).is_err());
//! ```
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Debug;

use log::{debug, warn};
use num_traits::Float;

use crate::error::{Result, TableError};
use crate::table::Table;

/// Dimension-erased view of a [`Table`].
pub trait DynTable<T>: Send {
    /// Number of coordinates per lookup
    fn ndims(&self) -> usize;

    /// Interpolate the value at a point given as a slice.
    ///
    /// # Errors
    /// * If `x.len()` differs from `ndims()`
    fn get_value_dyn(&mut self, x: &[T]) -> Result<T>;

    /// Discard cached brackets
    fn reset_cache(&mut self);
}

impl<T: Float + Send, const N: usize> DynTable<T> for Table<T, N> {
    fn ndims(&self) -> usize {
        N
    }

    #[inline]
    fn get_value_dyn(&mut self, x: &[T]) -> Result<T> {
        let x: [T; N] = x.try_into().map_err(|_| TableError::ArityMismatch {
            expected: N,
            found: x.len(),
        })?;
        Ok(self.get_value(x))
    }

    fn reset_cache(&mut self) {
        Table::reset_cache(self)
    }
}

/// A collection of tables keyed by (dimension, key).
///
/// Lookups update the cache of the selected table, so they take `&mut self`.
pub struct TableRegistry<K, T = f64> {
    tables: BTreeMap<usize, BTreeMap<K, Box<dyn DynTable<T>>>>,
}

impl<K, T> Default for TableRegistry<K, T> {
    fn default() -> Self {
        Self {
            tables: BTreeMap::new(),
        }
    }
}

impl<K, T> TableRegistry<K, T>
where
    K: Ord + Debug,
    T: Float + Send + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a table under `key` at its own dimensionality,
    /// returning any table it replaced.
    pub fn put<const N: usize>(
        &mut self,
        key: K,
        table: Table<T, N>,
    ) -> Option<Box<dyn DynTable<T>>> {
        self.put_dyn(key, Box::new(table))
    }

    /// Store an already-erased table.
    pub fn put_dyn(&mut self, key: K, table: Box<dyn DynTable<T>>) -> Option<Box<dyn DynTable<T>>> {
        let n = table.ndims();
        debug!("Storing {n}-D table {key:?}");
        let replaced = self.tables.entry(n).or_default().insert(key, table);
        if replaced.is_some() {
            warn!("Replaced existing {n}-D table");
        }
        replaced
    }

    /// Interpolate the table stored under `key` at `x`.
    /// The table's dimensionality is taken from `x.len()`.
    ///
    /// # Errors
    /// * `UnknownKey` if no table of any dimensionality is stored under `key`
    /// * `ArityMismatch` if `key` exists only at other dimensionalities
    pub fn lookup<Q>(&mut self, key: &Q, x: &[T]) -> Result<T>
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        if let Some(table) = self
            .tables
            .get_mut(&x.len())
            .and_then(|tables| tables.get_mut(key))
        {
            return table.get_value_dyn(x);
        }

        match self.dimensions_of(key).first() {
            Some(&expected) => Err(TableError::ArityMismatch {
                expected,
                found: x.len(),
            }),
            None => Err(TableError::UnknownKey(format!("{key:?}"))),
        }
    }

    /// Mutable access to the erased table at (`ndims`, `key`)
    pub fn get_mut<Q>(&mut self, key: &Q, ndims: usize) -> Option<&mut (dyn DynTable<T> + 'static)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tables
            .get_mut(&ndims)
            .and_then(|tables| tables.get_mut(key))
            .map(|t| &mut **t)
    }

    pub fn remove<Q>(&mut self, key: &Q, ndims: usize) -> Option<Box<dyn DynTable<T>>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let tables = self.tables.get_mut(&ndims)?;
        let removed = tables.remove(key);
        if tables.is_empty() {
            self.tables.remove(&ndims);
        }
        removed
    }

    pub fn contains<Q>(&self, key: &Q, ndims: usize) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tables
            .get(&ndims)
            .is_some_and(|tables| tables.contains_key(key))
    }

    /// Dimensionalities at which `key` is stored, ascending
    pub fn dimensions_of<Q>(&self, key: &Q) -> Vec<usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tables
            .iter()
            .filter(|(_, tables)| tables.contains_key(key))
            .map(|(&n, _)| n)
            .collect()
    }

    /// Keys stored at one dimensionality, in order
    pub fn keys(&self, ndims: usize) -> impl Iterator<Item = &K> {
        self.tables.get(&ndims).into_iter().flat_map(|t| t.keys())
    }

    /// Discard cached brackets in every table
    pub fn reset_caches(&mut self) {
        self.tables
            .values_mut()
            .flat_map(|t| t.values_mut())
            .for_each(|t| t.reset_cache());
    }

    /// Total number of stored tables
    pub fn len(&self) -> usize {
        self.tables.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
