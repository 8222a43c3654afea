//! A container of named values of mixed types, grouped by type.
//!
//! ```rust
//! use lutn::Variables;
//!
//! let mut car = Variables::new();
//! car.emplace("model", "coupe".to_string());
//! car.emplace("cylinders", 4_i32);
//! car.emplace("horsepower", 267.8_f64);
//!
//! assert_eq!(car.find::<i32>("cylinders").unwrap(), 4);
//! assert!(car.find::<f64>("cylinders").is_err());
//! ```
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use crate::error::{Result, TableError};

/// Named values, stored in insertion order within each type.
#[derive(Default)]
pub struct Variables {
    vars: HashMap<TypeId, Vec<(String, Box<dyn Any + Send>)>>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value. Names are not required to be unique;
    /// `find` returns the first match.
    pub fn emplace<T: Any + Send>(&mut self, name: impl Into<String>, value: T) {
        self.vars
            .entry(TypeId::of::<T>())
            .or_default()
            .push((name.into(), Box::new(value)));
    }

    /// Look up a value of type `T` by name.
    ///
    /// # Errors
    /// * `NoVariablesOfType` if no value of type `T` has been stored
    /// * `VariableNotFound` if none of them is named `name`
    pub fn find<T: Any + Clone>(&self, name: &str) -> Result<T> {
        let vars = self
            .vars
            .get(&TypeId::of::<T>())
            .ok_or(TableError::NoVariablesOfType(type_name::<T>()))?;
        vars.iter()
            .filter(|(n, _)| n == name)
            .find_map(|(_, v)| v.downcast_ref::<T>())
            .cloned()
            .ok_or_else(|| TableError::VariableNotFound(name.to_string()))
    }

    /// All values of type `T` with their names, in insertion order.
    ///
    /// # Errors
    /// * `NoVariablesOfType` if no value of type `T` has been stored
    pub fn find_all<T: Any + Clone>(&self) -> Result<Vec<(String, T)>> {
        let vars = self
            .vars
            .get(&TypeId::of::<T>())
            .ok_or(TableError::NoVariablesOfType(type_name::<T>()))?;
        Ok(vars
            .iter()
            .filter_map(|(n, v)| v.downcast_ref::<T>().map(|v| (n.clone(), v.clone())))
            .collect())
    }

    /// Total number of stored values
    pub fn len(&self) -> usize {
        self.vars.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
