//! # store
//!
//! The variables of a session. Values are only written by assignments and
//! are kept until the store is dropped.

use std::collections::HashMap;

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur when writing to a [`VariableStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The name is not made of ASCII letters only.
    #[error("{name:?} is not a valid variable name")]
    InvalidName { name: String },
}

/// Returns true if `s` is a valid variable name, that is one or more ASCII
/// letters.
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Maps variable names to their values. Names are case-sensitive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableStore {
    vars: HashMap<String, BigInt>,
}

impl VariableStore {
    /// Creates a new, empty store.
    pub fn new() -> VariableStore {
        VariableStore {
            vars: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Stores `val` under `name`, replacing any previous value.
    ///
    /// Returns [`Err`] without touching the store if `name` is not an
    /// identifier.
    pub fn set(&mut self, name: &str, val: BigInt) -> Result<(), StoreError> {
        if !is_identifier(name) {
            return Err(StoreError::InvalidName {
                name: name.to_string(),
            });
        }

        self.vars.insert(name.to_string(), val);
        Ok(())
    }

    /// Iterates over all variables, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        let mut vars: Vec<(&str, &BigInt)> =
            self.vars.iter().map(|(k, v)| (k.as_str(), v)).collect();
        vars.sort_by(|a, b| a.0.cmp(b.0));
        vars.into_iter()
    }
}
