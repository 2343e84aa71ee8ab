//! Ordered hash inputs.
//!
//! Commitments are Poseidon hashes over an ordered list whose length can
//! depend on the record (a frozen token account hashes one extra element).
//! `HashInputs` keeps that list variable-length: an omitted input is simply
//! absent. A zero-filled slot would be a different hash.

use ark_bn254::Fr;

use crate::error::HashError;
use crate::hasher::poseidon::poseidon;

/// A single named hash input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashInput {
    pub name: &'static str,
    pub value: Fr,
}

/// Ordered, named list of field elements fed to Poseidon.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashInputs {
    inputs: Vec<HashInput>,
}

impl HashInputs {
    /// Create an empty input list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with room for `capacity` inputs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inputs: Vec::with_capacity(capacity),
        }
    }

    /// Append an input
    pub fn push(mut self, name: &'static str, value: Fr) -> Self {
        self.inputs.push(HashInput { name, value });
        self
    }

    /// Append an input only when `include` holds
    pub fn push_if(self, include: bool, name: &'static str, value: Fr) -> Self {
        if include {
            self.push(name, value)
        } else {
            self
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HashInput> {
        self.inputs.iter()
    }

    /// Input names in hashing order
    pub fn names(&self) -> Vec<&'static str> {
        self.inputs.iter().map(|input| input.name).collect()
    }

    /// Input values in hashing order
    pub fn values(&self) -> Vec<Fr> {
        self.inputs.iter().map(|input| input.value).collect()
    }

    /// Value of the named input, if present
    pub fn get(&self, name: &str) -> Option<Fr> {
        self.inputs
            .iter()
            .find(|input| input.name == name)
            .map(|input| input.value)
    }

    /// Poseidon over the values, in order.
    pub fn hash(&self) -> Result<Fr, HashError> {
        poseidon(&self.values())
    }
}

impl<'a> IntoIterator for &'a HashInputs {
    type Item = &'a HashInput;
    type IntoIter = std::slice::Iter<'a, HashInput>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
