//! Documents exchanged with the circuit toolchain
//!
//! [`InputDocument`] is the `input.json` handed to the witness calculator:
//! a flat, ordered map of signal name to decimal field element.
//! [`WitnessDocument`] is the exported witness, a JSON array of decimal
//! strings where index 0 is the constant `1` signal and index 1 is the
//! circuit output.

use std::fs;
use std::path::Path;

use account_hash::hasher::{decimal_to_field, field_to_decimal, HashInputs};
use ark_bn254::Fr;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::error::OracleError;

/// Witness index of the circuit's public output.
pub const COMMITMENT_INDEX: usize = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputDocument {
    signals: Vec<(String, String)>,
}

impl InputDocument {
    pub fn from_inputs(inputs: &HashInputs) -> Self {
        Self {
            signals: inputs
                .iter()
                .map(|input| (input.name.to_string(), field_to_decimal(&input.value)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.signals
            .iter()
            .find(|(signal, _)| signal == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.signals.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn to_json(&self) -> Result<String, OracleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), OracleError> {
        fs::write(path, self.to_json()?).map_err(|err| OracleError::io(path, err))
    }
}

// Field order is significant to readers of the document, so serialize
// the pairs directly instead of going through a map type.
impl Serialize for InputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.signals.len()))?;
        for (name, value) in &self.signals {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct WitnessDocument(Vec<String>);

impl WitnessDocument {
    pub fn parse(text: &str) -> Result<Self, OracleError> {
        serde_json::from_str(text)
            .map_err(|err| OracleError::MalformedWitness(format!("not a JSON string array: {err}")))
    }

    pub fn read(path: &Path) -> Result<Self, OracleError> {
        let text = fs::read_to_string(path).map_err(|err| OracleError::io(path, err))?;
        Self::parse(&text)
    }

    pub fn signals(&self) -> &[String] {
        &self.0
    }

    /// The circuit output as a field element.
    pub fn commitment(&self) -> Result<Fr, OracleError> {
        let raw = self.0.get(COMMITMENT_INDEX).ok_or_else(|| {
            OracleError::MalformedWitness(format!(
                "expected at least {} signals, found {}",
                COMMITMENT_INDEX + 1,
                self.0.len()
            ))
        })?;
        decimal_to_field(raw).map_err(|err| {
            OracleError::MalformedWitness(format!("signal {COMMITMENT_INDEX} ({raw:?}): {err}"))
        })
    }

    /// The circuit output as a normalized decimal string.
    pub fn commitment_decimal(&self) -> Result<String, OracleError> {
        self.commitment().map(|value| field_to_decimal(&value))
    }
}
