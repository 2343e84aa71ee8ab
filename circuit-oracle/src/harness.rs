//! Cross-validation of reference commitments against circuit evaluation

use account_hash::hasher::field_to_decimal;
use tracing::{info, info_span, warn};

use crate::case::CircuitCase;
use crate::error::OracleError;
use crate::toolchain::Toolchain;

pub const CIRCUIT_OUTPUT_CHECK: &str = "circuit output";
pub const PINNED_VALUE_CHECK: &str = "pinned expected value";

/// Outcome of a successful cross-validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossValidation {
    pub circuit: String,
    /// Agreed commitment, decimal
    pub commitment: String,
    pub pinned_checked: bool,
}

/// Check a case's reference commitment against its circuit and, when the
/// case pins one, against the hard-coded expected value.
///
/// The reference commitment is computed before the toolchain runs, so it
/// is logged even when the toolchain fails.
pub fn cross_validate<C: CircuitCase + ?Sized>(
    toolchain: &Toolchain,
    case: &C,
) -> Result<CrossValidation, OracleError> {
    let circuit = case.circuit();
    let span = info_span!("cross_validate", circuit);
    let _enter = span.enter();

    let reference = field_to_decimal(&case.reference_commitment()?);
    info!(%reference, "reference commitment");

    let witness = match toolchain.run(case) {
        Ok(witness) => witness,
        Err(err) => {
            warn!(%reference, error = %err, "circuit toolchain failed; reference commitment only");
            return Err(err);
        }
    };
    let output = witness.commitment_decimal()?;

    if output != reference {
        return Err(OracleError::AssertionMismatch {
            check: CIRCUIT_OUTPUT_CHECK,
            reference,
            observed: output.clone(),
            circuit: output,
        });
    }

    let pinned_checked = match case.expected() {
        Some(expected) => {
            let expected = normalize(expected);
            if expected != reference {
                return Err(OracleError::AssertionMismatch {
                    check: PINNED_VALUE_CHECK,
                    reference,
                    observed: expected,
                    circuit: output,
                });
            }
            true
        }
        None => false,
    };

    info!(commitment = %reference, pinned_checked, "circuit agrees with reference");
    Ok(CrossValidation {
        circuit: circuit.to_string(),
        commitment: reference,
        pinned_checked,
    })
}

// Leading zeros and surrounding whitespace are not significant.
fn normalize(decimal: &str) -> String {
    let trimmed = decimal.trim().trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
