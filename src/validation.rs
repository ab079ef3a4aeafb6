use crate::inn::{Inn, InnKind};
use crate::normalization::normalize;
use crate::secondary_validation::{
    RussianIndividualInnChecksum, RussianOrganizationInnChecksum, Validator,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InnValidationError {
    #[error("INN must contain only digits, found {character:?}")]
    NonDigitCharacter { character: char },

    #[error(
        "INN must contain 10 digits (organizations) or 12 digits (individuals), found {length}"
    )]
    InvalidLength { length: usize },

    #[error("INN checksum does not match")]
    ChecksumMismatch,
}

/// Reason tag of an [`InnValidationError`], without the details.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum InvalidReason {
    NonDigitCharacter,
    InvalidLength,
    ChecksumMismatch,
}

impl InnValidationError {
    pub fn reason(&self) -> InvalidReason {
        match self {
            InnValidationError::NonDigitCharacter { .. } => InvalidReason::NonDigitCharacter,
            InnValidationError::InvalidLength { .. } => InvalidReason::InvalidLength,
            InnValidationError::ChecksumMismatch => InvalidReason::ChecksumMismatch,
        }
    }
}

/// Checks that a candidate is a valid INN and returns it normalized.
///
/// Whitespace and dashes are ignored. The checks run in order (digits only,
/// then length, then check digits) and the first failing one decides the
/// error. For a 12 digit INN both check digits must match and either failing
/// is reported as [`InnValidationError::ChecksumMismatch`].
pub fn validate_inn(candidate: &str) -> Result<Inn, InnValidationError> {
    let normalized = normalize(candidate);

    if let Some(character) = normalized.chars().find(|c| !c.is_ascii_digit()) {
        return Err(InnValidationError::NonDigitCharacter { character });
    }

    // Only ASCII digits are left, so the byte length is the digit count.
    let kind = InnKind::from_digit_count(normalized.len()).ok_or(
        InnValidationError::InvalidLength {
            length: normalized.len(),
        },
    )?;

    let checksum_matches = match kind {
        InnKind::Organization => RussianOrganizationInnChecksum.is_valid_match(&normalized),
        InnKind::Individual => RussianIndividualInnChecksum.is_valid_match(&normalized),
    };
    if !checksum_matches {
        return Err(InnValidationError::ChecksumMismatch);
    }

    Ok(Inn::new_unchecked(normalized.into_owned()))
}

/// Validates a batch of candidates in parallel. Verdicts come back in input order.
pub fn validate_all<S>(candidates: &[S]) -> Vec<Result<Inn, InnValidationError>>
where
    S: AsRef<str> + Sync,
{
    candidates
        .par_iter()
        .map(|candidate| validate_inn(candidate.as_ref()))
        .collect()
}
