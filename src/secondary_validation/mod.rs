mod russian_individual_inn_checksum;
mod russian_inn_checksum;
mod russian_organization_inn_checksum;

pub use crate::secondary_validation::russian_individual_inn_checksum::RussianIndividualInnChecksum;
pub use crate::secondary_validation::russian_inn_checksum::RussianInnChecksum;
pub use crate::secondary_validation::russian_organization_inn_checksum::RussianOrganizationInnChecksum;
use serde::{Deserialize, Serialize};
use std::str::Chars;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

fn get_next_digit(chars: &mut Chars<'_>) -> Option<u32> {
    for char in chars.by_ref() {
        if let Some(digit) = char.to_digit(10) {
            return Some(digit);
        }
    }
    None
}

/// Collects exactly `N` digits from the input, skipping any other character.
/// Returns `None` if there are fewer or more than `N` digits.
fn collect_digits<const N: usize>(candidate: &str) -> Option<[u32; N]> {
    let mut chars = candidate.chars();
    let mut digits = [0; N];
    for digit in digits.iter_mut() {
        *digit = get_next_digit(&mut chars)?;
    }
    if get_next_digit(&mut chars).is_some() {
        return None;
    }
    Some(digits)
}

/// Control digit shared by every INN checksum: weighted sum mod 11, and a
/// remainder of 10 becomes 0.
#[inline]
fn inn_control_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();
    let control = sum % 11;
    if control > 9 {
        control % 10
    } else {
        control
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    RussianInnChecksum,
    RussianOrganizationInnChecksum,
    RussianIndividualInnChecksum,
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match self {
            SecondaryValidator::RussianInnChecksum => RussianInnChecksum.is_valid_match(candidate),
            SecondaryValidator::RussianOrganizationInnChecksum => {
                RussianOrganizationInnChecksum.is_valid_match(candidate)
            }
            SecondaryValidator::RussianIndividualInnChecksum => {
                RussianIndividualInnChecksum.is_valid_match(candidate)
            }
        }
    }
}
