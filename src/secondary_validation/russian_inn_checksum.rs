use crate::inn::{INDIVIDUAL_INN_LENGTH, ORGANIZATION_INN_LENGTH};
use crate::secondary_validation::{
    RussianIndividualInnChecksum, RussianOrganizationInnChecksum, Validator,
};

/// Accepts both organization and individual INNs, picking the checksum from
/// the number of digits.
pub struct RussianInnChecksum;

impl Validator for RussianInnChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        match candidate.chars().filter(char::is_ascii_digit).count() {
            ORGANIZATION_INN_LENGTH => RussianOrganizationInnChecksum.is_valid_match(candidate),
            INDIVIDUAL_INN_LENGTH => RussianIndividualInnChecksum.is_valid_match(candidate),
            _ => false,
        }
    }
}
