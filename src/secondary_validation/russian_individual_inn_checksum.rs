use crate::inn::INDIVIDUAL_INN_LENGTH;
use crate::secondary_validation::{collect_digits, inn_control_digit, Validator};

pub struct RussianIndividualInnChecksum;

// The first check digit covers the first 11 digits, the second one all 12.
const FIRST_CHECKSUM_WEIGHTS: &[u32; INDIVIDUAL_INN_LENGTH - 1] =
    &[7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];
const SECOND_CHECKSUM_WEIGHTS: &[u32; INDIVIDUAL_INN_LENGTH] =
    &[3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];

impl Validator for RussianIndividualInnChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let Some(digits) = collect_digits::<INDIVIDUAL_INN_LENGTH>(candidate) else {
            return false;
        };
        inn_control_digit(&digits, FIRST_CHECKSUM_WEIGHTS) == digits[INDIVIDUAL_INN_LENGTH - 2]
            && inn_control_digit(&digits, SECOND_CHECKSUM_WEIGHTS)
                == digits[INDIVIDUAL_INN_LENGTH - 1]
    }
}
