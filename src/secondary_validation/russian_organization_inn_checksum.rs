use crate::inn::ORGANIZATION_INN_LENGTH;
use crate::secondary_validation::{collect_digits, inn_control_digit, Validator};

pub struct RussianOrganizationInnChecksum;

const CHECKSUM_WEIGHTS: &[u32; ORGANIZATION_INN_LENGTH] = &[2, 4, 10, 3, 5, 9, 4, 6, 8, 0];

impl Validator for RussianOrganizationInnChecksum {
    // https://ru.wikipedia.org/wiki/Идентификационный_номер_налогоплательщика
    fn is_valid_match(&self, candidate: &str) -> bool {
        let Some(digits) = collect_digits::<ORGANIZATION_INN_LENGTH>(candidate) else {
            return false;
        };
        inn_control_digit(&digits, CHECKSUM_WEIGHTS) == digits[ORGANIZATION_INN_LENGTH - 1]
    }
}
