use crate::directory::company::CompanyRecord;
use crate::directory::LookupError;
use crate::inn::{Inn, InnKind};
use crate::observability::labels::Labels;
use crate::validation::{InnValidationError, InvalidReason};
use metrics::{counter, Counter};

const KIND: &str = "kind";
const REASON: &str = "reason";
const ERROR: &str = "error";

pub struct SearchMetrics {
    labels: Labels,
    pub valid_organization: Counter,
    pub valid_individual: Counter,
    pub invalid_non_digit_character: Counter,
    pub invalid_length: Counter,
    pub invalid_checksum: Counter,
    pub lookup_found: Counter,
    pub lookup_not_found: Counter,
}

impl SearchMetrics {
    pub fn new(labels: &Labels) -> Self {
        let valid = |kind: InnKind| {
            let kind: &'static str = kind.into();
            counter!(
                "inn.validation.valid",
                labels.clone_with_labels(&[(KIND, kind)])
            )
        };
        let invalid = |reason: InvalidReason| {
            let reason: &'static str = reason.into();
            counter!(
                "inn.validation.invalid",
                labels.clone_with_labels(&[(REASON, reason)])
            )
        };

        SearchMetrics {
            labels: labels.clone(),
            valid_organization: valid(InnKind::Organization),
            valid_individual: valid(InnKind::Individual),
            invalid_non_digit_character: invalid(InvalidReason::NonDigitCharacter),
            invalid_length: invalid(InvalidReason::InvalidLength),
            invalid_checksum: invalid(InvalidReason::ChecksumMismatch),
            lookup_found: counter!("inn.lookup.found", labels.clone()),
            lookup_not_found: counter!("inn.lookup.not_found", labels.clone()),
        }
    }

    pub fn record_validation(&self, verdict: &Result<Inn, InnValidationError>) {
        match verdict {
            Ok(inn) => match inn.kind() {
                InnKind::Organization => self.valid_organization.increment(1),
                InnKind::Individual => self.valid_individual.increment(1),
            },
            Err(err) => match err.reason() {
                InvalidReason::NonDigitCharacter => self.invalid_non_digit_character.increment(1),
                InvalidReason::InvalidLength => self.invalid_length.increment(1),
                InvalidReason::ChecksumMismatch => self.invalid_checksum.increment(1),
            },
        }
    }

    pub fn record_lookup(&self, result: &Result<CompanyRecord, LookupError>) {
        match result {
            Ok(_) => self.lookup_found.increment(1),
            Err(LookupError::NotFound) => self.lookup_not_found.increment(1),
            Err(err) => {
                let error: &'static str = err.into();
                counter!(
                    "inn.lookup.error",
                    self.labels.clone_with_labels(&[(ERROR, error)])
                )
                .increment(1);
            }
        }
    }
}
