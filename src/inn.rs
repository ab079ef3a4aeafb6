use crate::validation::{validate_inn, InnValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const ORGANIZATION_INN_LENGTH: usize = 10;
pub const INDIVIDUAL_INN_LENGTH: usize = 12;

/// Who an INN was issued to, derived from its number of digits.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InnKind {
    /// Legal entity, 10 digits with one check digit.
    Organization,
    /// Individual or sole proprietor, 12 digits with two check digits.
    Individual,
}

impl InnKind {
    pub fn from_digit_count(digit_count: usize) -> Option<Self> {
        match digit_count {
            ORGANIZATION_INN_LENGTH => Some(InnKind::Organization),
            INDIVIDUAL_INN_LENGTH => Some(InnKind::Individual),
            _ => None,
        }
    }

    pub const fn digit_count(self) -> usize {
        match self {
            InnKind::Organization => ORGANIZATION_INN_LENGTH,
            InnKind::Individual => INDIVIDUAL_INN_LENGTH,
        }
    }

    pub const fn check_digit_count(self) -> usize {
        match self {
            InnKind::Organization => 1,
            InnKind::Individual => 2,
        }
    }
}

/// A validated INN: 10 or 12 ASCII digits with matching check digits.
///
/// The only ways to build one go through [`validate_inn`], so holding an `Inn`
/// is proof that the code passed every check. It serializes as its normalized
/// string and deserializing validates again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Inn(String);

impl Inn {
    /// Caller guarantees `code` already passed validation.
    pub(crate) fn new_unchecked(code: String) -> Self {
        Inn(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> InnKind {
        if self.0.len() == INDIVIDUAL_INN_LENGTH {
            InnKind::Individual
        } else {
            InnKind::Organization
        }
    }

    /// The trailing one or two check digits.
    pub fn check_digits(&self) -> &str {
        &self.0[self.0.len() - self.kind().check_digit_count()..]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Inn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Inn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Inn {
    type Err = InnValidationError;

    fn from_str(candidate: &str) -> Result<Self, Self::Err> {
        validate_inn(candidate)
    }
}

impl TryFrom<String> for Inn {
    type Error = InnValidationError;

    fn try_from(candidate: String) -> Result<Self, Self::Error> {
        validate_inn(&candidate)
    }
}

impl TryFrom<&str> for Inn {
    type Error = InnValidationError;

    fn try_from(candidate: &str) -> Result<Self, Self::Error> {
        validate_inn(candidate)
    }
}

impl From<Inn> for String {
    fn from(inn: Inn) -> Self {
        inn.0
    }
}
