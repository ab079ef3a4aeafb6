//! Company directory lookups keyed by a validated INN.
//!
//! The crate does no network I/O itself. [`DadataDirectory`] speaks the DaData
//! `findById/party` wire format but sends requests through a caller supplied
//! [`HttpTransport`].

pub mod company;
pub mod config;
pub mod dadata;

use crate::directory::company::CompanyRecord;
use crate::inn::Inn;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LookupError {
    #[error("directory API key is not configured")]
    MissingApiKey,

    #[error("no company is registered under this INN")]
    NotFound,

    #[error("unexpected HTTP status code {0}")]
    UnexpectedStatus(u16),

    #[error("error making HTTP request: {0}")]
    Transport(String),

    #[error("invalid directory response: {0}")]
    InvalidResponse(String),
}

impl LookupError {
    /// The directory itself failed, as opposed to a missing company or a
    /// missing API key.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            LookupError::UnexpectedStatus(_)
                | LookupError::Transport(_)
                | LookupError::InvalidResponse(_)
        )
    }
}

pub trait DirectoryLookup: Send + Sync {
    fn lookup(&self, inn: &Inn) -> Result<CompanyRecord, LookupError>;
}

impl<L: DirectoryLookup + ?Sized> DirectoryLookup for Box<L> {
    fn lookup(&self, inn: &Inn) -> Result<CompanyRecord, LookupError> {
        (**self).lookup(inn)
    }
}

impl<L: DirectoryLookup + ?Sized> DirectoryLookup for Arc<L> {
    fn lookup(&self, inn: &Inn) -> Result<CompanyRecord, LookupError> {
        (**self).lookup(inn)
    }
}
