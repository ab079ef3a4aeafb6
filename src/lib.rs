// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod directory;
mod inn;
mod normalization;
mod observability;
mod search;
mod secondary_validation;
mod validation;

// This is the public API of the INN check library
pub use directory::company::{
    CompanyAddress, CompanyName, CompanyRecord, CompanyState, CompanyStatus, Management,
};
pub use directory::config::{
    DirectoryConfig, RequestHeader, DEFAULT_DADATA_ENDPOINT, DEFAULT_HTTPS_TIMEOUT_SEC,
};
pub use directory::dadata::{
    DadataDirectory, FindByIdResponse, HttpRequest, HttpResponse, HttpTransport, Suggestion,
};
pub use directory::{DirectoryLookup, LookupError};
pub use inn::{Inn, InnKind, INDIVIDUAL_INN_LENGTH, ORGANIZATION_INN_LENGTH};
pub use normalization::normalize;
pub use observability::labels::Labels;
pub use search::{InnSearch, SearchError};
pub use secondary_validation::{
    RussianIndividualInnChecksum, RussianInnChecksum, RussianOrganizationInnChecksum,
    SecondaryValidator, Validator,
};
pub use validation::{validate_all, validate_inn, InnValidationError, InvalidReason};
