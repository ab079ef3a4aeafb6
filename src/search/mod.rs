pub mod metrics;

use crate::directory::company::CompanyRecord;
use crate::directory::{DirectoryLookup, LookupError};
use crate::observability::labels::{Labels, NO_LABEL};
use crate::search::metrics::SearchMetrics;
use crate::validation::{validate_inn, InnValidationError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    InvalidInn(#[from] InnValidationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Validates a candidate INN and looks the company up in a directory.
///
/// Invalid candidates never reach the directory. Lookup failures are returned
/// as they are, without retries or placeholder data.
pub struct InnSearch<L> {
    lookup: L,
    metrics: SearchMetrics,
}

impl<L: DirectoryLookup> InnSearch<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_labels(lookup, &NO_LABEL)
    }

    pub fn with_labels(lookup: L, labels: &Labels) -> Self {
        InnSearch {
            lookup,
            metrics: SearchMetrics::new(labels),
        }
    }

    pub fn search(&self, candidate: &str) -> Result<CompanyRecord, SearchError> {
        let verdict = validate_inn(candidate);
        self.metrics.record_validation(&verdict);
        let inn = verdict?;

        let result = self.lookup.lookup(&inn);
        self.metrics.record_lookup(&result);
        result.map_err(SearchError::Lookup)
    }

    pub fn directory(&self) -> &L {
        &self.lookup
    }
}
