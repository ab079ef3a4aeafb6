use crate::directory::company::CompanyRecord;
use crate::directory::config::DirectoryConfig;
use crate::directory::{DirectoryLookup, LookupError};
use crate::inn::Inn;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub endpoint: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a POST request. Implemented by the caller with whatever HTTP client
/// it uses; an `Err` is a request that got no response at all.
pub trait HttpTransport: Send + Sync {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, String>;
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FindByIdResponse {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Suggestion {
    #[serde(default)]
    pub value: Option<String>,
    pub data: CompanyRecord,
}

impl FindByIdResponse {
    pub fn into_first_record(self) -> Option<CompanyRecord> {
        self.suggestions.into_iter().next().map(|s| s.data)
    }
}

/// [`DirectoryLookup`] against the DaData `findById/party` API.
pub struct DadataDirectory<T> {
    config: DirectoryConfig,
    transport: T,
}

impl<T: HttpTransport> DadataDirectory<T> {
    pub fn new(config: DirectoryConfig, transport: T) -> Self {
        DadataDirectory { config, transport }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_request(&self, inn: &Inn, api_key: &str) -> HttpRequest {
        let body = serde_json::json!({ "query": inn.as_str() }).to_string();
        HttpRequest {
            endpoint: self.config.endpoint.clone(),
            headers: self
                .config
                .request_headers
                .iter()
                .map(|header| (header.key.clone(), header.get_value_with_api_key(api_key)))
                .collect(),
            body,
            timeout: self.config.timeout,
        }
    }
}

impl<T: HttpTransport> DirectoryLookup for DadataDirectory<T> {
    fn lookup(&self, inn: &Inn) -> Result<CompanyRecord, LookupError> {
        let api_key = self
            .config
            .effective_api_key()
            .ok_or(LookupError::MissingApiKey)?;

        let request = self.build_request(inn, api_key);
        let response = self
            .transport
            .post(&request)
            .map_err(LookupError::Transport)?;

        if !self.config.is_valid_status(response.status) {
            return Err(LookupError::UnexpectedStatus(response.status));
        }

        let response: FindByIdResponse = serde_json::from_str(&response.body)
            .map_err(|err| LookupError::InvalidResponse(err.to_string()))?;
        response.into_first_record().ok_or(LookupError::NotFound)
    }
}
