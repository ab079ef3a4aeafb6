use serde::{Deserialize, Serialize};
use std::{ops::Range, time::Duration};

pub const DEFAULT_DADATA_ENDPOINT: &str =
    "https://suggestions.dadata.ru/suggestions/api/4_1/rs/findById/party";
pub const DEFAULT_HTTPS_TIMEOUT_SEC: u64 = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RequestHeader {
    pub key: String,
    // $API_KEY is a special keyword that will be replaced by the configured API key
    pub value: String,
}

impl RequestHeader {
    pub fn new(key: &str, value: &str) -> Self {
        RequestHeader {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }

    pub fn get_value_with_api_key(&self, api_key: &str) -> String {
        self.value.replace("$API_KEY", api_key)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub request_headers: Vec<RequestHeader>,
    pub valid_http_status_code: Vec<Range<u16>>,
    pub timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        DirectoryConfig {
            endpoint: DEFAULT_DADATA_ENDPOINT.to_string(),
            api_key: None,
            request_headers: vec![
                RequestHeader::new("Content-Type", "application/json"),
                RequestHeader::new("Accept", "application/json"),
                RequestHeader::new("Authorization", "Token $API_KEY"),
            ],
            valid_http_status_code: vec![200..300],
            timeout: Duration::from_secs(DEFAULT_HTTPS_TIMEOUT_SEC),
        }
    }
}

impl DirectoryConfig {
    pub fn new(api_key: &str) -> Self {
        DirectoryConfig::default().api_key(api_key)
    }

    pub fn endpoint(&self, endpoint: &str) -> Self {
        self.mutate_clone(|x| x.endpoint = endpoint.to_owned())
    }

    pub fn api_key(&self, api_key: &str) -> Self {
        self.mutate_clone(|x| x.api_key = Some(api_key.to_owned()))
    }

    pub fn request_headers(&self, request_headers: Vec<RequestHeader>) -> Self {
        self.mutate_clone(|x| x.request_headers = request_headers)
    }

    pub fn valid_http_status_code(&self, valid_http_status_code: Vec<Range<u16>>) -> Self {
        self.mutate_clone(|x| x.valid_http_status_code = valid_http_status_code)
    }

    pub fn timeout(&self, timeout: Duration) -> Self {
        self.mutate_clone(|x| x.timeout = timeout)
    }

    /// The API key, unless it is missing or blank.
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn is_valid_status(&self, status: u16) -> bool {
        self.valid_http_status_code
            .iter()
            .any(|range| range.contains(&status))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
