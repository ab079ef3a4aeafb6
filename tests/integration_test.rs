use inn_check::{
    normalize, validate_all, validate_inn, CompanyStatus, DadataDirectory, DirectoryConfig,
    HttpRequest, HttpResponse, HttpTransport, Inn, InnKind, InnSearch, InnValidationError,
    InvalidReason, LookupError, RussianInnChecksum, SearchError, Validator,
};
use std::sync::{Arc, Mutex};
use std::thread;

const W: [u32; 10] = [2, 4, 10, 3, 5, 9, 4, 6, 8, 0];
const W1: [u32; 11] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];
const W2: [u32; 12] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8, 0];

fn reference_control(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    (sum % 11) % 10
}

fn digits_of(code: &str) -> Vec<u32> {
    code.chars().map(|c| c.to_digit(10).unwrap()).collect()
}

/// Deterministic pseudo random digit strings, so the properties below cover
/// more than a handful of hand picked codes.
fn generate_codes(len: usize, count: usize) -> Vec<String> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    char::from(b'0' + (state % 10) as u8)
                })
                .collect()
        })
        .collect()
}

#[test]
fn concrete_cases() {
    assert_eq!(validate_inn("7707083893").unwrap().as_str(), "7707083893");
    assert_eq!(
        validate_inn("7707083892"),
        Err(InnValidationError::ChecksumMismatch)
    );
    assert_eq!(validate_inn("770-708 3893").unwrap().as_str(), "7707083893");
    assert_eq!(
        validate_inn("12345678901").unwrap_err().reason(),
        InvalidReason::InvalidLength
    );
    assert_eq!(
        validate_inn("770708389A").unwrap_err().reason(),
        InvalidReason::NonDigitCharacter
    );
    assert_eq!(
        validate_inn("500100732258"),
        Err(InnValidationError::ChecksumMismatch)
    );
}

#[test]
fn organization_codes_match_reference_checksum() {
    for code in generate_codes(10, 2_000) {
        let digits = digits_of(&code);
        let expected = reference_control(&digits[..9], &W) == digits[9];
        assert_eq!(validate_inn(&code).is_ok(), expected, "{}", code);
        if !expected {
            assert_eq!(
                validate_inn(&code),
                Err(InnValidationError::ChecksumMismatch)
            );
        }
    }
}

#[test]
fn individual_codes_match_reference_checksum() {
    for code in generate_codes(12, 2_000) {
        let digits = digits_of(&code);
        let expected = reference_control(&digits[..10], &W1) == digits[10]
            && reference_control(&digits[..11], &W2) == digits[11];
        assert_eq!(validate_inn(&code).is_ok(), expected, "{}", code);
    }
}

#[test]
fn fixing_check_digits_makes_codes_valid() {
    for code in generate_codes(12, 200) {
        let mut digits = digits_of(&code);
        digits[10] = reference_control(&digits[..10], &W1);
        digits[11] = reference_control(&digits[..11], &W2);
        let fixed: String = digits.iter().map(|d| d.to_string()).collect();
        let inn = validate_inn(&fixed).unwrap();
        assert_eq!(inn.kind(), InnKind::Individual);

        // Breaking only the second check digit is still a mismatch
        let mut broken = fixed.clone();
        let last = (digits[11] + 1) % 10;
        broken.replace_range(11.., &last.to_string());
        assert_eq!(
            validate_inn(&broken),
            Err(InnValidationError::ChecksumMismatch)
        );
    }
}

#[test]
fn separators_do_not_change_the_verdict() {
    for code in generate_codes(10, 200) {
        let formatted = format!(" {}-{} {} ", &code[..3], &code[3..6], &code[6..]);
        assert_eq!(validate_inn(&formatted), validate_inn(&code));
        assert_eq!(normalize(&formatted), code);
    }
}

#[test]
fn foreign_characters_win_over_length() {
    for input in ["A", "77070838930000000x", "7707083893.", "+7707083893", "7707083893\u{0}"] {
        assert_eq!(
            validate_inn(input).unwrap_err().reason(),
            InvalidReason::NonDigitCharacter,
            "{:?}",
            input
        );
    }
}

#[test]
fn wrong_lengths() {
    for len in [0, 1, 9, 11, 13, 20] {
        let code = "1".repeat(len);
        assert_eq!(
            validate_inn(&code),
            Err(InnValidationError::InvalidLength { length: len })
        );
    }
}

#[test]
fn validator_and_validate_inn_agree_on_normalized_codes() {
    for code in generate_codes(10, 500).into_iter().chain(generate_codes(12, 500)) {
        assert_eq!(
            RussianInnChecksum.is_valid_match(&code),
            validate_inn(&code).is_ok()
        );
    }
}

#[test]
fn concurrent_validation() {
    let codes = Arc::new(generate_codes(12, 1_000));
    let expected: Vec<bool> = codes.iter().map(|c| validate_inn(c).is_ok()).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let codes = Arc::clone(&codes);
            thread::spawn(move || {
                codes
                    .iter()
                    .map(|c| validate_inn(c).is_ok())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    let parallel: Vec<bool> = validate_all(codes.as_slice()).iter().map(|v| v.is_ok()).collect();
    assert_eq!(parallel, expected);
}

struct RecordingTransport {
    status: u16,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl HttpTransport for RecordingTransport {
    fn post(&self, request: &HttpRequest) -> Result<HttpResponse, String> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn dadata_search(
    config: DirectoryConfig,
    status: u16,
    body: &str,
) -> InnSearch<DadataDirectory<RecordingTransport>> {
    InnSearch::new(DadataDirectory::new(
        config,
        RecordingTransport {
            status,
            body: body.to_string(),
            requests: Mutex::new(vec![]),
        },
    ))
}

#[test]
fn search_end_to_end() {
    let body = r#"{"suggestions": [{"value": "ПАО СБЕРБАНК", "data": {
        "inn": "7707083893",
        "ogrn": "1027700132195",
        "name": {"full_with_opf": "ПАО \"СБЕРБАНК РОССИИ\"", "short_with_opf": "ПАО СБЕРБАНК"},
        "address": {"unrestricted_value": "117312, г Москва, ул Вавилова, д 19"},
        "state": {"status": "ACTIVE"}
    }}]}"#;
    let search = dadata_search(DirectoryConfig::new("secret"), 200, body);

    let record = search.search("7707-083-893").unwrap();
    assert_eq!(record.display_name(), Some("ПАО \"СБЕРБАНК РОССИИ\""));
    assert_eq!(record.ogrn.as_deref(), Some("1027700132195"));
    assert_eq!(record.status(), Some(CompanyStatus::Active));

    let directory = search.directory();
    assert_eq!(directory.config().api_key.as_deref(), Some("secret"));
    let requests = directory.transport().requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, r#"{"query":"7707083893"}"#);
}

#[test]
fn search_rejects_invalid_inn_before_the_directory() {
    let search = dadata_search(DirectoryConfig::new("secret"), 200, "{}");
    assert_eq!(
        search.search("7707083892"),
        Err(SearchError::InvalidInn(InnValidationError::ChecksumMismatch))
    );
    let requests = search.directory().transport().requests.lock().unwrap();
    assert!(requests.is_empty());
}

#[test]
fn search_surfaces_directory_outcomes() {
    let search = dadata_search(DirectoryConfig::default(), 200, "{}");
    assert_eq!(
        search.search("7707083893"),
        Err(SearchError::Lookup(LookupError::MissingApiKey))
    );

    let search = dadata_search(DirectoryConfig::new("secret"), 200, r#"{"suggestions": []}"#);
    assert_eq!(
        search.search("500100732259"),
        Err(SearchError::Lookup(LookupError::NotFound))
    );

    let search = dadata_search(DirectoryConfig::new("secret"), 500, "");
    let err = search.search("500100732259").unwrap_err();
    assert!(matches!(err, SearchError::Lookup(ref e) if e.is_service_error()));
}

#[test]
fn inn_serde_round_trip_in_documents() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Counterparty {
        inn: Inn,
    }

    let parsed: Counterparty = serde_json::from_str(r#"{"inn": "500-100-732-259"}"#).unwrap();
    assert_eq!(parsed.inn.kind(), InnKind::Individual);
    assert_eq!(
        serde_json::to_string(&parsed).unwrap(),
        r#"{"inn":"500100732259"}"#
    );
    assert!(serde_json::from_str::<Counterparty>(r#"{"inn": "500100732258"}"#).is_err());
}
