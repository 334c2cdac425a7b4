use std::collections::HashMap;
use std::time::Duration;

use clinica_client::config::{ClientConfig, DEFAULT_PAGE_SIZE};
use tracing::Level;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| values.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ClientConfig::from_lookup(lookup(&[("CLINICA_API_URL", "http://localhost:8080/")]))
        .expect("config should load");

    assert_eq!(config.api_url, "http://localhost:8080");
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_custom_values() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("CLINICA_API_URL", "https://clinica.example.com"),
        ("CLINICA_REQUEST_TIMEOUT_SECONDS", "5"),
        ("CLINICA_PAGE_SIZE", "20"),
        ("LOG_LEVEL", "debug"),
    ]))
    .expect("config should load");

    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert_eq!(config.page_size, 20);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_missing_api_url() {
    let result = ClientConfig::from_lookup(lookup(&[]));

    assert!(result.is_err());
}

#[test]
fn test_invalid_page_size() {
    let result = ClientConfig::from_lookup(lookup(&[
        ("CLINICA_API_URL", "http://localhost:8080"),
        ("CLINICA_PAGE_SIZE", "zero"),
    ]));

    assert!(result.is_err());
}

#[test]
fn test_unparsable_timeout_falls_back() {
    let config = ClientConfig::from_lookup(lookup(&[
        ("CLINICA_API_URL", "http://localhost:8080"),
        ("CLINICA_REQUEST_TIMEOUT_SECONDS", "soon"),
    ]))
    .expect("config should load");

    assert_eq!(config.request_timeout, 30);
}
