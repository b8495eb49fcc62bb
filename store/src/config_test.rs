use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_empty() {
    let cfg = ApiConfig::from_lookup(|_| None);
    assert_eq!(cfg, ApiConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.history_user_id, 1);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[
        (ENV_API_BASE_URL, "https://geo.example.test/api/"),
        (ENV_PUBLIC_IP_URL, "https://ip.example.test/json"),
        (ENV_HISTORY_USER_ID, "42"),
    ]));
    assert_eq!(cfg.base_url, "https://geo.example.test/api");
    assert_eq!(cfg.public_ip_url, "https://ip.example.test/json");
    assert_eq!(cfg.history_user_id, 42);
}

#[test]
fn from_lookup_ignores_blank_and_invalid_values() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[(ENV_API_BASE_URL, "   "), (ENV_HISTORY_USER_ID, "abc")]));
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.history_user_id, DEFAULT_HISTORY_USER_ID);
}

#[test]
fn url_joins_base_and_path() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.url("/geo/history/1"), "http://localhost:3500/geo/history/1");
}
