use super::*;

#[test]
fn network_error_keeps_transport_message() {
    assert_eq!(network_error("connection refused"), ApiError::Network("connection refused".to_owned()));
}

#[test]
fn browser_api_exposes_its_config() {
    let api = BrowserApi::new(ApiConfig { base_url: "http://api.test".to_owned(), ..ApiConfig::default() });
    assert_eq!(api.config().url("/login"), "http://api.test/login");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_calls_as_unavailable() {
    let api = BrowserApi::new(ApiConfig::default());
    let err = futures::executor::block_on(api.refresh()).expect_err("no fetch outside the browser");
    assert!(matches!(err, ApiError::Network(_)));
}
