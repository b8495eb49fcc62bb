use super::*;

#[test]
fn geo_path_embeds_parsed_ip() {
    let ip = parse_ip(" 8.8.8.8 ").expect("ipv4");
    assert_eq!(geo_path(ip), "/geo/8.8.8.8");
}

#[test]
fn geo_path_accepts_ipv6() {
    let ip = parse_ip("2001:4860:4860::8888").expect("ipv6");
    assert_eq!(geo_path(ip), "/geo/2001:4860:4860::8888");
}

#[test]
fn parse_ip_rejects_path_traversal() {
    assert_eq!(parse_ip("1.1.1.1/../login"), Err(ApiError::InvalidIp("1.1.1.1/../login".to_owned())));
}

#[test]
fn parse_ip_rejects_hostnames_and_blank_input() {
    assert!(matches!(parse_ip("example.com"), Err(ApiError::InvalidIp(_))));
    assert!(matches!(parse_ip("   "), Err(ApiError::InvalidIp(_))));
}

#[test]
fn history_path_embeds_user_id() {
    assert_eq!(history_path(1), "/geo/history/1");
}

#[test]
fn endpoint_url_joins_without_double_slash() {
    assert_eq!(endpoint_url("http://localhost:3500/", "/login"), "http://localhost:3500/login");
    assert_eq!(endpoint_url("http://localhost:3500", "geo/1.1.1.1"), "http://localhost:3500/geo/1.1.1.1");
}

#[test]
fn raw_scheme_sends_bare_token() {
    assert_eq!(AuthScheme::Raw.header_value("T1"), "T1");
}

#[test]
fn bearer_scheme_prefixes_token() {
    assert_eq!(AuthScheme::Bearer.header_value("T1"), "Bearer T1");
}
