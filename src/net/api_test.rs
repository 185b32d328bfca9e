use super::*;

#[test]
fn is_success_accepts_only_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(401));
    assert!(!is_success(500));
}

#[test]
fn parse_token_response_reads_backend_token_shape() {
    let body = r#"{"access_token":"T","refresh_token":"R","token_type":"bearer"}"#;
    let token = parse_token_response(body).unwrap();
    assert_eq!(token.access_token, "T");
    assert_eq!(token.refresh_token.as_deref(), Some("R"));
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
}

#[test]
fn parse_token_response_only_requires_access_token() {
    let token = parse_token_response(r#"{"access_token":"T"}"#).unwrap();
    assert_eq!(token.access_token, "T");
    assert_eq!(token.refresh_token, None);
    assert_eq!(token.token_type, None);
}

#[test]
fn parse_token_response_without_access_token_is_decode_error() {
    let err = parse_token_response(r#"{"detail":"Invalid credentials"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.to_string().starts_with("unexpected response: "));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status { status: 401 }.to_string(), "login rejected: 401");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[test]
fn http_auth_api_targets_configured_login_url() {
    let api = HttpAuthApi::new(&ClientConfig::from_base_url(Some("http://localhost:8000/api/v1/")));
    assert_eq!(api.login_url(), "http://localhost:8000/api/v1/auth/login");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_auth_api_is_unavailable_without_hydrate() {
    let api = HttpAuthApi::new(&ClientConfig::default());
    let result = futures::executor::block_on(api.login(&LoginRequest::new("alice", "pw")));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[test]
fn login_request_serializes_credentials() {
    let json = serde_json::to_value(LoginRequest::new("alice", "pw")).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "alice", "password": "pw" }));
}

#[test]
fn login_request_debug_redacts_password() {
    let rendered = format!("{:?}", LoginRequest::new("alice", "hunter2"));
    assert!(rendered.contains("alice"));
    assert!(!rendered.contains("hunter2"));
}
