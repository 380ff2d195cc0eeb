use crate::{ApiError, CreateUserRequest};

use axum::http::{HeaderMap, HeaderValue, header::CONTENT_TYPE};

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

#[test]
fn test_missing_content_type_yields_no_fields() {
    let req = CreateUserRequest::from_body(&HeaderMap::new(), br#"{"name":"Ada"}"#).unwrap();

    assert_eq!(req.name, None);
    assert_eq!(req.email, None);
}

#[test]
fn test_blank_json_body_yields_no_fields() {
    let req = CreateUserRequest::from_body(&json_headers(), b"  \n").unwrap();

    assert_eq!(req.name, None);
    assert_eq!(req.email, None);
}

#[test]
fn test_vendor_json_media_type_is_parsed() {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/vnd.api+json"),
    );

    let req = CreateUserRequest::from_body(&headers, br#"{"name":"Ada","email":"a@x.com"}"#)
        .unwrap();

    assert_eq!(req.name.as_deref(), Some("Ada"));
    assert_eq!(req.email.as_deref(), Some("a@x.com"));
}

#[test]
fn test_malformed_json_error_points_at_caller() {
    let headers = json_headers();

    let (result, call_line) = (CreateUserRequest::from_body(&headers, b"{nope"), line!());

    match result {
        Err(ApiError::BadRequest { message, location }) => {
            assert!(message.starts_with("Failed to parse the request body as JSON"));
            assert!(location.file.ends_with("create_user_request.rs"));
            assert!(location.file.contains("tests"));
            assert_eq!(location.line, call_line);
        }
        other => panic!("Expected BadRequest, got {:?}", other),
    }
}
