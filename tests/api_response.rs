use serde_json::Value;
use setlist::api::response::{api_error, decode_body, extract_error_message};
use setlist::models::{Concert, Song};
use setlist::SetlistError;

#[test]
fn test_extract_error_message_with_error_field() {
    assert_eq!(
        extract_error_message(r#"{"error":"not found"}"#),
        Some("not found".to_string())
    );
}

#[test]
fn test_extract_error_message_without_error_field() {
    assert_eq!(extract_error_message(r#"{"message":"nope"}"#), None);
    assert_eq!(extract_error_message(r#"{"error":""}"#), None);
    assert_eq!(extract_error_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_error_message(""), None);
}

#[test]
fn test_api_error_user_message() {
    let err = api_error(404, r#"{"error":"not found"}"#);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message("Failed to delete"), "not found");

    let err = api_error(500, "internal");
    assert_eq!(err.user_message("Failed to delete"), "Failed to delete");
    assert_eq!(err.to_string(), "API error (status 500)");
}

#[test]
fn test_non_api_errors_use_fallback() {
    let err = SetlistError::Other("connection refused".to_string());
    assert_eq!(err.user_message("Failed to load"), "Failed to load");
}

#[test]
fn test_decode_concert_maps_user_id_to_owner() {
    let concert: Concert = decode_body(
        br#"{"id":5,"title":"Gig","date":"2025-03-01","location":"Oslo","user_id":2}"#,
    )
    .unwrap();
    assert_eq!(concert.id, 5);
    assert_eq!(concert.owner_id, 2);
    assert_eq!(concert.display_date(), "Sat, Mar 01 2025");
}

#[test]
fn test_decode_null_list() {
    let list: Option<Vec<Song>> = decode_body(b"null\n").unwrap();
    assert!(list.is_none());
}

#[test]
fn test_decode_empty_body() {
    let value: Value = decode_body(b"").unwrap();
    assert!(value.is_null());
}

#[test]
fn test_decode_invalid_json_is_an_error() {
    let result: Result<Concert, _> = decode_body(b"{\"id\":");
    assert!(matches!(result, Err(SetlistError::JsonError(_))));
}
