use assert_json_diff::assert_json_eq;
use bassa_client::model::responses::ApiResponse;
use serde_json::json;

#[test]
fn pretty_keeps_keys_values_and_order() {
    let raw = r#"{"zeta":1,"alpha":{"nested":[1,2,3],"flag":true},"name":"rand"}"#;
    let response = ApiResponse::from_text(raw).expect("decode");

    let pretty = response.pretty().expect("pretty");
    assert!(pretty.contains('\n'));
    assert!(pretty.find("zeta").unwrap() < pretty.find("alpha").unwrap());

    let reparsed: serde_json::Value = serde_json::from_str(&pretty).expect("reparse");
    assert_json_eq!(reparsed, serde_json::from_str::<serde_json::Value>(raw).unwrap());
}

#[test]
fn blank_text_is_null() {
    assert!(ApiResponse::from_text("").expect("decode").is_null());
    assert!(ApiResponse::from_text("  \n").expect("decode").is_null());
}

#[test]
fn invalid_text_is_error() {
    assert!(ApiResponse::from_text("{").is_err());
}

#[test]
fn serializes_transparently() {
    let response = ApiResponse::new(json!({"a": [1, 2]}));
    assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"a":[1,2]}"#);
    assert_eq!(response.to_string(), r#"{"a":[1,2]}"#);
    assert_eq!(response.get("a"), Some(&json!([1, 2])));
    assert_json_eq!(response.into_inner(), json!({"a": [1, 2]}));
}
