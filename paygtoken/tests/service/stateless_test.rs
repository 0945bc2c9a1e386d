#[path = "../common/mod.rs"]
mod common;

use paygtoken::ErrorKind;
use paygtoken::service::{ResponseStatus, TokenGenerationRequest, generate_stateless};
use paygtoken::test_support::{GOLDEN_SECRET_HEX, GOLDEN_TOKEN};

#[test]
fn golden_request_returns_fixture_token() {
    common::init_logger();
    let resp = generate_stateless(&common::fixtures::golden_request());
    assert_eq!(resp.status, ResponseStatus::Ok);
    assert_eq!(resp.token.as_deref(), Some(GOLDEN_TOKEN));
    assert_eq!(resp.sequence_number, 42);
}

#[test]
fn empty_secret_is_an_error_mentioning_secret() {
    let mut req = common::fixtures::golden_request();
    req.secret = Some(String::new());
    let resp = generate_stateless(&req);
    assert_eq!(resp.status, ResponseStatus::Error);
    assert!(resp.error.as_deref().unwrap().contains("secret"));
    assert_eq!(resp.token, None);
}

#[test]
fn same_inputs_same_token_different_counter_different_token() {
    let a = generate_stateless(&common::fixtures::golden_request());
    let b = generate_stateless(&common::fixtures::golden_request());
    assert_eq!(a.token, b.token);

    let c = generate_stateless(&common::fixtures::golden_request().sequence_number(43));
    assert_ne!(a.token, c.token);
}

#[test]
fn invalid_payload_is_input_validation() {
    let req = TokenGenerationRequest::new(common::fixtures::DEVICE, "lock")
        .payload("1")
        .secret(GOLDEN_SECRET_HEX);
    let resp = generate_stateless(&req);
    assert_eq!(resp.error_kind, Some(ErrorKind::InputValidation));
    assert!(resp.error.unwrap().contains("lock"));
}

#[test]
fn custom_encoding_applies() {
    let req = common::fixtures::golden_request().encoding("*+1-4+#+space4");
    let resp = generate_stateless(&req);
    assert_eq!(resp.token.as_deref(), Some("*243 1411 1244 223#"));
}
