#[path = "../common/mod.rs"]
mod common;

use paygtoken::protocol::{TokenEncoding, decode_default, generate_token};
use paygtoken::test_support::{GOLDEN_PACKED, golden_secret};
use paygtoken::types::Counter;
use proptest::prelude::*;

fn golden_with(encoding: Option<&str>) -> String {
    generate_token("unlock_relative", Some("30"), Counter::new(42), &golden_secret(), encoding)
        .unwrap()
        .text
}

#[test]
fn custom_encodings_of_golden_token() {
    assert_eq!(golden_with(None), "126 617 558");
    assert_eq!(golden_with(Some("*+1-4+#")), "*24314111244223#");
    assert_eq!(golden_with(Some("*+1-4+#+space4")), "*243 1411 1244 223#");
    assert_eq!(golden_with(Some("*+1-4+#+space")), "* 243 141 112 442 23#");
    assert_eq!(golden_with(Some("+0-9+")), "126617558");
}

#[test]
fn unrecognised_encoding_is_plain_decimal() {
    assert_eq!(golden_with(Some("numeric")), "126617558");
    assert_eq!(golden_with(Some("hex")), "126617558");
}

#[test]
fn custom_encoding_decodes_back() {
    let enc = TokenEncoding::from_spec(Some("*+1-4+#+space4"));
    let packed = enc.decode("*243 1411 1244 223#").unwrap();
    assert_eq!(packed.value(), GOLDEN_PACKED);
}

proptest! {
    #[test]
    fn default_encoding_roundtrip(counter in any::<u32>(), days in 0u32..1000) {
        let days = days.to_string();
        let t = generate_token("unlock_relative", Some(&days), Counter::new(counter), &golden_secret(), None).unwrap();
        prop_assert_eq!(decode_default(&t.text), Some(t.packed));
        prop_assert!(t.text.split(' ').all(|g| !g.is_empty() && g.len() <= 3));
    }
}
