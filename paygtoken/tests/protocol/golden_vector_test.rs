#[path = "../common/mod.rs"]
mod common;

use paygtoken::protocol::{decode_default, generate_token, verify_token};
use paygtoken::test_support::{
    GOLDEN_COMMAND, GOLDEN_COUNTER, GOLDEN_PACKED, GOLDEN_PAYLOAD, GOLDEN_TOKEN, golden_secret,
};
use paygtoken::types::{Counter, Secret};

#[test]
fn golden_vector_is_stable() {
    for _ in 0..3 {
        let t = generate_token(
            GOLDEN_COMMAND,
            Some(GOLDEN_PAYLOAD),
            Counter::new(GOLDEN_COUNTER),
            &golden_secret(),
            None,
        )
        .unwrap();
        assert_eq!(t.packed.value(), GOLDEN_PACKED);
        assert_eq!(t.text, GOLDEN_TOKEN);
    }
}

#[test]
fn golden_vector_through_hex_crate_key() {
    // key decoded by an independent hex implementation
    let key = hex::decode("0123456789abcdef0123456789abcdef").unwrap();
    let t = generate_token(
        "UNLOCK_RELATIVE",
        Some("30"),
        Counter::new(42),
        &Secret::from_bytes(key),
        None,
    )
    .unwrap();
    assert_eq!(t.text, GOLDEN_TOKEN);
}

#[test]
fn golden_token_decodes_and_verifies() {
    let packed = decode_default(GOLDEN_TOKEN).unwrap();
    assert_eq!(packed.value(), GOLDEN_PACKED);
    assert!(verify_token(packed, Counter::new(GOLDEN_COUNTER), &golden_secret()).unwrap());
}

#[test]
fn reference_vectors() {
    // (command, payload, counter, packed, rendered)
    let cases = [
        ("unlock_relative", Some("30"), 43, 126_418_115u64, "126 418 115"),
        ("unlock_forever", None, 1, 4_005_222, "4 005 222"),
        ("lock", None, 5, 295_440, "295 440"),
        ("counter_sync", Some("3"), 7, 113_037_354, "113 037 354"),
        ("demo_mode", Some("0"), 1, 1_238_261, "1 238 261"),
    ];
    for (cmd, payload, counter, packed, text) in cases {
        let t = generate_token(cmd, payload, Counter::new(counter), &golden_secret(), None).unwrap();
        assert_eq!(t.packed.value(), packed, "{}", cmd);
        assert_eq!(t.text, text, "{}", cmd);
    }
}
