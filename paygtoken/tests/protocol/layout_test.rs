#[path = "../common/mod.rs"]
mod common;

use paygtoken::constants::{CMD_BITS, CMD_EXT, CMD_EXT_BITS, HMAC_BITS};
use paygtoken::protocol::{Layout, PayloadRule, catalog, generate_token, sign, unpack};
use paygtoken::test_support::golden_secret;
use paygtoken::types::Counter;
use proptest::prelude::*;

proptest! {
    // Re-derive opcode, payload and signature from the packed value with
    // the layout formulas and compare against the inputs.
    #[test]
    fn packed_value_matches_layout_formula(
        idx in 0usize..8,
        payload in 0u32..1024,
        counter in any::<u32>(),
    ) {
        let def = &catalog::all()[idx];
        let payload_text = match def.rule {
            PayloadRule::Integer => payload.to_string(),
            PayloadRule::MustBeZero | PayloadRule::MustBeAbsent => "0".to_string(),
        };
        let t = generate_token(def.name, Some(&payload_text), Counter::new(counter), &golden_secret(), None).unwrap();
        let v = t.packed.value();

        let sig = (v & ((1 << HMAC_BITS) - 1)) as u32;
        let expected_sig = sign(&golden_secret(), def.opcode, t.payload, Counter::new(counter)).unwrap();
        prop_assert_eq!(sig, expected_sig.as_u32());
        prop_assert!(sig < (1 << HMAC_BITS));

        let op = def.opcode.as_u32() as u64;
        if def.opcode.as_u32() < CMD_EXT {
            prop_assert_eq!((v >> HMAC_BITS) & 0b111, op);
            prop_assert_eq!(v >> (CMD_BITS + HMAC_BITS), t.payload as u64);
            prop_assert_eq!(unpack(t.packed).layout, Layout::Standard);
        } else {
            prop_assert_eq!((v >> HMAC_BITS) & 0b111, CMD_EXT as u64);
            prop_assert_eq!((v >> (CMD_BITS + HMAC_BITS)) & 0b111, op - CMD_EXT as u64);
            prop_assert_eq!(v >> (CMD_EXT_BITS + CMD_BITS + HMAC_BITS), t.payload as u64);
            prop_assert_eq!(unpack(t.packed).layout, Layout::Extended);
        }
        prop_assert_eq!(unpack(t.packed).opcode, def.opcode);
    }
}

#[test]
fn counter_sensitivity() {
    let sigs: Vec<u32> = (1000..1100u32)
        .map(|c| {
            generate_token("unlock_relative", Some("30"), Counter::new(c), &golden_secret(), None)
                .unwrap()
                .signature
                .as_u32()
        })
        .collect();
    let changed = sigs.windows(2).filter(|w| w[0] != w[1]).count();
    assert!(changed >= 98);
}
