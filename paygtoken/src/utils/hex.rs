//! Hexadecimal helpers for key material and signed records.

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a compact hex string (no separators) into bytes. Both cases are
/// accepted.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex character '{}'", bad));
    }
    if s.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    // from_str_radix would accept a leading '+', hence the digit check above
    s.as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = (pair[0] as char).to_digit(16).unwrap_or(0) as u8;
            let lo = (pair[1] as char).to_digit(16).unwrap_or(0) as u8;
            Ok((hi << 4) | lo)
        })
        .collect()
}
