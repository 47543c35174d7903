/// Whether the value is an optionally `0x`-prefixed string of exactly 40 hex
/// digits.
pub fn is_valid_address(value: &str) -> bool {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    digits.len() == 40 && is_hex(digits)
}

/// Whether the value is a `0x`-prefixed string of hex digits.
///
/// The number of digits is not checked, so `"0x"` and `"0xabc"` are valid.
pub fn is_valid_bytes(value: &str) -> bool {
    value.strip_prefix("0x").is_some_and(is_hex)
}

fn is_hex(digits: &str) -> bool {
    digits.bytes().all(|digit| digit.is_ascii_hexdigit())
}
