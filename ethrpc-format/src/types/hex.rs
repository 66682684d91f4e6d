use crate::Result;

/// Conversion between a value and its `0x`-prefixed hex string form.
///
/// `decode_hex` validates, `encode_hex` returns the canonical text. For the
/// types in this crate the two compose to the identity on valid input.
pub trait Hex: Sized {
    fn encode_hex(&self) -> String;
    fn decode_hex(hex: &str) -> Result<Self>;

    fn encode_hex_with_quotes(&self) -> String {
        format!("\"{}\"", self.encode_hex())
    }
}

/// Lowercase hex digit, the only digits Hash and Quantity accept.
pub(crate) fn is_lower_hex(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f')
}
