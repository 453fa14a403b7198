use crate::models::WalletError;

/// Encode bytes as lowercase hex, two characters per byte.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Normalize user-supplied hex: trim whitespace, lowercase, and strip a
/// single leading "0x" prefix.
pub fn normalize_hex(input: &str) -> String {
    let trimmed = input.trim().to_lowercase();
    match trimmed.strip_prefix("0x") {
        Some(rest) => rest.to_string(),
        None => trimmed,
    }
}

/// Decode a hex string into bytes after normalization.
///
/// The empty string decodes to an empty byte sequence. Odd-length input and
/// non-hex characters are rejected.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, WalletError> {
    let normalized = normalize_hex(input);
    if normalized.is_empty() {
        return Ok(Vec::new());
    }
    Ok(hex::decode(normalized)?)
}
