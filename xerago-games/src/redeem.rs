//! Redeem codes for game entries.

pub const SCRATCH_PREFIX: &str = "SCRATCH";
pub const WHEEL_PREFIX: &str = "WHEEL";
pub const PICK_PREFIX: &str = "PICK";

const MAX_BASE_LEN: usize = 8;
const SUFFIX: &str = "123";

/// `PREFIX + first 8 ASCII alphanumerics of text, upper-cased + "123"`.
pub fn derive_redeem_code(prefix: &str, text: &str) -> String {
    let base: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_BASE_LEN)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    format!("{}{}{}", prefix, base, SUFFIX)
}

/// Trimmed authored code when it is non-blank, otherwise a derived one.
pub fn resolve_redeem_code(authored: Option<&str>, prefix: &str, text: &str) -> String {
    match authored.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => derive_redeem_code(prefix, text),
    }
}
