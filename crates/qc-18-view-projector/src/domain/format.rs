//! Display formatting helpers shared by all view records.

use shared_types::U256;

/// Named Wei denominations, largest first, as powers of ten.
const DENOMINATIONS: [(usize, &str); 8] = [
    (42, "Douglas"),
    (21, "Einstein"),
    (18, "Ether"),
    (15, "Finney"),
    (12, "Szabo"),
    (9, "Shannon"),
    (6, "Babbage"),
    (3, "Ada"),
];

/// Quotients longer than this are abbreviated with an exponent.
const MAX_AMOUNT_DIGITS: usize = 5;

/// Lowercase hex without prefix.
#[inline]
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Canonical form of a user-supplied hex string: no `0x` prefix, lowercase.
///
/// Returns `None` for odd-length input or non-hex characters.
pub fn normalize_hex(input: &str) -> Option<String> {
    let trimmed = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if trimmed.len() % 2 != 0 || !trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    Some(trimmed.to_ascii_lowercase())
}

/// Renders a Wei amount in the largest denomination it reaches.
///
/// `1_500_000_000_000_000_000` becomes `"1 Ether"` (integer division).
/// Amounts of more than five digits keep five and append `E<n>`.
pub fn currency_to_string(value: &U256) -> String {
    let (amount, unit) = DENOMINATIONS
        .iter()
        .map(|&(exp, unit)| (U256::exp10(exp), unit))
        .find(|(denom, _)| value >= denom)
        .map(|(denom, unit)| (*value / denom, unit))
        .unwrap_or((*value, "Wei"));

    let digits = amount.to_string();
    if digits.len() > MAX_AMOUNT_DIGITS {
        format!(
            "{}E{} {}",
            &digits[..MAX_AMOUNT_DIGITS],
            digits.len() - MAX_AMOUNT_DIGITS,
            unit
        )
    } else {
        format!("{} {}", digits, unit)
    }
}
