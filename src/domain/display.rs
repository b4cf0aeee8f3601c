//! Display rules for the account menu.

/// Characters kept at the start of a truncated address.
pub const TRUNCATE_PREFIX_LEN: usize = 4;
/// Characters kept at the end of a truncated address.
pub const TRUNCATE_SUFFIX_LEN: usize = 4;

const ELLIPSIS: char = '…';

/// Elide the middle of `input`, keeping a fixed prefix and suffix.
///
/// Inputs too short to benefit from truncation are returned unchanged.
pub fn truncate_middle(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= TRUNCATE_PREFIX_LEN + TRUNCATE_SUFFIX_LEN + 1 {
        return input.to_string();
    }

    let prefix: String = chars[..TRUNCATE_PREFIX_LEN].iter().collect();
    let suffix: String = chars[chars.len() - TRUNCATE_SUFFIX_LEN..].iter().collect();
    format!("{}{}{}", prefix, ELLIPSIS, suffix)
}

/// Pick the name shown for an account.
///
/// The first resolved name wins, then the username, then the truncated
/// address. Empty strings count as missing.
pub fn account_name(names: &[String], username: Option<&str>, address: &str) -> String {
    if let Some(name) = names.first().filter(|n| !n.is_empty()) {
        return name.clone();
    }
    if let Some(username) = username.filter(|u| !u.is_empty()) {
        return username.to_string();
    }
    truncate_middle(address)
}

/// Format a token balance, showing `0` when it is missing or zero.
pub fn balance_label(balance: Option<u128>, symbol: &str) -> String {
    format!("{} {}", balance.unwrap_or_default(), symbol)
}
