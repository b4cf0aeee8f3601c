use color_eyre::eyre::{Result, eyre};
use serde::{Deserialize, Serialize};

/// Crockford-style alphabet used by Stacks c32 addresses.
const C32_ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Version prefixes for mainnet/testnet single-sig and multi-sig addresses.
const ADDRESS_PREFIXES: [&str; 4] = ["SP", "SM", "ST", "SN"];

const MIN_ADDRESS_LEN: usize = 28;
const MAX_ADDRESS_LEN: usize = 41;

/// The identity carried by the presence signal while a wallet is connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub address: String,
    pub username: Option<String>,
}

impl User {
    /// Build a user from wallet-connect input, validating the address.
    ///
    /// Blank usernames are treated as absent.
    pub fn new(address: &str, username: Option<&str>) -> Result<Self> {
        let address = address.trim().to_string();
        validate_stacks_address(&address)?;

        let username = username
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self { address, username })
    }

    /// The username if it is set and non-empty.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }
}

/// Check that `address` looks like a Stacks c32 principal.
pub fn validate_stacks_address(address: &str) -> Result<()> {
    let len = address.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return Err(eyre!(
            "Address must be {}-{} characters, got {}",
            MIN_ADDRESS_LEN,
            MAX_ADDRESS_LEN,
            len
        ));
    }

    if !ADDRESS_PREFIXES.iter().any(|prefix| address.starts_with(prefix)) {
        return Err(eyre!("Address must start with SP, SM, ST or SN"));
    }

    if let Some(bad) = address.chars().skip(1).find(|c| !C32_ALPHABET.contains(*c)) {
        return Err(eyre!("Invalid character '{}' in address", bad));
    }

    Ok(())
}
