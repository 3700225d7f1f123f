//! Wallet address helpers.
//!
//! Connecting does not talk to a real wallet yet: the session mints a
//! random address shaped like a TON user-friendly address. A signed
//! TON Connect handshake should replace `mock_address`.

use rand::distributions::Alphanumeric;
use rand::Rng;

const ADDRESS_PREFIX: &str = "UQC";
const ADDRESS_LEN: usize = 48;

/// `"UQC"` followed by uppercase alphanumerics, 48 characters in total.
pub fn mock_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let body: String = rng
        .sample_iter(Alphanumeric)
        .take(ADDRESS_LEN - ADDRESS_PREFIX.len())
        .map(|b| char::from(b).to_ascii_uppercase())
        .collect();
    format!("{ADDRESS_PREFIX}{body}")
}

/// `UQCABC...WXYZ` for compact display.
pub fn shorten_address(address: &str) -> String {
    if address.len() > 12 && address.is_ascii() {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
