//! Network, broadcast and usable-range derivation.
//!
//! All arithmetic runs on the full 32-bit value so ranges that span
//! several octets come out right.

use crate::error::Result;
use crate::models::{address_to_integer, UsableRange};
use std::net::Ipv4Addr;

/// Bitwise AND of an address and a mask.
///
/// # Examples
/// ```
/// use subnet_calc::processing::network_address;
/// assert_eq!(
///     network_address("192.168.1.10", "255.255.255.0").unwrap(),
///     "192.168.1.0"
/// );
/// ```
pub fn network_address(address: &str, mask: &str) -> Result<String> {
    let addr = address_to_integer(address)?;
    let mask = address_to_integer(mask)?;
    Ok(Ipv4Addr::from(addr & mask).to_string())
}

/// Network address OR the wildcard (inverted) mask.
pub fn broadcast_address(network: &str, mask: &str) -> Result<String> {
    let network = address_to_integer(network)?;
    let mask = address_to_integer(mask)?;
    Ok(Ipv4Addr::from(network | !mask).to_string())
}

/// First and last usable address between two block bounds.
///
/// Blocks of one or two addresses (/32, /31) have every address usable.
pub(crate) fn usable_bounds(network: u32, broadcast: u32) -> (u32, u32) {
    let (lo, hi) = (network.min(broadcast), network.max(broadcast));
    if hi - lo < 2 {
        (lo, hi)
    } else {
        (lo + 1, hi - 1)
    }
}

/// Usable host range of the block bounded by `network` and `broadcast`.
pub fn usable_range(network: &str, broadcast: &str) -> Result<UsableRange> {
    let (first, last) = usable_bounds(
        address_to_integer(network)?,
        address_to_integer(broadcast)?,
    );
    Ok(UsableRange {
        first: Ipv4Addr::from(first).to_string(),
        last: Ipv4Addr::from(last).to_string(),
    })
}
