//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Block`] for an address with a prefix length, the
//! dotted-decimal <-> integer conversions, mask derivation and the
//! capacity counts that depend only on the prefix length.

use crate::error::{Result, SubnetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask with `len` leading one-bits. `len` must already be within 0..=32.
fn mask_bits(len: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_LENGTH.saturating_sub(len)))
        .unwrap_or(0)
}

fn check_prefix(len: u8) -> Result<u8> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidPrefix(len))
    } else {
        Ok(len)
    }
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_prefix(len).map(mask_bits)
}

// Canonical decimal only: digits, no sign, no leading zero except "0".
fn parse_octet(octet: &str) -> Option<u8> {
    let canonical = !octet.is_empty()
        && octet.len() <= 3
        && octet.bytes().all(|b| b.is_ascii_digit())
        && (octet == "0" || !octet.starts_with('0'));
    if canonical {
        octet.parse().ok()
    } else {
        None
    }
}

/// Parse a dotted-decimal string into an [`Ipv4Addr`].
pub fn parse_address(dotted: &str) -> Result<Ipv4Addr> {
    let octets: Vec<&str> = dotted.split('.').collect();
    if octets.len() != 4 {
        return Err(SubnetError::Parse(dotted.to_string()));
    }
    let mut bytes = [0u8; 4];
    for (slot, octet) in bytes.iter_mut().zip(octets.iter()) {
        *slot = parse_octet(octet).ok_or_else(|| SubnetError::Parse(dotted.to_string()))?;
    }
    Ok(Ipv4Addr::from(bytes))
}

/// Pack a dotted-decimal address big-endian into a u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::address_to_integer;
/// assert_eq!(address_to_integer("192.168.1.1").unwrap(), 3232235777);
/// assert!(address_to_integer("192.168.01.1").is_err());
/// ```
pub fn address_to_integer(dotted: &str) -> Result<u32> {
    parse_address(dotted).map(u32::from)
}

/// Format an integer as a dotted-decimal address.
///
/// The value is truncated to its low 32 bits first, so `-1` becomes
/// `255.255.255.255`.
pub fn integer_to_address(value: i64) -> String {
    Ipv4Addr::from(value as u32).to_string()
}

/// Dotted-decimal subnet mask for a prefix length.
pub fn subnet_mask_for(prefix: u8) -> Result<String> {
    get_cidr_mask(prefix).map(|mask| Ipv4Addr::from(mask).to_string())
}

/// Bitwise complement of a dotted-decimal subnet mask.
pub fn wildcard_mask_for(subnet_mask: &str) -> Result<String> {
    let mask = address_to_integer(subnet_mask)?;
    Ok(Ipv4Addr::from(!mask).to_string())
}

/// Usable hosts in a block: `2^(32-prefix) - 2`, and 0 for /31 and /32.
pub fn max_hosts(prefix: u8) -> Result<u64> {
    let total = total_addresses(prefix)?;
    if prefix >= MAX_LENGTH - 1 {
        Ok(0)
    } else {
        Ok(total - 2)
    }
}

/// All addresses in a block including network and broadcast.
pub fn total_addresses(prefix: u8) -> Result<u64> {
    check_prefix(prefix).map(|p| 1u64 << (MAX_LENGTH - p))
}

/// Number of /32 blocks the given block can be split into.
pub fn max_subnets(prefix: u8) -> Result<u64> {
    total_addresses(prefix)
}

/// IPv4 address with a prefix length, written as `a.b.c.d/n`.
///
/// The address is kept as given; use [`Ipv4Block::network`] for the
/// aligned block start.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Block {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Block {
    /// Create a block from an address and a prefix length in 0..=32.
    pub fn from_parts(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Block> {
        let prefix = check_prefix(prefix)?;
        Ok(Ipv4Block { addr, prefix })
    }

    /// Create a new [`Ipv4Block`] from a CIDR string (e.g. "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Block> {
        let addr_cidr = addr_cidr.trim();
        let (addr, prefix) = addr_cidr
            .split_once('/')
            .ok_or_else(|| SubnetError::Parse(addr_cidr.to_string()))?;
        let addr = parse_address(addr)?;
        // same canonical digits as an octet, range checked by from_parts
        let prefix =
            parse_octet(prefix).ok_or_else(|| SubnetError::Parse(addr_cidr.to_string()))?;
        Ipv4Block::from_parts(addr, prefix)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Subnet mask as u32.
    pub fn mask(&self) -> u32 {
        mask_bits(self.prefix)
    }

    /// Lowest (network) address in the block.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask())
    }

    /// Highest (broadcast) address in the block.
    pub fn broadcast(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network()) | !self.mask())
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.network() && ip <= self.broadcast()
    }
}

impl FromStr for Ipv4Block {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        Ipv4Block::new(s)
    }
}

impl std::fmt::Display for Ipv4Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for Ipv4Block {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Block {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Block::new(&s).map_err(de::Error::custom)
    }
}
