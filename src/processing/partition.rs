//! Equal-size subdivision of a block.
//!
//! A block is split into `2^ceil(log2(count))` children of the same size
//! and the first `count` of them are listed, up to [`MAX_SUBNETS_TO_SHOW`].

use crate::error::{Result, SubnetError};
use crate::models::{
    address_to_integer, get_cidr_mask, max_hosts, Partition, Subnet, UsableRange, MAX_LENGTH,
};
use crate::processing::range::usable_bounds;
use std::net::Ipv4Addr;

/// Upper bound on partition rows returned for a single request.
pub const MAX_SUBNETS_TO_SHOW: usize = 256;

/// Extra prefix bits needed to address `count` children: `ceil(log2(count))`.
fn extra_bits(count: u64) -> u32 {
    if count <= 1 {
        0
    } else {
        u64::BITS - (count - 1).leading_zeros()
    }
}

/// Prefix length of the children when `prefix` is split `count` ways.
pub fn child_prefix(prefix: u8, count: u64) -> Result<u8> {
    get_cidr_mask(prefix)?;
    let needed = extra_bits(count);
    let available = u32::from(MAX_LENGTH - prefix);
    if needed > available {
        return Err(SubnetError::SubnetsExceedCapacity {
            requested: count,
            prefix,
            needed,
            available,
        });
    }
    // needed <= available <= 32
    Ok(prefix + needed as u8)
}

/// Usable hosts in each child when `prefix` is split `count` ways.
pub fn max_hosts_per_subnet(prefix: u8, count: u64) -> Result<u64> {
    max_hosts(child_prefix(prefix, count)?)
}

/// Split the block `network/prefix` into `count` equal children.
///
/// A count of 0 or 1 yields an empty partition. The start address is
/// aligned to the block first, so any member address may be passed.
///
/// # Examples
/// ```
/// use subnet_calc::processing::partition;
/// let p = partition("192.168.1.0", 24, 4).unwrap();
/// assert_eq!(p.subnets.len(), 4);
/// assert_eq!(p.subnets[1].network_address, "192.168.1.64");
/// assert!(!p.truncated);
/// ```
pub fn partition(network: &str, prefix: u8, count: u64) -> Result<Partition> {
    let mask = get_cidr_mask(prefix)?;
    let start = address_to_integer(network)? & mask;
    if count <= 1 {
        return Ok(Partition {
            subnets: vec![],
            truncated: false,
            requested: count,
        });
    }

    let cidr = child_prefix(prefix, count)?;
    let increment = 1u64 << (MAX_LENGTH - cidr);
    let hosts_per_subnet = max_hosts(cidr)?;
    let shown = count.min(MAX_SUBNETS_TO_SHOW as u64);

    let subnets = (0..shown)
        .map(|i| {
            // children stay inside the parent block, so this fits in u32
            let first = u64::from(start) + i * increment;
            let network = first as u32;
            let broadcast = (first + increment - 1) as u32;
            let (lo, hi) = usable_bounds(network, broadcast);
            Subnet {
                index: i as usize + 1,
                cidr,
                network_address: Ipv4Addr::from(network).to_string(),
                broadcast_address: Ipv4Addr::from(broadcast).to_string(),
                usable_range: UsableRange {
                    first: Ipv4Addr::from(lo).to_string(),
                    last: Ipv4Addr::from(hi).to_string(),
                },
                hosts_per_subnet,
            }
        })
        .collect();

    Ok(Partition {
        subnets,
        truncated: count > shown,
        requested: count,
    })
}
