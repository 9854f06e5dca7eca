//! Combined report for one address and prefix.

use crate::error::Result;
use crate::models::{
    address_to_integer, max_hosts, max_subnets, subnet_mask_for, total_addresses,
    wildcard_mask_for, NetworkDetails, Partition,
};
use crate::processing::{broadcast_address, network_address, partition, usable_range};

/// Derive masks, bounds, capacities and (optionally) a partition.
///
/// # Arguments
/// * `address` - Any address inside the block, dotted decimal
/// * `prefix` - Prefix length 0-32
/// * `subnets` - Number of equal subnets to split into, if any
pub fn network_details(address: &str, prefix: u8, subnets: Option<u64>) -> Result<NetworkDetails> {
    log::debug!("network_details({address}/{prefix}, subnets={subnets:?})");
    address_to_integer(address)?;

    let subnet_mask = subnet_mask_for(prefix)?;
    let wildcard_mask = wildcard_mask_for(&subnet_mask)?;
    let network = network_address(address, &subnet_mask)?;
    let broadcast = broadcast_address(&network, &subnet_mask)?;
    let usable = usable_range(&network, &broadcast)?;

    let partition = match subnets {
        Some(count) if count > 1 => partition(&network, prefix, count)?,
        Some(count) => Partition {
            requested: count,
            ..Default::default()
        },
        None => Partition::default(),
    };
    if partition.truncated {
        log::warn!(
            "Partition of {network}/{prefix} truncated to {} of {} subnets",
            partition.subnets.len(),
            partition.requested
        );
    }

    Ok(NetworkDetails {
        address: address.to_string(),
        cidr: prefix,
        subnet_mask,
        wildcard_mask,
        network_address: network,
        broadcast_address: broadcast,
        usable_range: usable,
        total_addresses: total_addresses(prefix)?,
        max_hosts: max_hosts(prefix)?,
        max_subnets: max_subnets(prefix)?,
        partition,
    })
}
