//! IPv4 subnet calculator.
//!
//! Derives subnet and wildcard masks, network and broadcast addresses,
//! usable host ranges and equal-size subdivisions from an address and a
//! prefix length. Every calculation is a pure function of its inputs.
//!
//! # Modules
//! - [`models`] - Address types, conversions, masks and capacity counts
//! - [`processing`] - Range derivation, partitioning and the combined report
//! - [`validation`] - Input predicates for form-style front ends
//! - [`output`] - Text, CSV and JSON rendering
//! - [`config`] - Command-line configuration for the binary
//! - [`logging`] - log4rs setup with a console fallback

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod validation;

pub use error::SubnetError;
pub use models::{
    address_to_integer, integer_to_address, max_hosts, max_subnets, subnet_mask_for,
    total_addresses, wildcard_mask_for, Ipv4Block, NetworkDetails, Partition, Subnet, UsableRange,
};
pub use processing::{
    broadcast_address, max_hosts_per_subnet, network_address, network_details, partition,
    usable_range,
};
pub use validation::{is_valid_host_count, is_valid_ipv4, is_valid_prefix, is_valid_subnet_count};

use config::Request;
use std::error::Error;

/// Run one calculation for a validated request and print the result.
pub fn run(request: &Request) -> Result<NetworkDetails, Box<dyn Error>> {
    let block = request.block;
    log::info!(
        "#Start run() {block} hosts={:?} subnets={:?}",
        request.hosts,
        request.subnets
    );
    let details = network_details(&block.addr().to_string(), block.prefix(), request.subnets)?;
    if let Some(hosts) = request.hosts {
        log::info!(
            "{hosts} hosts requested, /{} offers {}",
            details.cidr,
            details.max_hosts
        );
    }
    output::print_details(&details, request.format)?;
    Ok(details)
}
