//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures and the address arithmetic
//! they rest on:
//! - [`Ipv4Block`] - IPv4 address with CIDR notation support
//! - [`Subnet`] and [`Partition`] - Equal-size subdivision of a block
//! - [`NetworkDetails`] - Full report for one address and prefix

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    address_to_integer, get_cidr_mask, integer_to_address, max_hosts, max_subnets, parse_address,
    subnet_mask_for, total_addresses, wildcard_mask_for, Ipv4Block, MAX_LENGTH,
};
pub use subnet::{NetworkDetails, Partition, Subnet, UsableRange};
