//! Result types produced by the subnetting engine.

use serde::{Deserialize, Serialize};

/// First and last host-assignable address of a block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UsableRange {
    pub first: String,
    pub last: String,
}

/// One row of an equal-size partition.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// 1-based position within the partition.
    pub index: usize,
    /// Prefix length of the child block.
    pub cidr: u8,
    pub network_address: String,
    pub broadcast_address: String,
    pub usable_range: UsableRange,
    pub hosts_per_subnet: u64,
}

/// A block split into equal children.
///
/// At most [`crate::processing::MAX_SUBNETS_TO_SHOW`] rows are kept;
/// `truncated` is set when more were requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub subnets: Vec<Subnet>,
    pub truncated: bool,
    /// Number of subnets the caller asked for.
    pub requested: u64,
}

/// Everything derived for one address and prefix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkDetails {
    pub address: String,
    pub cidr: u8,
    pub subnet_mask: String,
    pub wildcard_mask: String,
    pub network_address: String,
    pub broadcast_address: String,
    pub usable_range: UsableRange,
    pub total_addresses: u64,
    pub max_hosts: u64,
    pub max_subnets: u64,
    pub partition: Partition,
}
