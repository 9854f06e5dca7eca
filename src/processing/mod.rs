//! Subnet calculations built on the address models.
//!
//! - [`range`] - Network, broadcast and usable-range derivation
//! - [`partition`] - Splitting a block into equal subnets
//! - [`details`] - The combined report for one address and prefix

mod details;
mod partition;
mod range;

// Re-export public functions
pub use details::network_details;
pub use partition::{child_prefix, max_hosts_per_subnet, partition, MAX_SUBNETS_TO_SHOW};
pub use range::{broadcast_address, network_address, usable_range};
