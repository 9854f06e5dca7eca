//! Integration tests for subnet-calc
//!
//! These tests exercise the public library surface from parsed arguments to
//! rendered output.

use clap::Parser;
use subnet_calc::{
    address_to_integer, broadcast_address, config::Args, config::OutputFormat, integer_to_address,
    is_valid_ipv4, max_hosts, network_address, network_details, output::render, partition,
    subnet_mask_for, total_addresses, usable_range, wildcard_mask_for, SubnetError, UsableRange,
};

#[test]
fn test_full_workflow_from_args() {
    let args = Args::try_parse_from(["subnet-calc", "192.168.1.10/24", "--subnets", "4"])
        .expect("Failed to parse args");
    let request = args.into_request().expect("Failed to validate request");

    assert_eq!(request.block.network().to_string(), "192.168.1.0");
    let details = network_details(
        &request.block.addr().to_string(),
        request.block.prefix(),
        request.subnets,
    )
        .expect("Failed to calculate details");
    assert_eq!(details.network_address, "192.168.1.0");
    assert_eq!(details.partition.subnets.len(), 4);

    let json = render(&details, OutputFormat::Json).expect("Failed to render JSON");
    assert!(json.contains("\"192.168.1.192\""));
}

#[test]
fn test_non_canonical_inline_prefix_is_rejected() {
    for arg in ["192.168.1.10/024", "192.168.1.10/+24"] {
        let args = Args::try_parse_from(["subnet-calc", arg]).expect("Failed to parse args");
        assert!(args.into_request().is_err(), "{arg} should be rejected");
    }
}

#[test]
fn test_derivation_chain() {
    let mask = subnet_mask_for(24).unwrap();
    let network = network_address("192.168.1.10", &mask).unwrap();
    let broadcast = broadcast_address(&network, &mask).unwrap();
    assert_eq!(network, "192.168.1.0");
    assert_eq!(broadcast, "192.168.1.255");
    assert_eq!(wildcard_mask_for(&mask).unwrap(), "0.0.0.255");
    assert_eq!(
        usable_range(&network, &broadcast).unwrap(),
        UsableRange {
            first: "192.168.1.1".to_string(),
            last: "192.168.1.254".to_string()
        }
    );
}

#[test]
fn test_capacity_properties() {
    assert_eq!(max_hosts(24).unwrap(), 254);
    assert_eq!(max_hosts(31).unwrap(), 0);
    assert_eq!(max_hosts(32).unwrap(), 0);
    assert_eq!(max_hosts(16).unwrap(), 65534);
    assert_eq!(total_addresses(30).unwrap(), 4);
    assert_eq!(total_addresses(8).unwrap(), 16777216);
}

#[test]
fn test_partition_properties() {
    let p = partition("192.168.1.0", 24, 4).unwrap();
    let networks: Vec<String> = p.subnets.iter().map(|s| s.network_address.clone()).collect();
    assert_eq!(
        networks,
        ["192.168.1.0", "192.168.1.64", "192.168.1.128", "192.168.1.192"]
    );
    assert!(p.subnets.iter().all(|s| s.cidr == 26 && s.hosts_per_subnet == 62));

    assert!(matches!(
        partition("192.168.1.0", 24, 300),
        Err(SubnetError::SubnetsExceedCapacity { .. })
    ));
}

#[test]
fn test_round_trip_for_valid_addresses() {
    for a in [0u32, 1, 255, 256, 0x0A000001, 0xC0A80101, u32::MAX] {
        let text = integer_to_address(i64::from(a));
        assert!(is_valid_ipv4(&text), "{text} should validate");
        assert_eq!(address_to_integer(&text).unwrap(), a);
        assert_eq!(integer_to_address(i64::from(address_to_integer(&text).unwrap())), text);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let a = network_details("172.16.5.4", 20, Some(16)).unwrap();
    let b = network_details("172.16.5.4", 20, Some(16)).unwrap();
    assert_eq!(a, b);
}
