//! Input predicates for form-style front ends.
//!
//! These check raw text before any derivation runs. They never fail; a
//! front end maps `false` to its own message.

use crate::models::{max_hosts, max_subnets, MAX_LENGTH};
use regex::Regex;
use std::sync::OnceLock;

static IPV4_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_ipv4_regex() -> &'static Regex {
    IPV4_REGEX.get_or_init(|| {
        Regex::new(
            r"^(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])(\.(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])){3}$",
        )
        .expect("Invalid Regex")
    })
}

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^/(3[0-2]|[1-2]?[0-9])$").expect("Invalid Regex"))
}

/// Four decimal octets 0-255, no leading zeros, nothing else.
pub fn is_valid_ipv4(text: &str) -> bool {
    get_ipv4_regex().is_match(text)
}

/// `"/n"` with n in 0..=32.
pub fn is_valid_prefix(text: &str) -> bool {
    get_prefix_regex().is_match(text)
}

/// Parse prefix text written as `"/24"` or `"24"`.
pub fn parse_prefix(text: &str) -> Option<u8> {
    let text = text.trim();
    let slashed = if text.starts_with('/') {
        text.to_string()
    } else {
        format!("/{text}")
    };
    if is_valid_prefix(&slashed) {
        slashed[1..].parse().ok()
    } else {
        None
    }
}

// Empty means "not given"; anything else must be a plain non-negative integer.
fn parse_count(text: &str) -> Option<Option<u64>> {
    let text = text.trim();
    if text.is_empty() {
        Some(None)
    } else if text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok().map(Some)
    } else {
        None
    }
}

/// Host count field: empty, or 1..=max_hosts(prefix). 0 is accepted for
/// /31 and /32, which have no hosts in the traditional sense.
pub fn is_valid_host_count(prefix: u8, hosts: &str) -> bool {
    let Ok(max) = max_hosts(prefix) else {
        return false;
    };
    match parse_count(hosts) {
        Some(None) => true,
        Some(Some(0)) => prefix >= MAX_LENGTH - 1,
        Some(Some(n)) => n <= max,
        None => false,
    }
}

/// Subnet count field: empty, or 1..=max_subnets(prefix).
pub fn is_valid_subnet_count(prefix: u8, subnets: &str) -> bool {
    let Ok(max) = max_subnets(prefix) else {
        return false;
    };
    match parse_count(subnets) {
        Some(None) => true,
        Some(Some(n)) => (1..=max).contains(&n),
        None => false,
    }
}
