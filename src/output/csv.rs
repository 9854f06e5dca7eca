//! CSV output formatting for partition rows.

use crate::models::{NetworkDetails, Subnet};

use super::terminal::format_field;

/// CSV header matching [`format_csv_row`].
pub const CSV_HEADER: &str = r#" "cnt",       "subnet_cidr",         "network",       "broadcast",     "first_usable",      "last_usable", "hosts""#;

/// Format a single partition row as quoted, aligned CSV.
pub fn format_csv_row(row: &Subnet) -> String {
    format!(
        r#"{j},{subnet_cidr},{network},{broadcast},{first},{last},{hosts}"#,
        j = format_field(row.index, 6),
        subnet_cidr = format_field(format!("{}/{}", row.network_address, row.cidr), 20),
        network = format_field(&row.network_address, 17),
        broadcast = format_field(&row.broadcast_address, 17),
        first = format_field(&row.usable_range.first, 17),
        last = format_field(&row.usable_range.last, 17),
        hosts = format_field(row.hosts_per_subnet, 12),
    )
}

/// Render the partition as CSV.
///
/// Without a partition the whole block is written as a single row.
pub fn format_csv(d: &NetworkDetails) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    if d.partition.subnets.is_empty() {
        lines.push(format_csv_row(&Subnet {
            index: 1,
            cidr: d.cidr,
            network_address: d.network_address.clone(),
            broadcast_address: d.broadcast_address.clone(),
            usable_range: d.usable_range.clone(),
            hosts_per_subnet: d.max_hosts,
        }));
    } else {
        lines.extend(d.partition.subnets.iter().map(format_csv_row));
    }
    lines.join("\n")
}
