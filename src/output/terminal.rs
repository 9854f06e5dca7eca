//! Terminal output utilities.
//!
//! Provides formatting helpers and the human-readable report.

use crate::models::{NetworkDetails, Subnet};
use crate::processing::MAX_SUBNETS_TO_SHOW;
use colored::Colorize;

/// Quote an address, block or count and right-align it to `width`.
///
/// Values wider than `width` are kept whole, so CSV rows never lose
/// address digits.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

fn label_line(label: &str, value: impl ToString) -> String {
    format!("{:<18} {}", format!("{label}:").bold(), value.to_string())
}

fn subnet_line(s: &Subnet) -> String {
    format!(
        "{index:>5}  {block:<18} {network:<15} {broadcast:<15} {first} - {last}  {hosts}",
        index = s.index,
        block = format!("{}/{}", s.network_address, s.cidr),
        network = s.network_address,
        broadcast = s.broadcast_address,
        first = s.usable_range.first,
        last = s.usable_range.last,
        hosts = s.hosts_per_subnet,
    )
}

/// Render the report as aligned text, one fact per line, then the
/// partition table if subnets were requested.
pub fn format_details(d: &NetworkDetails) -> String {
    let mut lines = vec![
        label_line("Address", format!("{}/{}", d.address, d.cidr)),
        label_line("Subnet mask", &d.subnet_mask),
        label_line("Wildcard mask", &d.wildcard_mask),
        label_line("Network", &d.network_address),
        label_line("Broadcast", &d.broadcast_address),
        label_line(
            "Usable range",
            format!("{} - {}", d.usable_range.first, d.usable_range.last),
        ),
        label_line("Total addresses", d.total_addresses),
        label_line("Max hosts", d.max_hosts),
        label_line("Max subnets", d.max_subnets),
    ];

    let partition = &d.partition;
    if !partition.subnets.is_empty() {
        lines.push(String::new());
        lines.push(
            format!(
                "{:>5}  {:<18} {:<15} {:<15} {}  {}",
                "#", "subnet", "network", "broadcast", "usable", "hosts"
            )
            .bold()
            .to_string(),
        );
        lines.extend(partition.subnets.iter().map(subnet_line));
        if partition.truncated {
            lines.push(format!(
                "{} showing the first {} of {} subnets",
                "WARNING".on_red(),
                MAX_SUBNETS_TO_SHOW,
                partition.requested
            ));
        }
    }
    lines.join("\n")
}
